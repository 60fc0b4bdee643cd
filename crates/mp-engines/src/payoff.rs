//! Payoff vocabulary for the pricing engines.
//!
//! The payoff families are combinatorial: an Asian variant is one point on
//! the sampling × averaging × strike axes, a Lookback variant one point on
//! the option-type × strike axes. Each axis is its own enum so engines
//! dispatch on tags instead of nested conditionals, and each axis is
//! testable in isolation.

use mp_core::Real;
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// How path points enter the path statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingScheme {
    /// Every simulated point is retained.
    Continuous,
    /// Only points at time indices that are multiples of the engine's sample
    /// window are retained (index 0 always qualifies).
    Discrete,
}

/// The averaging function applied to the retained points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AverageType {
    /// Arithmetic mean.
    Arithmetic,
    /// Geometric mean; defined only for strictly positive values.
    Geometric,
}

/// What the path statistic is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrikeKind {
    /// A predetermined strike price.
    Fixed,
    /// The path's own maturity fixing; no predetermined strike.
    Floating,
}

/// Which path point supplies the maturity fixing for floating-strike
/// Lookback payoffs.
///
/// A simulated path has `step_count + 1` points indexed `0..=step_count`.
/// [`Penultimate`](TerminalConvention::Penultimate) reads the fixing at
/// index `step_count − 1`, the second-to-last point; this is the historical
/// convention of this engine family and the default.
/// [`Last`](TerminalConvention::Last) reads the true final point at index
/// `step_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerminalConvention {
    /// Fixing at index `step_count − 1`.
    #[default]
    Penultimate,
    /// Fixing at index `step_count`.
    Last,
}

/// One of the eight Asian payoff variants (per option type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AsianVariant {
    /// Sampling scheme along the path.
    pub sampling: SamplingScheme,
    /// Averaging function over the retained points.
    pub average: AverageType,
    /// Fixed or floating strike.
    pub strike: StrikeKind,
}

impl AsianVariant {
    /// Assemble a variant from its three axes.
    pub fn new(sampling: SamplingScheme, average: AverageType, strike: StrikeKind) -> Self {
        Self {
            sampling,
            average,
            strike,
        }
    }

    /// All eight variants, for exhaustive iteration in tests.
    pub fn all() -> [AsianVariant; 8] {
        let mut out = [AsianVariant::new(
            SamplingScheme::Continuous,
            AverageType::Arithmetic,
            StrikeKind::Fixed,
        ); 8];
        let mut i = 0;
        for sampling in [SamplingScheme::Continuous, SamplingScheme::Discrete] {
            for average in [AverageType::Arithmetic, AverageType::Geometric] {
                for strike in [StrikeKind::Fixed, StrikeKind::Floating] {
                    out[i] = AsianVariant::new(sampling, average, strike);
                    i += 1;
                }
            }
        }
        out
    }
}

/// One of the four Lookback payoff variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookbackVariant {
    /// Call or put.
    pub option_type: OptionType,
    /// Fixed or floating strike.
    pub strike: StrikeKind,
}

impl LookbackVariant {
    /// Assemble a variant from its two axes.
    pub fn new(option_type: OptionType, strike: StrikeKind) -> Self {
        Self {
            option_type,
            strike,
        }
    }

    /// All four variants, for exhaustive iteration in tests.
    pub fn all() -> [LookbackVariant; 4] {
        [
            LookbackVariant::new(OptionType::Call, StrikeKind::Floating),
            LookbackVariant::new(OptionType::Put, StrikeKind::Floating),
            LookbackVariant::new(OptionType::Call, StrikeKind::Fixed),
            LookbackVariant::new(OptionType::Put, StrikeKind::Fixed),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_sign() {
        assert_eq!(OptionType::Call.sign(), 1.0);
        assert_eq!(OptionType::Put.sign(), -1.0);
    }

    #[test]
    fn asian_variants_are_distinct() {
        let all = AsianVariant::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_terminal_convention_is_penultimate() {
        assert_eq!(TerminalConvention::default(), TerminalConvention::Penultimate);
    }
}
