//! Monte Carlo engine for Asian (average-price) options.
//!
//! Consumes a previously simulated [`PathMatrix`] and evaluates one of the
//! eight payoff variants spanned by the sampling, averaging, and strike
//! axes. The engine never mutates or re-simulates the matrix; feed it a
//! fresh one for a fresh estimate.
//!
//! ## Discounting contract
//!
//! Fixed-strike payoffs are discounted by `exp(-rate·horizon)`;
//! floating-strike payoffs are **not** discounted. The asymmetry is part of
//! the public contract of this engine family and is kept as documented
//! behavior.

use crate::payoff::{AsianVariant, AverageType, OptionType, SamplingScheme, StrikeKind};
use mp_core::{ensure, Error, Price, Rate, Real, Result, Size, Time};
use mp_math::averaging::{arithmetic_mean, geometric_mean};
use mp_math::statistics::Statistics;
use mp_simulation::PathMatrix;

/// Prices Asian options on a borrowed path matrix.
///
/// The strike and sample window are optional because not every variant
/// needs them; requesting a variant that does without supplying one is an
/// `InvalidArgument` error, never a silent default.
pub struct AsianPayoffEngine<'a> {
    paths: &'a PathMatrix,
    rate: Rate,
    horizon: Time,
    option_type: OptionType,
    strike: Option<Real>,
    sample_window: Option<Size>,
}

impl<'a> AsianPayoffEngine<'a> {
    /// Create an engine over the given path matrix.
    pub fn new(
        paths: &'a PathMatrix,
        rate: Rate,
        horizon: Time,
        option_type: OptionType,
    ) -> Self {
        Self {
            paths,
            rate,
            horizon,
            option_type,
            strike: None,
            sample_window: None,
        }
    }

    /// Set the strike used by fixed-strike variants.
    pub fn with_strike(mut self, strike: Real) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Set the sample window used by discrete-sampling variants: time
    /// indices that are multiples of `window` are retained.
    pub fn with_sample_window(mut self, window: Size) -> Self {
        self.sample_window = Some(window);
        self
    }

    /// Expected discounted payoff of the requested variant: the arithmetic
    /// mean, across simulations, of the per-path payoff.
    ///
    /// Errors:
    /// - `InvalidArgument` if a fixed-strike variant has no strike, a
    ///   discrete variant has no (or a zero) sample window, or the matrix
    ///   has no simulations;
    /// - `Domain` if a geometric average meets a non-positive path value.
    pub fn price(&self, variant: AsianVariant) -> Result<Price> {
        let stride = self.stride(variant.sampling)?;
        let strike = match variant.strike {
            StrikeKind::Fixed => Some(self.require_strike()?),
            StrikeKind::Floating => None,
        };
        let sign = self.option_type.sign();
        let discount = (-self.rate * self.horizon).exp();

        let mut stats = Statistics::new();
        for sim in 0..self.paths.simulations() {
            let path = self.paths.path(sim);
            let sampled: Vec<Real> = path.iter().copied().step_by(stride).collect();

            let average = match variant.average {
                AverageType::Arithmetic => arithmetic_mean(&sampled)?,
                AverageType::Geometric => geometric_mean(&sampled)?,
            };

            let payoff = match variant.strike {
                StrikeKind::Fixed => {
                    let k = strike.expect("validated above");
                    (sign * (average - k)).max(0.0) * discount
                }
                StrikeKind::Floating => {
                    // maturity fixing: last retained point under discrete
                    // sampling, the true final point under continuous
                    let s_t = match variant.sampling {
                        SamplingScheme::Discrete => *sampled.last().expect("sampled non-empty"),
                        SamplingScheme::Continuous => path[path.len() - 1],
                    };
                    (sign * (average - s_t)).max(0.0)
                }
            };
            stats.add(payoff);
        }

        stats
            .mean()
            .ok_or_else(|| Error::InvalidArgument("path matrix has no simulations".into()))
    }

    fn stride(&self, sampling: SamplingScheme) -> Result<Size> {
        match sampling {
            SamplingScheme::Continuous => Ok(1),
            SamplingScheme::Discrete => {
                let window = self.sample_window.ok_or_else(|| {
                    Error::InvalidArgument(
                        "discrete sampling requires a sample window".into(),
                    )
                })?;
                ensure!(window >= 1, "sample window must be at least 1, got {window}");
                Ok(window)
            }
        }
    }

    fn require_strike(&self) -> Result<Real> {
        self.strike.ok_or_else(|| {
            Error::InvalidArgument("fixed-strike variant requires a strike".into())
        })
    }
}
