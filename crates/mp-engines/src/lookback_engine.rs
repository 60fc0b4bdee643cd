//! Monte Carlo engine for Lookback options.
//!
//! Prices options on the running extremum of a simulated path. Unlike the
//! Asian engine, this one owns its simulation: every `price` call generates
//! a fresh path matrix through an internal [`PathSimulator`], so repeated
//! calls with the same seed and parameters reproduce the same estimate and
//! no matrix is ever reused across calls.

use crate::payoff::{LookbackVariant, OptionType, StrikeKind, TerminalConvention};
use mp_core::{Error, Price, Real, Result, Size};
use mp_math::statistics::Statistics;
use mp_simulation::{PathSimulator, SimulationParameters};

/// Prices Lookback options by re-simulating on every call.
///
/// The maturity fixing of the floating-strike payoffs is read at the index
/// selected by the engine's [`TerminalConvention`]; the default
/// `Penultimate` convention reads the second-to-last path point. Extrema
/// always run over the full path, including the initial spot.
pub struct LookbackPayoffEngine {
    params: SimulationParameters,
    simulator: PathSimulator,
    strike: Option<Real>,
    terminal: TerminalConvention,
}

impl LookbackPayoffEngine {
    /// Create an engine for the given parameters and RNG seed.
    pub fn new(params: SimulationParameters, seed: u64) -> Self {
        Self {
            params,
            simulator: PathSimulator::new(seed),
            strike: None,
            terminal: TerminalConvention::default(),
        }
    }

    /// Set the strike used by fixed-strike variants.
    pub fn with_strike(mut self, strike: Real) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Choose which path point supplies the floating-strike maturity fixing.
    pub fn with_terminal_convention(mut self, terminal: TerminalConvention) -> Self {
        self.terminal = terminal;
        self
    }

    /// Expected discounted payoff of the requested variant.
    ///
    /// Simulates `simulation_count` fresh paths, evaluates the payoff on
    /// each path's running extrema, discounts every payoff by
    /// `exp(-rate·horizon)`, and returns the sample mean.
    ///
    /// Errors with `InvalidArgument` if a fixed-strike variant has no
    /// strike.
    pub fn price(&self, variant: LookbackVariant) -> Result<Price> {
        let strike = match variant.strike {
            StrikeKind::Fixed => Some(self.require_strike()?),
            StrikeKind::Floating => None,
        };
        let paths = self.simulator.simulate(&self.params)?;
        let fixing_index = self.fixing_index();
        let discount = self.params.discount_factor();

        let mut stats = Statistics::new();
        for sim in 0..paths.simulations() {
            let (min, max) = paths.extrema(sim);
            let payoff = match (variant.option_type, variant.strike) {
                (OptionType::Call, StrikeKind::Floating) => {
                    (paths.value(fixing_index, sim) - min).max(0.0)
                }
                (OptionType::Put, StrikeKind::Floating) => {
                    (max - paths.value(fixing_index, sim)).max(0.0)
                }
                (OptionType::Call, StrikeKind::Fixed) => {
                    (max - strike.expect("validated above")).max(0.0)
                }
                (OptionType::Put, StrikeKind::Fixed) => {
                    (strike.expect("validated above") - min).max(0.0)
                }
            };
            stats.add(payoff * discount);
        }

        stats
            .mean()
            .ok_or_else(|| Error::InvalidArgument("no paths were simulated".into()))
    }

    fn fixing_index(&self) -> Size {
        match self.terminal {
            TerminalConvention::Penultimate => self.params.step_count - 1,
            TerminalConvention::Last => self.params.step_count,
        }
    }

    fn require_strike(&self) -> Result<Real> {
        self.strike.ok_or_else(|| {
            Error::InvalidArgument("fixed-strike variant requires a strike".into())
        })
    }
}
