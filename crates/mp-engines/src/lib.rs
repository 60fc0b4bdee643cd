//! # mp-engines
//!
//! Monte Carlo pricing engines for path-dependent options.
//!
//! ## Engines
//!
//! - [`AsianPayoffEngine`] — average-price options over a supplied path
//!   matrix: eight variants along the sampling (continuous/discrete),
//!   averaging (arithmetic/geometric), and strike (fixed/floating) axes
//! - [`LookbackPayoffEngine`] — options on the running extremum of a path,
//!   simulating its own paths: four variants along the option-type and
//!   strike axes

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod asian_engine;
pub mod lookback_engine;
pub mod payoff;

pub use asian_engine::AsianPayoffEngine;
pub use lookback_engine::LookbackPayoffEngine;
pub use payoff::{
    AsianVariant, AverageType, LookbackVariant, OptionType, SamplingScheme, StrikeKind,
    TerminalConvention,
};
