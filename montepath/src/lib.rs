//! # montepath
//!
//! Monte Carlo pricing of path-dependent options: Asian (average-price) and
//! Lookback (running-extremum) payoffs over simulated asset-price paths.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `mp-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! montepath = "0.1"
//! ```
//!
//! ```rust
//! use montepath::engines::{
//!     AsianPayoffEngine, AsianVariant, AverageType, OptionType, SamplingScheme, StrikeKind,
//! };
//! use montepath::simulation::{PathSimulator, SimulationParameters};
//!
//! // spot 100, rate 5 %, vol 20 %, one year, 252 steps, 1 000 paths
//! let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 252, 1_000)?;
//! let matrix = PathSimulator::new(42).simulate(&params)?;
//!
//! let price = AsianPayoffEngine::new(&matrix, params.rate, params.horizon, OptionType::Call)
//!     .with_strike(100.0)
//!     .price(AsianVariant::new(
//!         SamplingScheme::Continuous,
//!         AverageType::Arithmetic,
//!         StrikeKind::Fixed,
//!     ))?;
//! assert!(price > 0.0);
//! # Ok::<(), montepath::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use mp_core as core;

/// Mathematical utilities: distributions, RNG, statistics, averaging.
pub use mp_math as math;

/// Stochastic processes and path simulation.
pub use mp_simulation as simulation;

/// Asian and Lookback pricing engines.
pub use mp_engines as engines;
