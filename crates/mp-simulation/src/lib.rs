//! # mp-simulation
//!
//! Path simulation for montepath: the 1-D stochastic process trait, the
//! arithmetic-return Euler discretization of geometric Brownian motion, and
//! the path generator / simulator that produce a fully materialized
//! [`PathMatrix`] for the pricing engines.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Sample paths and the simulated path matrix.
pub mod path;

/// 1-D stochastic process trait and implementations.
pub mod process;

/// Simulation parameters and the path simulator.
pub mod simulator;

pub use path::{Path, PathMatrix};
pub use process::{GeometricBrownianMotion, StochasticProcess1D};
pub use simulator::{PathGenerator, PathSimulator, SimulationParameters};
