//! # mp-math
//!
//! Mathematical utilities for montepath: the normal distribution (via
//! `statrs`), seedable random number generators, an incremental statistics
//! accumulator, and the averaging functions used by path-dependent payoffs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Arithmetic and geometric averaging over sampled path values.
pub mod averaging;

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use averaging::{arithmetic_mean, geometric_mean};
pub use comparison::close;
pub use distributions::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use random_numbers::{GaussianRng, InverseCumulativeNormalRng, MersenneTwisterUniformRng};
pub use statistics::Statistics;
