//! Probability distributions.
//!
//! Thin wrappers over the `statrs` crate, exposing the interface the rest of
//! the workspace expects.

pub mod normal;

pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf, NormalDistribution};
