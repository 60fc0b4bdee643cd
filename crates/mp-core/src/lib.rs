//! # mp-core
//!
//! Core types and error definitions for montepath.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace: primitive type aliases and the error
//! hierarchy with its convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `domain!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices / counts.
pub type Size = usize;

/// A time measurement in years.
pub type Time = Real;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A discount factor in [0, 1].
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
