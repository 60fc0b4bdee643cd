//! Averaging functions over sampled path values.
//!
//! Path-dependent payoffs reduce a sampled price path to a single statistic;
//! the two reductions used by average-price options live here. The geometric
//! mean is defined only for strictly positive inputs, and a simulated path
//! that crosses zero (possible under the arithmetic-return Euler scheme)
//! surfaces here as a [`Domain`](mp_core::Error::Domain) error rather than a
//! NaN.

use mp_core::{domain, ensure, Real, Result};

/// Arithmetic mean of the given values.
///
/// Errors with `InvalidArgument` on an empty slice.
pub fn arithmetic_mean(values: &[Real]) -> Result<Real> {
    ensure!(!values.is_empty(), "arithmetic mean of an empty sample");
    Ok(values.iter().sum::<Real>() / values.len() as Real)
}

/// Geometric mean of the given values, `exp(mean(ln(v)))`.
///
/// Errors with `InvalidArgument` on an empty slice and with `Domain` if any
/// value is not strictly positive.
pub fn geometric_mean(values: &[Real]) -> Result<Real> {
    ensure!(!values.is_empty(), "geometric mean of an empty sample");
    let mut log_sum = 0.0;
    for &v in values {
        domain!(
            v > 0.0,
            "geometric mean requires strictly positive values, got {v}"
        );
        log_sum += v.ln();
    }
    Ok((log_sum / values.len() as Real).exp())
}
