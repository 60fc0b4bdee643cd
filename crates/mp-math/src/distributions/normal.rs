//! Normal (Gaussian) distribution.
//!
//! Wraps the `statrs` crate's normal implementation.

use mp_core::Real;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Normal distribution with mean `mu` and standard deviation `sigma`.
#[derive(Debug, Clone)]
pub struct NormalDistribution {
    dist: Normal,
    mu: Real,
    sigma: Real,
}

impl NormalDistribution {
    /// Create a normal distribution with mean `mu` and standard deviation
    /// `sigma`.
    ///
    /// # Panics
    /// Panics if `sigma` is not strictly positive or either parameter is
    /// not finite.
    pub fn new(mu: Real, sigma: Real) -> Self {
        assert!(sigma > 0.0, "sigma must be positive, got {sigma}");
        Self {
            dist: Normal::new(mu, sigma).expect("invalid normal parameters"),
            mu,
            sigma,
        }
    }

    /// The standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Mean of the distribution.
    pub fn mean(&self) -> Real {
        self.mu
    }

    /// Standard deviation of the distribution.
    pub fn std_dev(&self) -> Real {
        self.sigma
    }

    /// Probability density function.
    pub fn pdf(&self, x: Real) -> Real {
        self.dist.pdf(x)
    }

    /// Cumulative distribution function P(X ≤ x).
    pub fn cdf(&self, x: Real) -> Real {
        self.dist.cdf(x)
    }

    /// Inverse cumulative distribution function (quantile).
    ///
    /// # Panics
    /// Panics if `p` is not in `(0, 1)`.
    pub fn inverse_cdf(&self, p: Real) -> Real {
        assert!(p > 0.0 && p < 1.0, "p must be in (0, 1), got {p}");
        self.dist.inverse_cdf(p)
    }
}

/// The standard normal probability density function.
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    NormalDistribution::standard().pdf(x)
}

/// The standard normal cumulative distribution function Φ(x).
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    NormalDistribution::standard().cdf(x)
}

/// The inverse standard normal CDF (probit function).
///
/// # Panics
/// Panics if `p` is not in `(0, 1)`.
#[inline]
pub fn normal_cdf_inverse(p: Real) -> Real {
    NormalDistribution::standard().inverse_cdf(p)
}
