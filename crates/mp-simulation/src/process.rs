//! 1-D stochastic processes.
//!
//! A process `dX = μ(t,X) dt + σ(t,X) dW` is described by its drift (`μ`),
//! diffusion (`σ`), and an evolve method that advances the state by one Euler
//! step.

use mp_core::{Real, Time};

/// A 1-dimensional stochastic process `dX = μ(t,X) dt + σ(t,X) dW`.
pub trait StochasticProcess1D: std::fmt::Debug + Send + Sync {
    /// Initial value of the process.
    fn x0(&self) -> Real;

    /// Drift `μ(t, x)`.
    fn drift(&self, t: Time, x: Real) -> Real;

    /// Diffusion `σ(t, x)`.
    fn diffusion(&self, t: Time, x: Real) -> Real;

    /// Expected value `E[x(t+Δt) | x(t) = x]`.
    ///
    /// Default: first-order Euler `x + μ(t,x)·Δt`.
    fn expectation(&self, t: Time, x: Real, dt: Time) -> Real {
        x + self.drift(t, x) * dt
    }

    /// Standard deviation `σ(t,x) · √Δt`.
    fn std_deviation(&self, t: Time, x: Real, dt: Time) -> Real {
        self.diffusion(t, x) * dt.sqrt()
    }

    /// Euler step: `E + σ·√Δt · dw`.
    fn evolve(&self, t: Time, x: Real, dt: Time, dw: Real) -> Real {
        self.expectation(t, x, dt) + self.std_deviation(t, x, dt) * dw
    }

    /// Variance of the process over `Δt`.
    fn variance(&self, t: Time, x: Real, dt: Time) -> Real {
        let s = self.diffusion(t, x);
        s * s * dt
    }
}

/// Geometric Brownian motion with constant drift and volatility.
///
/// `dS = μ·S·dt + σ·S·dW`
///
/// The Euler step in arithmetic-return form is
///
/// ```text
/// S_next = S_prev · (1 + μ·Δt + σ·√Δt·φ)
/// ```
///
/// and deliberately keeps this form rather than the log-return
/// discretization: a large `σ·√Δt` can therefore drive a path to zero or
/// below, where a geometric average over the path is no longer defined and
/// pricing reports a domain error. Callers that cannot tolerate that edge
/// should shrink the step size.
#[derive(Debug, Clone)]
pub struct GeometricBrownianMotion {
    x0: Real,
    mu: Real,
    sigma: Real,
}

impl GeometricBrownianMotion {
    /// Create a new GBM process.
    ///
    /// # Arguments
    /// * `x0` - initial asset price (must be > 0)
    /// * `mu` - drift (growth rate)
    /// * `sigma` - volatility (must be ≥ 0)
    ///
    /// # Panics
    /// Panics on a non-positive `x0` or negative `sigma`; validated
    /// parameters come from
    /// [`SimulationParameters`](crate::SimulationParameters).
    pub fn new(x0: Real, mu: Real, sigma: Real) -> Self {
        assert!(x0 > 0.0, "initial value must be positive, got {x0}");
        assert!(sigma >= 0.0, "volatility must be non-negative, got {sigma}");
        Self { x0, mu, sigma }
    }
}

impl StochasticProcess1D for GeometricBrownianMotion {
    fn x0(&self) -> Real {
        self.x0
    }

    fn drift(&self, _t: Time, x: Real) -> Real {
        self.mu * x
    }

    fn diffusion(&self, _t: Time, x: Real) -> Real {
        self.sigma * x
    }
}
