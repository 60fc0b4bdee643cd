//! Simulation parameters and the path simulator.

use crate::path::{Path, PathMatrix};
use crate::process::{GeometricBrownianMotion, StochasticProcess1D};
use mp_core::{ensure, Rate, Real, Result, Size, Time, Volatility};
use mp_math::random_numbers::{GaussianRng, InverseCumulativeNormalRng};

/// Immutable parameters of one simulation run.
///
/// Validated on construction and passed by reference to every operation that
/// needs them; nothing in the workspace holds mutable pricing configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Initial asset price (> 0).
    pub spot: Real,
    /// Risk-free rate.
    pub rate: Rate,
    /// Volatility (≥ 0).
    pub volatility: Volatility,
    /// Time to expiry in years (> 0).
    pub horizon: Time,
    /// Number of time steps per path (≥ 1).
    pub step_count: Size,
    /// Number of independent simulations (≥ 1).
    pub simulation_count: Size,
}

impl SimulationParameters {
    /// Create a validated parameter set.
    ///
    /// Errors with `InvalidArgument` on a non-positive spot or horizon, a
    /// negative volatility, or a zero step/simulation count.
    pub fn new(
        spot: Real,
        rate: Rate,
        volatility: Volatility,
        horizon: Time,
        step_count: Size,
        simulation_count: Size,
    ) -> Result<Self> {
        ensure!(spot > 0.0, "spot must be positive, got {spot}");
        ensure!(
            volatility >= 0.0,
            "volatility must be non-negative, got {volatility}"
        );
        ensure!(horizon > 0.0, "horizon must be positive, got {horizon}");
        ensure!(step_count >= 1, "step count must be at least 1");
        ensure!(simulation_count >= 1, "simulation count must be at least 1");
        Ok(Self {
            spot,
            rate,
            volatility,
            horizon,
            step_count,
            simulation_count,
        })
    }

    /// Step size `Δt = horizon / step_count`.
    pub fn dt(&self) -> Time {
        self.horizon / self.step_count as Time
    }

    /// Discount factor `exp(-rate · horizon)`.
    pub fn discount_factor(&self) -> Real {
        (-self.rate * self.horizon).exp()
    }
}

/// Generates sample paths of a 1-D stochastic process.
///
/// Steps the process forward from its initial value through a uniform time
/// grid, drawing one fresh standard-normal variate per step from the
/// injected Gaussian source.
pub struct PathGenerator<'a, G: GaussianRng> {
    process: &'a dyn StochasticProcess1D,
    dt: Time,
    steps: Size,
    rng: &'a mut G,
}

impl<'a, G: GaussianRng> PathGenerator<'a, G> {
    /// Create a new path generator.
    ///
    /// # Arguments
    /// * `process` - the stochastic process to simulate
    /// * `maturity` - total time horizon
    /// * `steps` - number of time steps
    /// * `rng` - source of standard-normal variates
    pub fn new(
        process: &'a dyn StochasticProcess1D,
        maturity: Time,
        steps: Size,
        rng: &'a mut G,
    ) -> Self {
        Self {
            process,
            dt: maturity / steps as Time,
            steps,
            rng,
        }
    }

    /// Generate one sample path.
    pub fn next_path(&mut self) -> Path {
        let mut times = Vec::with_capacity(self.steps + 1);
        let mut values = Vec::with_capacity(self.steps + 1);

        let x0 = self.process.x0();
        times.push(0.0);
        values.push(x0);

        let mut x = x0;
        for i in 0..self.steps {
            let t = i as Time * self.dt;
            let dw = self.rng.next_gaussian();
            x = self.process.evolve(t, x, self.dt, dw);
            times.push(t + self.dt);
            values.push(x);
        }

        Path { times, values }
    }
}

/// Simulates a matrix of independent asset-price paths under the
/// arithmetic-return Euler discretization of geometric Brownian motion.
///
/// Pure apart from consuming entropy: every [`simulate`](Self::simulate)
/// call restarts the seeded generator, so identical parameters produce an
/// identical matrix. No I/O, no caching across calls.
#[derive(Debug, Clone, Copy)]
pub struct PathSimulator {
    seed: u64,
}

impl PathSimulator {
    /// Create a simulator with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Simulate `simulation_count` independent paths of `step_count` steps
    /// each, starting from `spot`.
    pub fn simulate(&self, params: &SimulationParameters) -> Result<PathMatrix> {
        let mut rng = InverseCumulativeNormalRng::new(self.seed);
        self.simulate_with(params, &mut rng)
    }

    /// Simulate with an externally supplied Gaussian source.
    ///
    /// All draws come from the single serialized generator, so paths are
    /// statistically independent of one another.
    pub fn simulate_with<G: GaussianRng>(
        &self,
        params: &SimulationParameters,
        rng: &mut G,
    ) -> Result<PathMatrix> {
        let process =
            GeometricBrownianMotion::new(params.spot, params.rate, params.volatility);
        let mut generator =
            PathGenerator::new(&process, params.horizon, params.step_count, rng);

        let paths: Vec<Path> = (0..params.simulation_count)
            .map(|_| generator.next_path())
            .collect();
        PathMatrix::from_paths(&paths)
    }
}
