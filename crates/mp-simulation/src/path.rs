//! Sample paths and the simulated path matrix.

use mp_core::{ensure, Real, Result, Size};
use nalgebra::DMatrix;

/// A single sample path: a sequence of time-value pairs.
#[derive(Debug, Clone)]
pub struct Path {
    /// Time points (including t=0).
    pub times: Vec<Real>,
    /// Process values at each time point.
    pub values: Vec<Real>,
}

impl Path {
    /// Number of time steps (= len − 1).
    pub fn steps(&self) -> Size {
        self.values.len() - 1
    }

    /// The final value.
    pub fn back(&self) -> Real {
        *self.values.last().expect("path is never empty")
    }

    /// The initial value.
    pub fn front(&self) -> Real {
        self.values[0]
    }

    /// Length of the path (number of points including initial).
    pub fn len(&self) -> Size {
        self.values.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A fully materialized matrix of simulated paths.
///
/// Thin newtype around `nalgebra::DMatrix<f64>`, stored with rows = time
/// points `0..=step_count` and columns = independent simulations. The
/// column-major layout makes each simulation's path one contiguous slice.
/// Row 0 holds the initial spot for every simulation, and the matrix is
/// immutable once built: the pricing engines only ever read it.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatrix {
    data: DMatrix<Real>,
}

impl PathMatrix {
    /// Assemble a matrix from simulated paths.
    ///
    /// Errors with `InvalidArgument` if `paths` is empty, any path is empty,
    /// or the paths disagree on length.
    pub fn from_paths(paths: &[Path]) -> Result<Self> {
        ensure!(!paths.is_empty(), "path matrix requires at least one path");
        let points = paths[0].len();
        ensure!(points > 0, "path matrix requires non-empty paths");
        let mut data = Vec::with_capacity(points * paths.len());
        for (i, path) in paths.iter().enumerate() {
            ensure!(
                path.len() == points,
                "path {i} has {} points, expected {points}",
                path.len()
            );
            data.extend_from_slice(&path.values);
        }
        // column-major: one path per column
        Ok(Self {
            data: DMatrix::from_vec(points, paths.len(), data),
        })
    }

    /// Number of independent simulations (columns).
    pub fn simulations(&self) -> Size {
        self.data.ncols()
    }

    /// Number of points per path, including the initial value (rows).
    pub fn points(&self) -> Size {
        self.data.nrows()
    }

    /// Number of time steps per path (= points − 1).
    pub fn steps(&self) -> Size {
        self.points() - 1
    }

    /// Value of simulation `sim` at time index `step`.
    pub fn value(&self, step: Size, sim: Size) -> Real {
        self.data[(step, sim)]
    }

    /// The full path of simulation `sim` as a contiguous slice, indexed
    /// `0..=steps`.
    pub fn path(&self, sim: Size) -> &[Real] {
        let points = self.points();
        &self.data.as_slice()[sim * points..(sim + 1) * points]
    }

    /// Initial value of simulation `sim` (time index 0).
    pub fn initial(&self, sim: Size) -> Real {
        self.data[(0, sim)]
    }

    /// Final value of simulation `sim` (time index `steps`).
    pub fn terminal(&self, sim: Size) -> Real {
        self.data[(self.steps(), sim)]
    }

    /// Running minimum and maximum of simulation `sim` over the full path,
    /// including the initial value.
    pub fn extrema(&self, sim: Size) -> (Real, Real) {
        self.path(sim)
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
