//! Incremental statistics accumulator.

use mp_core::Real;

/// Incremental statistics accumulator.
///
/// Accumulates samples one at a time and computes mean, variance, standard
/// deviation, error estimate, min, max, and count. The pricing engines feed
/// it one discounted payoff per simulated path and read back the sample mean.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    count: usize,
    sum_x: Real,
    sum_x2: Real,
    min: Real,
    max: Real,
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            sum_x: 0.0,
            sum_x2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        self.sum_x += x;
        self.sum_x2 += x * x;
        if x < self.min {
            self.min = x;
        }
        if x > self.max {
            self.max = x;
        }
    }

    /// Number of samples.
    pub fn samples(&self) -> usize {
        self.count
    }

    /// Sample mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum_x / self.count as Real)
        }
    }

    /// Sample variance (unbiased, Bessel-corrected).  Returns `None` for
    /// fewer than 2 samples.
    pub fn variance(&self) -> Option<Real> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as Real;
        let m = self.sum_x / n;
        let s2 = self.sum_x2 / n - m * m;
        // Bessel correction: n / (n - 1); clamp tiny negatives from rounding
        Some((s2 * n / (n - 1.0)).max(0.0))
    }

    /// Standard deviation.  Returns `None` for fewer than 2 samples.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(|v| v.sqrt())
    }

    /// Standard error of the sample mean, `std_dev / sqrt(n)`.  Returns
    /// `None` for fewer than 2 samples.
    pub fn error_estimate(&self) -> Option<Real> {
        self.std_dev().map(|s| s / (self.count as Real).sqrt())
    }

    /// Minimum sample value.  Returns `None` if no samples have been added.
    pub fn minimum(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Maximum sample value.  Returns `None` if no samples have been added.
    pub fn maximum(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_statistics() {
        let mut s = Statistics::new();
        for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
            s.add(x);
        }
        assert_eq!(s.samples(), 5);
        assert!((s.mean().unwrap() - 3.0).abs() < 1e-12);
        assert!((s.variance().unwrap() - 2.5).abs() < 1e-12);
        assert!((s.std_dev().unwrap() - 2.5_f64.sqrt()).abs() < 1e-12);
        assert_eq!(s.minimum().unwrap(), 1.0);
        assert_eq!(s.maximum().unwrap(), 5.0);
    }

    #[test]
    fn error_estimate_shrinks_with_sample_count() {
        // identical spread, 100× the samples → 10× smaller standard error
        let mut small = Statistics::new();
        let mut large = Statistics::new();
        for i in 0..100 {
            small.add((i % 10) as Real);
        }
        for i in 0..10_000 {
            large.add((i % 10) as Real);
        }
        let ratio = small.error_estimate().unwrap() / large.error_estimate().unwrap();
        assert!((ratio - 10.0).abs() < 0.1, "ratio {ratio} should be ~10");
    }

    #[test]
    fn empty_statistics() {
        let s = Statistics::new();
        assert!(s.mean().is_none());
        assert!(s.variance().is_none());
        assert!(s.error_estimate().is_none());
    }
}
