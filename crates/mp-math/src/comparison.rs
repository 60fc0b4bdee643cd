//! Absolute-tolerance comparison for floating-point values.

use mp_core::Real;

/// Return `true` if `a` and `b` differ by at most `epsilon`.
///
/// The tolerance is absolute; callers pick an `epsilon` that matches the
/// scale of the quantity under comparison (prices and averages in this
/// workspace sit around 1e2, so 1e-10 leaves plenty of headroom above
/// accumulated rounding).
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}
