//! The level-to-level convergence predicate.

use dq_core::Real;

/// Mixed relative/absolute test: `|current - previous| <= tolerance * max(1, |current|)`.
///
/// Behaves as an absolute test for results of magnitude below one and as a
/// relative test above. NaN on either side never compares as converged.
#[inline]
pub fn within_tolerance(current: Real, previous: Real, tolerance: Real) -> bool {
    (current - previous).abs() <= tolerance * current.abs().max(1.0)
}
