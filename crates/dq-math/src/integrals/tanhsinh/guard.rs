//! Overflow guard for the outer variable `t`.

use dq_core::Real;
use tracing::warn;

/// Largest `|t|` ever fed into `sinh`/`cosh`.
///
/// `cosh` overflows `f64` just past 710; 170 leaves ample headroom while
/// being far beyond the point (≈ 3.2) where every weight has underflowed
/// to zero.
pub const MAX_RANGE_LIMIT: Real = 170.0;

/// Clip a configured range limit to [`MAX_RANGE_LIMIT`].
///
/// Applied once per call, before the refinement loop. Refinement only
/// shrinks the step, so no generated `t` can exceed the clipped limit.
pub fn clip_range_limit(range_limit: Real) -> Real {
    if range_limit > MAX_RANGE_LIMIT {
        warn!(
            requested = range_limit,
            clipped = MAX_RANGE_LIMIT,
            "tanh-sinh range limit exceeds the overflow-safe ceiling"
        );
        MAX_RANGE_LIMIT
    } else {
        range_limit
    }
}
