//! The double-exponential change of variables.
//!
//! Maps the real line onto `(a, b)`:
//!
//! ```text
//! x(t) = c + h · tanh(π/2 · sinh t)
//! w(t) = h · π/2 · cosh t · sech²(π/2 · sinh t)
//! ```
//!
//! with `c = (a+b)/2` and `h = (b−a)/2`. The weight decays
//! double-exponentially as `|t|` grows, which is what suppresses
//! integrable endpoint singularities.

use std::f64::consts::FRAC_PI_2;

use dq_core::Real;

/// `sech²(φ)` from `tanh(φ)` via `1 − tanh²(φ)`.
///
/// Stays in `[0, 1]` for every finite `φ`, and is exactly `0` once
/// `tanh(φ)` has saturated to `±1`. Going through `1 / cosh²(φ)` instead
/// overflows `cosh` long before the weight becomes negligible.
#[inline]
pub fn sech_squared(tanh_phi: Real) -> Real {
    1.0 - tanh_phi * tanh_phi
}

/// One transformed node for a non-negative `t`.
///
/// The abscissas are `center ± offset`; both share `weight` since `w` is
/// even in `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// `h · tanh(π/2 · sinh t)`.
    pub offset: Real,
    /// `w(t)`.
    pub weight: Real,
}

/// Call-scoped transform parameters for one interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    lower: Real,
    upper: Real,
    center: Real,
    half_width: Real,
}

impl Transform {
    /// Build the transform for `[lower, upper]`.
    pub fn new(lower: Real, upper: Real) -> Self {
        Self {
            lower,
            upper,
            center: 0.5 * (lower + upper),
            half_width: 0.5 * (upper - lower),
        }
    }

    /// Interval midpoint, the abscissa at `t = 0`.
    #[inline]
    pub fn center(&self) -> Real {
        self.center
    }

    /// Half the interval width.
    #[inline]
    pub fn half_width(&self) -> Real {
        self.half_width
    }

    /// `w(0) = h · π/2`, the weight of the midpoint sample.
    #[inline]
    pub fn base_weight(&self) -> Real {
        self.half_width * FRAC_PI_2
    }

    /// Offset and weight at `t`.
    ///
    /// `t` must not exceed [`MAX_RANGE_LIMIT`](super::guard::MAX_RANGE_LIMIT)
    /// in magnitude, otherwise `cosh t` overflows and the weight is NaN.
    #[inline]
    pub fn node(&self, t: Real) -> Node {
        let tanh_phi = (FRAC_PI_2 * t.sinh()).tanh();
        Node {
            offset: self.half_width * tanh_phi,
            weight: self.half_width * FRAC_PI_2 * t.cosh() * sech_squared(tanh_phi),
        }
    }

    /// `x(t)`.
    #[inline]
    pub fn abscissa(&self, t: Real) -> Real {
        self.center + self.node(t).offset
    }

    /// `w(t)`.
    #[inline]
    pub fn weight(&self, t: Real) -> Real {
        self.node(t).weight
    }

    /// The mirrored abscissas `(center − offset, center + offset)`.
    #[inline]
    pub fn mirrored(&self, offset: Real) -> (Real, Real) {
        (self.center - offset, self.center + offset)
    }

    /// `true` if `x` lies strictly inside the interval.
    ///
    /// Far out in `t` the forward map rounds onto the endpoints; such
    /// abscissas are outside the open interval and must not be sampled.
    #[inline]
    pub fn is_interior(&self, x: Real) -> bool {
        self.lower < x && x < self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn midpoint_node() {
        let tr = Transform::new(1.0, 3.0);
        assert_eq!(tr.center(), 2.0);
        assert_eq!(tr.half_width(), 1.0);
        assert_eq!(tr.abscissa(0.0), 2.0);
        assert_abs_diff_eq!(tr.weight(0.0), FRAC_PI_2, epsilon = 1e-15);
        assert_eq!(tr.weight(0.0), tr.base_weight());
    }

    #[test]
    fn odd_abscissa_even_weight() {
        let tr = Transform::new(-2.0, 5.0);
        for &t in &[0.1, 0.7, 1.3, 2.9] {
            let (lo, hi) = tr.mirrored(tr.node(t).offset);
            assert_abs_diff_eq!(tr.abscissa(-t), lo, epsilon = 1e-14);
            assert_abs_diff_eq!(tr.abscissa(t), hi, epsilon = 1e-14);
            assert_abs_diff_eq!(tr.weight(-t), tr.weight(t), epsilon = 1e-15);
        }
    }

    #[test]
    fn weight_matches_closed_form_for_moderate_t() {
        let tr = Transform::new(0.0, 2.0);
        for &t in &[0.25, 0.5, 1.0, 1.5] {
            let phi = FRAC_PI_2 * Real::sinh(t);
            let naive = FRAC_PI_2 * t.cosh() / (phi.cosh() * phi.cosh());
            assert_abs_diff_eq!(tr.weight(t), naive, epsilon = 1e-13);
        }
    }

    #[test]
    fn weight_decreases_and_underflows_to_zero() {
        let tr = Transform::new(0.0, 1.0);
        let mut last = tr.base_weight();
        // past t ≈ 3.1 sech² is quantised at the ulp of 1.0, so only the
        // smooth part is checked for monotonicity
        for k in 1..=300 {
            let w = tr.weight(k as Real * 0.01);
            assert!(w <= last, "weight increased at t = {}", k as Real * 0.01);
            last = w;
        }
        assert_eq!(tr.weight(3.5), 0.0);
        assert_eq!(tr.weight(4.0), 0.0);
    }

    #[test]
    fn sech_squared_stays_in_unit_interval() {
        for &phi in &[0.0, 1e-8, 0.5, 3.0, 18.0, 19.0, 50.0, 400.0, 800.0, 1e300] {
            let s = sech_squared(Real::tanh(phi));
            assert!((0.0..=1.0).contains(&s), "sech²({phi}) = {s}");
        }
        assert_eq!(sech_squared(Real::tanh(800.0)), 0.0);
    }

    #[test]
    fn weight_finite_at_overflow_safe_ceiling() {
        let tr = Transform::new(0.0, 50.0);
        let w = tr.weight(super::super::guard::MAX_RANGE_LIMIT);
        assert!(w.is_finite());
        assert_eq!(w, 0.0);
    }

    #[test]
    fn interior_is_open() {
        let tr = Transform::new(0.0, 1.0);
        assert!(tr.is_interior(0.5));
        assert!(!tr.is_interior(0.0));
        assert!(!tr.is_interior(1.0));
        // far out the forward map has collapsed onto the endpoint
        assert!(!tr.is_interior(tr.abscissa(3.5)));
    }
}
