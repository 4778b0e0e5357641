//! Naïve tanh-sinh baseline.
//!
//! Same level structure as the production path but without any of its
//! safeguards: the range limit is not clipped, `sech²` is taken as
//! `1/cosh²`, constants are recomputed every level, every node is
//! evaluated, and non-finite terms are silently dropped. Only compiled for
//! tests and with the `reference` feature; it exists to benchmark and
//! cross-check [`TanhSinhIntegral`](super::TanhSinhIntegral).

use dq_core::Real;

use crate::comparison::within_tolerance;

use super::TanhSinhIntegral;

/// `w(t)` through `1/cosh²(φ)`.
///
/// Turns into `∞/∞ = NaN` once `cosh t` overflows.
pub fn naive_weight(half_width: Real, t: Real) -> Real {
    let pi_half = std::f64::consts::PI / 2.0;
    let cosh_phi = (pi_half * t.sinh()).cosh();
    half_width * pi_half * t.cosh() / (cosh_phi * cosh_phi)
}

/// Integrate `f` on `[a, b]` the naïve way, using `config`'s parameters
/// without validating them.
pub fn integrate_reference<F: Fn(Real) -> Real>(
    config: &TanhSinhIntegral,
    f: F,
    a: Real,
    b: Real,
) -> Real {
    let mut h = config.initial_step();
    let mut sum = 0.0;
    let mut previous: Option<Real> = None;
    let mut estimate = 0.0;

    for level in 0..=config.max_level() {
        let pi_half = std::f64::consts::PI / 2.0;
        let center = 0.5 * (a + b);
        let spread = 0.5 * (b - a);

        if level == 0 {
            sum += f(center) * spread * pi_half;
        }
        let stride = if level == 0 { 1 } else { 2 };
        let mut k: u64 = 1;
        while k as Real * h <= config.range_limit() {
            let t = k as Real * h;
            let x = center + spread * (pi_half * t.sinh()).tanh();
            let term = (f(x) + f(2.0 * center - x)) * naive_weight(spread, t);
            if term.is_finite() {
                sum += term;
            }
            k += stride;
        }

        estimate = h * sum;
        if let Some(p) = previous {
            if within_tolerance(estimate, p, config.tolerance()) {
                break;
            }
        }
        previous = Some(estimate);
        h *= 0.5;
    }
    estimate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrals::Integrator;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    use super::super::guard::MAX_RANGE_LIMIT;
    use super::super::transform::Transform;

    type Case = (fn(Real) -> Real, Real, Real);

    #[test]
    fn production_matches_reference_on_smooth_integrands() {
        let cases: [Case; 6] = [
            (|x| x.sin(), 0.0, PI),
            (|x| x * x, 0.0, 1.0),
            (|x| (-x).exp(), 0.0, 5.0),
            (|x| 1.0 / (1.0 + x * x), -5.0, 5.0),
            (|x| (1.0 + x).ln(), 0.0, 1.0),
            (|x| x * x * x * (-x * x).exp(), 0.0, 3.0),
        ];
        let cfg = TanhSinhIntegral::default();
        for (f, a, b) in cases {
            let fast = cfg.integrate(f, a, b).unwrap();
            let naive = integrate_reference(&cfg, f, a, b);
            assert_abs_diff_eq!(fast, naive, epsilon = 1e-12);
        }
    }

    #[test]
    fn naive_weight_agrees_where_it_is_finite() {
        let tr = Transform::new(-1.0, 1.0);
        for &t in &[0.0, 0.5, 1.0, 2.0] {
            assert_abs_diff_eq!(naive_weight(1.0, t), tr.weight(t), epsilon = 1e-14);
        }
    }

    #[test]
    fn naive_weight_breaks_down_past_the_guard() {
        // cosh t overflows here, so both numerator and denominator are ∞
        assert!(naive_weight(1.0, 720.0).is_nan());
        let tr = Transform::new(-1.0, 1.0);
        assert_eq!(tr.weight(MAX_RANGE_LIMIT), 0.0);
    }
}
