//! # dequad
//!
//! Adaptive double-exponential (tanh-sinh) quadrature for scalar real
//! integrands over finite intervals.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than on `dq-core` / `dq-math` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use dequad::{integrate, Integrator, TanhSinhIntegral};
//!
//! // defaults for everything but the tolerance
//! let v = integrate(|x| x.sin(), 0.0, std::f64::consts::PI, 1e-10).unwrap();
//! assert!((v - 2.0).abs() < 1e-9);
//!
//! // full control, with a convergence report
//! let ts = TanhSinhIntegral::new(1e-12).with_max_level(12);
//! let report = ts.integrate_with_report(|x| (-x * x).exp(), -10.0, 10.0).unwrap();
//! assert!(report.converged);
//! assert!((report.value - std::f64::consts::PI.sqrt()).abs() < 1e-10);
//!
//! // reversed bounds flip the sign
//! assert_eq!(ts.integrate(|x| x, 1.0, 0.0).unwrap(), -ts.integrate(|x| x, 0.0, 1.0).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use dq_core as core;

/// The quadrature engine and comparison helpers.
pub use dq_math as math;

pub use dq_core::{Error, Real, Result, Size};
pub use dq_math::integrals::{integrate, Integrator, TanhSinhIntegral, TanhSinhResult};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn facade_reexports_engine() {
        let v = integrate(|x| x * x, 0.0, 1.0, 1e-10).unwrap();
        assert_abs_diff_eq!(v, 1.0 / 3.0, epsilon = 1e-9);
        let ts = math::integrals::tanhsinh::TanhSinhIntegral::default();
        assert_eq!(ts, TanhSinhIntegral::default());
    }

    #[test]
    fn facade_reexports_errors() {
        let err = TanhSinhIntegral::new(-1.0).integrate(|x| x, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(matches!(err, crate::core::errors::Error::InvalidArgument(_)));
    }
}
