//! # dq-math
//!
//! Numerical integration: the tanh-sinh (double-exponential) quadrature
//! engine behind the [`Integrator`](integrals::Integrator) trait, plus the
//! convergence predicate it relies on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Convergence predicate shared by the integrators.
pub mod comparison;

/// Numerical integration.
pub mod integrals;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::within_tolerance;
pub use integrals::{integrate, Integrator, TanhSinhIntegral, TanhSinhResult};
