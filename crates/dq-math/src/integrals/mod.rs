//! Numerical integration.
//!
//! The only rule shipped is adaptive tanh-sinh (double-exponential)
//! quadrature, see [`tanhsinh`]. Rules are used through the [`Integrator`]
//! trait so callers can stay generic over the method.

pub mod tanhsinh;

use dq_core::{errors::Result, Real};

pub use tanhsinh::{integrate, TanhSinhIntegral, TanhSinhResult};

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}
