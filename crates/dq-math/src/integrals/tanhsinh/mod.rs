//! Tanh-sinh (double-exponential) quadrature.
//!
//! The substitution $x = c + h\tanh(\frac\pi2 \sinh t)$ maps the real line
//! onto `(a, b)` and turns the integral into one whose integrand decays
//! double-exponentially in `t`. The trapezoidal rule in `t` then converges
//! very quickly for analytic integrands, and integrable endpoint
//! singularities are suppressed because their samples carry vanishing
//! weight.
//!
//! Refinement halves the step in `t` each level and only samples the new
//! midpoints; earlier samples stay in a running sum. A level is accepted
//! once it agrees with the previous one to within
//! `tolerance · max(1, |estimate|)`.
//!
//! ```
//! use dq_math::integrals::tanhsinh::TanhSinhIntegral;
//!
//! let ts = TanhSinhIntegral::new(1e-12).with_max_level(12);
//! // ∫₀¹ 1/√x dx = 2, singular at the lower endpoint
//! let report = ts.integrate_with_report(|x| 1.0 / x.sqrt(), 0.0, 1.0).unwrap();
//! assert!((report.value - 2.0).abs() < 1e-7);
//! ```

pub mod accumulator;
mod cache;
mod engine;
pub mod guard;
#[cfg(any(test, feature = "reference"))]
pub mod reference;
pub mod result;
pub mod schedule;
pub mod transform;

use dq_core::{
    ensure,
    errors::{Error, Result},
    Real, Size,
};
use tracing::trace;

use super::Integrator;

pub use result::TanhSinhResult;

/// Default convergence tolerance.
pub const DEFAULT_TOLERANCE: Real = 1e-10;

/// Default step in `t` at level 0.
pub const DEFAULT_INITIAL_STEP: Real = 0.5;

/// Default bound on `|t|`.
///
/// In `f64` every weight has underflowed to zero by `t ≈ 3.2`, and the
/// level sweep stops there, so a generous bound costs nothing.
pub const DEFAULT_RANGE_LIMIT: Real = 10.0;

/// Default number of refinements after level 0.
pub const DEFAULT_MAX_LEVEL: Size = 10;

/// Adaptive tanh-sinh quadrature.
///
/// Holds only configuration; every call builds and drops its own
/// refinement state, so one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TanhSinhIntegral {
    tolerance: Real,
    initial_step: Real,
    range_limit: Real,
    max_level: Size,
}

impl TanhSinhIntegral {
    /// Create an integrator with the given tolerance and default step,
    /// range limit and level cap.
    ///
    /// * `tolerance`: stop once successive levels differ by at most
    ///   `tolerance · max(1, |estimate|)`.
    pub fn new(tolerance: Real) -> Self {
        Self {
            tolerance,
            ..Self::default_params()
        }
    }

    /// Create with default parameters (tolerance `1e-10`, step `0.5`,
    /// range limit `10`, 10 refinements).
    pub fn default_params() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            initial_step: DEFAULT_INITIAL_STEP,
            range_limit: DEFAULT_RANGE_LIMIT,
            max_level: DEFAULT_MAX_LEVEL,
        }
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the level-0 step `h₀` in `t`.
    pub fn with_initial_step(mut self, initial_step: Real) -> Self {
        self.initial_step = initial_step;
        self
    }

    /// Set the bound on `|t|`. Values above
    /// [`guard::MAX_RANGE_LIMIT`] are clipped when integrating.
    pub fn with_range_limit(mut self, range_limit: Real) -> Self {
        self.range_limit = range_limit;
        self
    }

    /// Set the number of refinements after level 0.
    pub fn with_max_level(mut self, max_level: Size) -> Self {
        self.max_level = max_level;
        self
    }

    /// Convergence tolerance.
    pub fn tolerance(&self) -> Real {
        self.tolerance
    }

    /// Level-0 step.
    pub fn initial_step(&self) -> Real {
        self.initial_step
    }

    /// Configured bound on `|t|` (before clipping).
    pub fn range_limit(&self) -> Real {
        self.range_limit
    }

    /// Number of refinements after level 0.
    pub fn max_level(&self) -> Size {
        self.max_level
    }

    /// Check the configuration.
    ///
    /// Every integration call runs this before touching the integrand.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.tolerance.is_finite() && self.tolerance > 0.0,
            "tolerance must be positive and finite, got {}",
            self.tolerance
        );
        ensure!(
            self.initial_step.is_finite() && self.initial_step > 0.0,
            "initial step must be positive and finite, got {}",
            self.initial_step
        );
        ensure!(
            self.range_limit > 0.0,
            "range limit must be positive, got {}",
            self.range_limit
        );
        ensure!(
            self.max_level >= 1,
            "max level must be at least 1, got {}",
            self.max_level
        );
        Ok(())
    }

    /// Integrate `f` on `[a, b]` and report convergence details.
    pub fn integrate_with_report<F>(&self, mut f: F, a: Real, b: Real) -> Result<TanhSinhResult>
    where
        F: FnMut(Real) -> Real,
    {
        self.try_integrate(|x| Ok::<_, Error>(f(x)), a, b)
    }

    /// Integrate a fallible integrand.
    ///
    /// The first error returned by `f` aborts the integration and is passed
    /// back unchanged. Configuration errors are converted into `E`.
    pub fn try_integrate<F, E>(&self, mut f: F, a: Real, b: Real) -> Result<TanhSinhResult, E>
    where
        F: FnMut(Real) -> Result<Real, E>,
        E: From<Error>,
    {
        self.integrate_batch(
            |xs: &[Real], out: &mut [Real]| {
                for (y, &x) in out.iter_mut().zip(xs) {
                    *y = f(x)?;
                }
                Ok(())
            },
            a,
            b,
        )
    }

    /// Integrate with a batched integrand.
    ///
    /// `f(xs, out)` is called once per level with that level's abscissas
    /// not evaluated earlier in the call, and must write `f(xs[i])` into
    /// `out[i]`; both slices have the same length. A level with nothing new
    /// to evaluate skips the call. This lets vectorised integrands amortise their
    /// per-call overhead.
    pub fn integrate_batch<F, E>(&self, f: F, a: Real, b: Real) -> Result<TanhSinhResult, E>
    where
        F: FnMut(&[Real], &mut [Real]) -> Result<(), E>,
        E: From<Error>,
    {
        self.validate()?;
        check_bounds(a, b)?;

        if a == b {
            trace!(a, "zero-width interval");
            return Ok(TanhSinhResult::zero());
        }
        if a > b {
            trace!(a, b, "reversed interval, integrating over [b, a]");
            return engine::run(self, b, a, f).map(TanhSinhResult::negated);
        }
        engine::run(self, a, b, f)
    }
}

impl Default for TanhSinhIntegral {
    fn default() -> Self {
        Self::default_params()
    }
}

impl Integrator for TanhSinhIntegral {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        self.integrate_with_report(f, a, b).map(|r| r.value)
    }
}

/// Integrate `f` on `[a, b]` to `tolerance` with the default step, range
/// limit and level cap.
///
/// ```
/// use dq_math::integrals::integrate;
///
/// let v = integrate(|x| x * x, 0.0, 1.0, 1e-10).unwrap();
/// assert!((v - 1.0 / 3.0).abs() < 1e-9);
/// ```
pub fn integrate<F: Fn(Real) -> Real>(f: F, a: Real, b: Real, tolerance: Real) -> Result<Real> {
    TanhSinhIntegral::new(tolerance).integrate(f, a, b)
}

fn check_bounds(a: Real, b: Real) -> Result<()> {
    ensure!(
        a.is_finite() && b.is_finite(),
        "integration bounds must be finite, got [{a}, {b}]"
    );
    Ok(())
}
