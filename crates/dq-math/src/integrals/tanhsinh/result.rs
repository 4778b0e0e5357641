//! Per-call integration report.

use dq_core::{Real, Size};

/// Outcome of a tanh-sinh integration.
///
/// Non-convergence is not an error: when `max_level` is exhausted the last
/// estimate is returned with `converged == false`, and callers can judge
/// the result from `error_estimate` or the per-level `estimates`.
#[derive(Debug, Clone, PartialEq)]
pub struct TanhSinhResult {
    /// Final estimate of the integral.
    pub value: Real,
    /// Estimate of the level before the final one, if more than one ran.
    pub previous: Option<Real>,
    /// `|value − previous|`; infinite when only one level ran.
    pub error_estimate: Real,
    /// Number of refinement levels evaluated.
    pub levels: Size,
    /// Number of integrand evaluations.
    pub evaluations: Size,
    /// Whether the tolerance test was met before `max_level`.
    pub converged: bool,
    /// One estimate per level, coarsest first.
    pub estimates: Vec<Real>,
}

impl TanhSinhResult {
    /// Report for a zero-width interval: exactly `0`, no evaluations.
    pub fn zero() -> Self {
        Self {
            value: 0.0,
            previous: None,
            error_estimate: 0.0,
            levels: 0,
            evaluations: 0,
            converged: true,
            estimates: Vec::new(),
        }
    }

    /// The same report for the reversed interval.
    pub fn negated(mut self) -> Self {
        self.value = -self.value;
        self.previous = self.previous.map(|p| -p);
        for e in &mut self.estimates {
            *e = -*e;
        }
        self
    }

    /// `|estimates[i+1] − estimates[i]|` for each pair of successive levels.
    pub fn deltas(&self) -> impl Iterator<Item = Real> + '_ {
        self.estimates.windows(2).map(|w| (w[1] - w[0]).abs())
    }
}
