//! Running weighted sum and the level-to-level convergence test.

use dq_core::{Real, Size};

use crate::comparison::within_tolerance;

use super::result::TanhSinhResult;

/// Decides when two successive level estimates agree closely enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceJudge {
    tolerance: Real,
}

impl ConvergenceJudge {
    /// Create a judge for the given mixed relative/absolute tolerance.
    pub fn new(tolerance: Real) -> Self {
        Self { tolerance }
    }

    /// `|current − previous| ≤ tol · max(1, |current|)`.
    pub fn is_satisfied(&self, current: Real, previous: Real) -> bool {
        within_tolerance(current, previous, self.tolerance)
    }
}

/// Weighted-sample accumulator carried across refinement levels.
///
/// Samples from earlier levels stay in the running sum; each level only
/// adds its new samples and rescales by the current node spacing.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    running_sum: Real,
    estimates: Vec<Real>,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one weighted value.
    #[inline]
    pub fn add(&mut self, value: Real, weight: Real) {
        self.running_sum += value * weight;
    }

    /// Add a level's worth of values with their weights.
    pub fn add_level(&mut self, values: &[Real], weights: &[Real]) {
        debug_assert_eq!(values.len(), weights.len());
        for (&v, &w) in values.iter().zip(weights) {
            self.add(v, w);
        }
    }

    /// Close the current level: `estimate = step · Σ f(xᵢ)·wᵢ`.
    pub fn close_level(&mut self, step: Real) -> Real {
        let estimate = step * self.running_sum;
        self.estimates.push(estimate);
        estimate
    }

    /// Most recent level estimate.
    pub fn estimate(&self) -> Option<Real> {
        self.estimates.last().copied()
    }

    /// Estimate of the level before the most recent one.
    pub fn previous(&self) -> Option<Real> {
        self.estimates.len().checked_sub(2).map(|i| self.estimates[i])
    }

    /// `|estimate − previous|`, once two levels have closed.
    pub fn delta(&self) -> Option<Real> {
        Some((self.estimate()? - self.previous()?).abs())
    }

    /// Number of closed levels.
    pub fn levels(&self) -> Size {
        self.estimates.len()
    }

    /// `true` once two levels have closed and the judge accepts them.
    pub fn has_converged(&self, judge: &ConvergenceJudge) -> bool {
        match (self.estimate(), self.previous()) {
            (Some(current), Some(previous)) => judge.is_satisfied(current, previous),
            _ => false,
        }
    }

    /// Turn the accumulated state into a report.
    pub fn into_result(self, evaluations: Size, converged: bool) -> TanhSinhResult {
        let previous = self.previous();
        let value = self.estimate().unwrap_or(0.0);
        TanhSinhResult {
            value,
            previous,
            error_estimate: previous.map_or(Real::INFINITY, |p| (value - p).abs()),
            levels: self.estimates.len(),
            evaluations,
            converged,
            estimates: self.estimates,
        }
    }
}
