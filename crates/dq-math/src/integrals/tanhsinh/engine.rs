//! The refinement loop.

use dq_core::Real;
use tracing::debug;

use super::accumulator::{Accumulator, ConvergenceJudge};
use super::cache::ValueCache;
use super::guard::clip_range_limit;
use super::result::TanhSinhResult;
use super::schedule::{LevelSamples, LevelScheduler};
use super::transform::Transform;
use super::TanhSinhIntegral;

/// Integrate over `[lower, upper]` with `lower < upper` and a validated
/// configuration.
///
/// `evaluate` receives each level's not yet evaluated abscissas in one
/// slice and writes the integrand values into the output slice of the same
/// length. Its errors are returned unchanged.
pub(super) fn run<E, F>(
    config: &TanhSinhIntegral,
    lower: Real,
    upper: Real,
    mut evaluate: F,
) -> Result<TanhSinhResult, E>
where
    F: FnMut(&[Real], &mut [Real]) -> Result<(), E>,
{
    debug_assert!(lower < upper);

    let transform = Transform::new(lower, upper);
    let mut schedule = LevelScheduler::new(
        config.initial_step(),
        clip_range_limit(config.range_limit()),
        config.max_level(),
    );
    let judge = ConvergenceJudge::new(config.tolerance());
    let mut acc = Accumulator::new();
    let mut samples = LevelSamples::new();
    let mut cache = ValueCache::new();
    let mut pending: Vec<Real> = Vec::new();
    let mut values: Vec<Real> = Vec::new();
    let mut evaluations = 0;

    let converged = loop {
        schedule.fill(&transform, &mut samples);
        cache.collect_missing(samples.abscissas(), &mut pending);
        values.clear();
        values.resize(pending.len(), 0.0);
        if !pending.is_empty() {
            evaluate(&pending, &mut values)?;
            evaluations += pending.len();
            cache.store(&pending, &values);
        }
        values.clear();
        values.extend(samples.abscissas().iter().map(|&x| cache.value(x)));
        acc.add_level(&values, samples.weights());
        let estimate = acc.close_level(schedule.step());

        debug!(
            level = schedule.level(),
            step = schedule.step(),
            estimate,
            delta = ?acc.delta(),
            evaluations,
            "tanh-sinh level closed"
        );

        if acc.has_converged(&judge) {
            break true;
        }
        if schedule.is_final() {
            debug!(
                max_level = config.max_level(),
                estimate,
                "tanh-sinh reached max level without converging"
            );
            break false;
        }
        schedule.refine();
    };

    Ok(acc.into_result(evaluations, converged))
}
