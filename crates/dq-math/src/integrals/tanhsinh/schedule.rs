//! Progressive refinement schedule.
//!
//! Level 0 samples `t = 0, ±h₀, ±2h₀, …` up to the range limit. Every later
//! level halves the step and samples only the odd multiples of the new
//! step, i.e. the midpoints between nodes that already exist, so no node
//! `t` is ever generated twice. Tail nodes may still round onto the same
//! abscissa; the engine evaluates each distinct abscissa once.

use dq_core::{Real, Size};

use super::transform::Transform;

/// A transient abscissa/weight pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Abscissa in the original variable.
    pub x: Real,
    /// Transform weight `w(t)`.
    pub weight: Real,
}

/// The samples generated for one level, kept as parallel columns so the
/// abscissas can be handed to a batched integrand as one slice.
#[derive(Debug, Clone, Default)]
pub struct LevelSamples {
    abscissas: Vec<Real>,
    weights: Vec<Real>,
}

impl LevelSamples {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all samples, keeping the allocation.
    pub fn clear(&mut self) {
        self.abscissas.clear();
        self.weights.clear();
    }

    /// Append a sample.
    pub fn push(&mut self, sample: Sample) {
        self.abscissas.push(sample.x);
        self.weights.push(sample.weight);
    }

    /// Abscissas, in generation order.
    pub fn abscissas(&self) -> &[Real] {
        &self.abscissas
    }

    /// Weights, aligned with [`abscissas`](Self::abscissas).
    pub fn weights(&self) -> &[Real] {
        &self.weights
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.abscissas.len()
    }

    /// `true` if the level produced no samples.
    pub fn is_empty(&self) -> bool {
        self.abscissas.is_empty()
    }
}

/// Step-halving scheduler over refinement levels `0 ..= max_level`.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelScheduler {
    level: Size,
    step: Real,
    range_limit: Real,
    max_level: Size,
}

impl LevelScheduler {
    /// Start at level 0 with step `initial_step`.
    ///
    /// `range_limit` is used as given; clip it with
    /// [`clip_range_limit`](super::guard::clip_range_limit) first.
    pub fn new(initial_step: Real, range_limit: Real, max_level: Size) -> Self {
        Self {
            level: 0,
            step: initial_step,
            range_limit,
            max_level,
        }
    }

    /// Current level.
    pub fn level(&self) -> Size {
        self.level
    }

    /// Node spacing in `t` at the current level.
    pub fn step(&self) -> Real {
        self.step
    }

    /// `true` once the last permitted level has been reached.
    pub fn is_final(&self) -> bool {
        self.level >= self.max_level
    }

    /// Move to the next level, halving the step.
    pub fn refine(&mut self) {
        self.level += 1;
        self.step *= 0.5;
    }

    /// Positive `t` values that are new at the current level, ascending.
    pub fn new_abscissas(&self) -> impl Iterator<Item = Real> {
        let step = self.step;
        let range_limit = self.range_limit;
        let stride = if self.level == 0 { 1 } else { 2 };
        (1u64..)
            .step_by(stride)
            .map(move |k| k as Real * step)
            .take_while(move |&t| t <= range_limit)
    }

    /// Generate the current level's samples into `samples`.
    ///
    /// Level 0 also emits the midpoint. For each new `t` both mirrored
    /// abscissas are emitted. The sweep stops at the first `t` whose weight
    /// has underflowed to zero, or whose mirrored abscissas have both
    /// rounded onto the interval endpoints; nothing further out can
    /// contribute. A single collapsed side is skipped on its own.
    pub fn fill(&self, transform: &Transform, samples: &mut LevelSamples) {
        samples.clear();
        if self.level == 0 {
            samples.push(Sample {
                x: transform.center(),
                weight: transform.base_weight(),
            });
        }
        for t in self.new_abscissas() {
            let node = transform.node(t);
            if node.weight == 0.0 {
                break;
            }
            let (lo, hi) = transform.mirrored(node.offset);
            let lo_inside = transform.is_interior(lo);
            let hi_inside = transform.is_interior(hi);
            if !lo_inside && !hi_inside {
                break;
            }
            if hi_inside {
                samples.push(Sample {
                    x: hi,
                    weight: node.weight,
                });
            }
            if lo_inside {
                samples.push(Sample {
                    x: lo,
                    weight: node.weight,
                });
            }
        }
    }
}
