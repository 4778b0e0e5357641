//! Integrand values keyed by abscissa.
//!
//! Near the endpoints `c ± h·tanh(φ)` rounds distinct tail nodes onto the
//! same `f64`. Each node keeps its own weight in the sum, but the
//! integrand is called once per distinct abscissa and the value is reused.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use dq_core::Real;

/// Values of the integrand seen so far in one integration call.
#[derive(Debug, Clone, Default)]
pub(super) struct ValueCache {
    values: HashMap<u64, Real>,
}

impl ValueCache {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Collect into `missing` the abscissas that still need an integrand
    /// call, each once, in first-seen order.
    pub(super) fn collect_missing(&mut self, abscissas: &[Real], missing: &mut Vec<Real>) {
        missing.clear();
        for &x in abscissas {
            if let Entry::Vacant(slot) = self.values.entry(x.to_bits()) {
                // filled by `store` once the batch returns
                slot.insert(Real::NAN);
                missing.push(x);
            }
        }
    }

    /// Record `values[i] = f(abscissas[i])`.
    pub(super) fn store(&mut self, abscissas: &[Real], values: &[Real]) {
        debug_assert_eq!(abscissas.len(), values.len());
        for (&x, &y) in abscissas.iter().zip(values) {
            self.values.insert(x.to_bits(), y);
        }
    }

    /// Cached value at `x`; NaN if `x` was never stored.
    pub(super) fn value(&self, x: Real) -> Real {
        self.values.get(&x.to_bits()).copied().unwrap_or(Real::NAN)
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_abscissas_are_requested_once() {
        let mut cache = ValueCache::new();
        let mut missing = Vec::new();
        cache.collect_missing(&[0.5, 0.25, 0.5, 0.75], &mut missing);
        assert_eq!(missing, vec![0.5, 0.25, 0.75]);
        cache.store(&missing, &[1.0, 2.0, 3.0]);

        cache.collect_missing(&[0.75, 0.125, 0.25], &mut missing);
        assert_eq!(missing, vec![0.125]);
        cache.store(&missing, &[4.0]);

        assert_eq!(cache.value(0.5), 1.0);
        assert_eq!(cache.value(0.125), 4.0);
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn unknown_abscissa_is_nan() {
        assert!(ValueCache::new().value(0.3).is_nan());
    }

    #[test]
    fn signed_zeros_are_distinct() {
        let mut cache = ValueCache::new();
        let mut missing = Vec::new();
        cache.collect_missing(&[0.0, -0.0], &mut missing);
        assert_eq!(missing.len(), 2);
    }
}
