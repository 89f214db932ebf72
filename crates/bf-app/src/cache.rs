//! Content-keyed response cache.
//!
//! Models and sweeps are immutable values, so a response is a pure function
//! of their contents. The cache key is a SHA-256 digest over the effective
//! coefficients, the sweep samples and the singular-sample policy. Equal
//! contents always map to the same entry and nothing needs invalidating.

use std::collections::VecDeque;
use std::sync::Arc;

use bf_lti::TransferFunctionModel;
use bf_response::{FrequencyResponse, FrequencyResponseEngine, FrequencySweep, SingularPolicy};
use sha2::{Digest, Sha256};

use crate::error::AppResult;

/// Default number of retained responses.
pub const DEFAULT_CAPACITY: usize = 2;

fn hash_slice(hasher: &mut Sha256, values: &[f64]) {
    hasher.update((values.len() as u64).to_le_bytes());
    for v in values {
        hasher.update(v.to_bits().to_le_bytes());
    }
}

/// Hex digest identifying a (model, sweep, policy) triple.
pub fn cache_key(
    model: &TransferFunctionModel,
    sweep: &FrequencySweep,
    policy: SingularPolicy,
) -> String {
    let mut hasher = Sha256::new();
    hash_slice(&mut hasher, model.numerator().coeffs());
    hash_slice(&mut hasher, model.denominator().coeffs());
    hash_slice(&mut hasher, sweep.samples());
    hasher.update([match policy {
        SingularPolicy::Abort => 0u8,
        SingularPolicy::Skip => 1u8,
    }]);
    format!("{:x}", hasher.finalize())
}

/// Bounded least-recently-used cache of evaluated responses.
#[derive(Debug)]
pub struct ResponseCache {
    capacity: usize,
    // Most recently used at the back.
    entries: VecDeque<(String, Arc<FrequencyResponse>)>,
    hits: u64,
    misses: u64,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ResponseCache {
    /// A capacity of 0 disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Cached response for this model and sweep, evaluating on a miss.
    ///
    /// Returns the response and whether it came from the cache. Failed
    /// evaluations are not cached.
    pub fn get_or_evaluate(
        &mut self,
        model: &TransferFunctionModel,
        sweep: &FrequencySweep,
        engine: &FrequencyResponseEngine,
    ) -> AppResult<(Arc<FrequencyResponse>, bool)> {
        let key = cache_key(model, sweep, engine.on_singular);

        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            if let Some(entry) = self.entries.remove(pos) {
                let response = Arc::clone(&entry.1);
                self.entries.push_back(entry);
                self.hits += 1;
                tracing::debug!(key = %&key[..12], "response cache hit");
                return Ok((response, true));
            }
        }

        self.misses += 1;
        let response = Arc::new(engine.evaluate(model, sweep)?);
        if self.capacity > 0 {
            if self.entries.len() >= self.capacity {
                if let Some((evicted, _)) = self.entries.pop_front() {
                    tracing::trace!(key = %&evicted[..12], "response cache eviction");
                }
            }
            self.entries.push_back((key, Arc::clone(&response)));
        }
        Ok((response, false))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bf_lti::PadeOptions;

    fn model(den: &[f64]) -> TransferFunctionModel {
        TransferFunctionModel::build(&[1.0], den, None, PadeOptions::default()).unwrap()
    }

    fn sweep() -> FrequencySweep {
        FrequencySweep::logarithmic(0.1, 10.0, 20).unwrap()
    }

    #[test]
    fn key_stability() {
        let m = model(&[1.0, 1.0]);
        let k1 = cache_key(&m, &sweep(), SingularPolicy::Abort);
        let k2 = cache_key(&m.clone(), &sweep(), SingularPolicy::Abort);
        assert_eq!(k1, k2);
        assert_eq!(k1.len(), 64);
    }

    #[test]
    fn key_differs_for_different_inputs() {
        let s = sweep();
        let a = cache_key(&model(&[1.0, 1.0]), &s, SingularPolicy::Abort);
        let b = cache_key(&model(&[1.0, 2.0]), &s, SingularPolicy::Abort);
        let c = cache_key(&model(&[1.0, 1.0]), &s, SingularPolicy::Skip);
        let d = cache_key(
            &model(&[1.0, 1.0]),
            &FrequencySweep::logarithmic(0.1, 10.0, 21).unwrap(),
            SingularPolicy::Abort,
        );
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn key_separates_numerator_from_denominator() {
        // [1, 2] / [3] and [1] / [2, 3] flatten to the same coefficient stream.
        let s = sweep();
        let a = TransferFunctionModel::build(&[1.0, 2.0], &[3.0], None, PadeOptions::default())
            .unwrap();
        let b = TransferFunctionModel::build(&[1.0], &[2.0, 3.0], None, PadeOptions::default())
            .unwrap();
        assert_ne!(
            cache_key(&a, &s, SingularPolicy::Abort),
            cache_key(&b, &s, SingularPolicy::Abort)
        );
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let engine = FrequencyResponseEngine::default();
        let s = sweep();
        let (a, b, c) = (model(&[1.0, 1.0]), model(&[2.0, 1.0]), model(&[3.0, 1.0]));
        let mut cache = ResponseCache::new(2);

        cache.get_or_evaluate(&a, &s, &engine).unwrap();
        cache.get_or_evaluate(&b, &s, &engine).unwrap();
        // Touch `a` so `b` becomes the oldest.
        assert!(cache.get_or_evaluate(&a, &s, &engine).unwrap().1);
        cache.get_or_evaluate(&c, &s, &engine).unwrap();

        assert_eq!(cache.len(), 2);
        assert!(cache.get_or_evaluate(&a, &s, &engine).unwrap().1);
        assert!(!cache.get_or_evaluate(&b, &s, &engine).unwrap().1);
        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.misses(), 4);
    }

    #[test]
    fn zero_capacity_never_stores() {
        let engine = FrequencyResponseEngine::default();
        let mut cache = ResponseCache::new(0);
        let m = model(&[1.0, 1.0]);
        cache.get_or_evaluate(&m, &sweep(), &engine).unwrap();
        assert!(!cache.get_or_evaluate(&m, &sweep(), &engine).unwrap().1);
        assert!(cache.is_empty());
    }

    #[test]
    fn failures_are_not_cached() {
        let engine = FrequencyResponseEngine::default();
        let mut cache = ResponseCache::default();
        let integrator = model(&[1.0, 0.0]);
        let s = FrequencySweep::linear(0.0, 1.0, 3).unwrap();
        assert!(cache.get_or_evaluate(&integrator, &s, &engine).is_err());
        assert!(cache.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use bf_lti::PadeOptions;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn key_depends_only_on_content(
            num in prop::collection::vec(-10.0f64..10.0, 1..4),
            den in prop::collection::vec(0.1f64..10.0, 1..4),
            points in 1usize..50,
        ) {
            let options = PadeOptions::default();
            let a = TransferFunctionModel::build(&num, &den, None, options).unwrap();
            let b =
                TransferFunctionModel::build(&num.clone(), &den.clone(), None, options).unwrap();
            let sweep = FrequencySweep::linear(0.0, 5.0, points).unwrap();
            prop_assert_eq!(
                cache_key(&a, &sweep, SingularPolicy::Skip),
                cache_key(&b, &sweep.clone(), SingularPolicy::Skip)
            );
            prop_assert_ne!(
                cache_key(&a, &sweep, SingularPolicy::Skip),
                cache_key(&a, &sweep, SingularPolicy::Abort)
            );
        }
    }
}
