//! Whole-word result cache
//!
//! Dictionaries never change after construction, so cached splits never go
//! stale and the cache is unbounded.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that ran the computation
    pub misses: u64,
    /// Distinct words currently cached
    pub entries: usize,
}

/// Concurrent map from input word to its split
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: DashMap<String, Vec<String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResultCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached split of `word`, computing it on first use
    ///
    /// The computation runs while the entry's shard is locked, so concurrent
    /// callers asking for the same word compute it once. `compute` must not
    /// call back into this cache.
    pub fn get_or_compute<F>(&self, word: &str, compute: F) -> Vec<String>
    where
        F: FnOnce() -> Vec<String>,
    {
        if let Some(cached) = self.entries.get(word) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return cached.value().clone();
        }

        let mut computed = false;
        let fragments = self
            .entries
            .entry(word.to_string())
            .or_insert_with(|| {
                computed = true;
                compute()
            })
            .value()
            .clone();

        let counter = if computed { &self.misses } else { &self.hits };
        counter.fetch_add(1, Ordering::Relaxed);
        fragments
    }

    /// Cached split of `word`, if any
    pub fn get(&self, word: &str) -> Option<Vec<String>> {
        self.entries.get(word).map(|entry| entry.value().clone())
    }

    /// Number of cached words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries and reset counters
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_computes_once_per_word() {
        let cache = ResultCache::new();
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            vec!["Auto".to_string(), "bahn".to_string()]
        };

        assert_eq!(cache.get_or_compute("Autobahn", compute), vec!["Auto", "bahn"]);
        assert_eq!(cache.get_or_compute("Autobahn", compute), vec!["Auto", "bahn"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_clear_resets() {
        let cache = ResultCache::new();
        cache.get_or_compute("Haus", || vec!["Haus".to_string()]);
        assert_eq!(cache.get("Haus"), Some(vec!["Haus".to_string()]));

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_concurrent_callers_compute_once() {
        let cache = Arc::new(ResultCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                thread::spawn(move || {
                    cache.get_or_compute("Arbeitszeit", || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        vec!["Arbeit".to_string(), "Zeit".to_string()]
                    })
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec!["Arbeit", "Zeit"]);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }
}
