//! Per-run caches for normalization and embedding results.
//!
//! Scoped per run rather than a process-global map: a `MergeOrchestrator`
//! owns one pair per `run()` call and passes them by reference, which keeps
//! test runs isolated from each other without changing the hit/miss behavior.

use moka::sync::Cache;

/// Embedding cache key. Headers are keyed by `(note_num,
/// header_name)` to preserve provenance grouping; bullets are keyed by their
/// normalized text so identical bullets across notes share one embedding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Header { note_num: u64, header_name: String },
    Bullet { normalized_text: String },
}

impl CacheKey {
    pub fn header(note_num: u64, header_name: impl Into<String>) -> Self {
        Self::Header {
            note_num,
            header_name: header_name.into(),
        }
    }

    pub fn bullet(normalized_text: impl Into<String>) -> Self {
        Self::Bullet {
            normalized_text: normalized_text.into(),
        }
    }
}

/// Process-local, unbounded-for-the-run embedding cache.
pub struct EmbeddingCache {
    cache: Cache<CacheKey, Vec<f32>>,
}

impl EmbeddingCache {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().max_capacity(u64::MAX).build(),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: CacheKey, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EmbeddingCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-local normalization cache, keyed by the original (un-normalized)
/// sentence string.
pub struct NormalizationCache {
    cache: Cache<String, (String, f64)>,
}

impl NormalizationCache {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().max_capacity(u64::MAX).build(),
        }
    }

    pub fn get(&self, original: &str) -> Option<(String, f64)> {
        self.cache.get(original)
    }

    pub fn insert(&self, original: String, result: (String, f64)) {
        self.cache.insert(original, result);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NormalizationCache {
    fn default() -> Self {
        Self::new()
    }
}
