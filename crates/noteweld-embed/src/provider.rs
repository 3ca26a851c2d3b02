//! Default `EmbeddingProvider`: a hashed term-frequency vector, no external
//! model or network call. Not as semantically rich as a trained embedding
//! model, but deterministic, offline, and always available — useful for
//! tests and as a last-resort fallback.

use std::collections::HashMap;

use noteweld_core::{EmbeddingProvider, NoteWeldResult};
use tracing::debug;

/// Hashed TF-IDF-style embedding provider.
pub struct TfIdfEmbeddingProvider {
    dimensions: usize,
}

impl TfIdfEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        debug!(dimensions, "tfidf-hashed embedding provider ready");
        Self { dimensions }
    }

    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            // No content terms to hash (e.g. an all-stopword bullet). The
            // provider's contract is a unit-norm vector regardless of input,
            // so fall back to a single deterministic bucket rather than the
            // zero vector.
            let mut vec = vec![0.0f32; self.dimensions];
            vec[Self::hash_term("", self.dimensions)] = 1.0;
            return vec;
        }

        let mut tf: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.clone()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in &tf {
            let freq = count / total;
            let idf = 1.0 + (term.len() as f32).ln();
            let bucket = Self::hash_term(term, self.dimensions);
            vec[bucket] += freq * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl EmbeddingProvider for TfIdfEmbeddingProvider {
    fn embed(&self, text: &str) -> NoteWeldResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> NoteWeldResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-hashed"
    }
}
