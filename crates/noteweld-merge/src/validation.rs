//! Embedding contract validation.
//!
//! The embedder is an external collaborator; a non-unit vector or a wrong
//! dimension from it is a contract violation and fatal, not something the
//! orchestrator recovers from. A cache hit returning a vector of the wrong
//! dimension is an internal inconsistency — the cache can only ever have
//! been populated by this same embedder, so that should be unreachable.

use noteweld_core::errors::{EmbeddingError, MergeError};
use noteweld_core::NoteWeldResult;

const UNIT_NORM_TOLERANCE: f64 = 1e-3;

/// Validate a freshly produced embedding against the provider's declared
/// dimensionality and the unit-norm invariant.
pub fn validate_fresh_embedding(label: &str, expected_dim: usize, vector: &[f32]) -> NoteWeldResult<()> {
    if vector.len() != expected_dim {
        return Err(EmbeddingError::DimensionMismatch {
            label: label.to_string(),
            expected: expected_dim,
            actual: vector.len(),
        }
        .into());
    }

    let norm = (vector.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>()).sqrt();
    if (norm - 1.0).abs() > UNIT_NORM_TOLERANCE {
        return Err(EmbeddingError::NotUnitNorm {
            label: label.to_string(),
            norm,
        }
        .into());
    }

    Ok(())
}

/// Validate a cache-hit embedding's dimension matches what the provider
/// declares. A mismatch here cannot be the embedder's fault — the entry was
/// only ever written by a call this same validator already passed — so it is
/// reported as an internal inconsistency, not an embedder fault.
pub fn validate_cache_hit(key_label: &str, expected_dim: usize, vector: &[f32]) -> NoteWeldResult<()> {
    if vector.len() != expected_dim {
        return Err(MergeError::CacheDimensionMismatch {
            key: key_label.to_string(),
            expected: expected_dim,
            actual: vector.len(),
        }
        .into());
    }
    Ok(())
}
