//! Aggregate error type for the NoteWeld pipeline.
//!
//! Each subsystem owns its own error enum; `NoteWeldError` wraps them with
//! `#[from]` so call sites can use `?` end to end.

mod embedding_error;
mod merge_error;

pub use embedding_error::EmbeddingError;
pub use merge_error::MergeError;

pub type NoteWeldResult<T> = Result<T, NoteWeldError>;

#[derive(Debug, thiserror::Error)]
pub enum NoteWeldError {
    #[error(transparent)]
    EmbeddingError(#[from] EmbeddingError),

    #[error(transparent)]
    MergeError(#[from] MergeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_error_converts_to_noteweld_error() {
        let err = EmbeddingError::DimensionMismatch {
            label: "bullet 0_1".into(),
            expected: 768,
            actual: 384,
        };
        let wrapped: NoteWeldError = err.into();
        assert!(matches!(wrapped, NoteWeldError::EmbeddingError(_)));
    }

    #[test]
    fn merge_error_converts_to_noteweld_error() {
        let err = MergeError::IndexSearchOutOfRange { k: 5, ntotal: 3 };
        let wrapped: NoteWeldError = err.into();
        assert!(matches!(wrapped, NoteWeldError::MergeError(_)));
    }

    #[test]
    fn dimension_mismatch_message_carries_values() {
        let err = EmbeddingError::DimensionMismatch {
            label: "header 0_Intro".into(),
            expected: 768,
            actual: 512,
        };
        let msg = err.to_string();
        assert!(msg.contains("768"));
        assert!(msg.contains("512"));
    }
}
