/// Errors raised by an `EmbeddingProvider` — a contract violation by the
/// external embedding oracle.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding for {label} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("embedding for {label} is not unit-norm: ‖v‖ = {norm}")]
    NotUnitNorm { label: String, norm: f64 },
}
