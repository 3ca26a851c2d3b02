/// Internal-inconsistency errors: states the pipeline should never reach
/// if its own invariants hold.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("embedding cache hit for key {key:?} returned dimension {actual}, expected {expected}")]
    CacheDimensionMismatch {
        key: String,
        expected: usize,
        actual: usize,
    },

    #[error("vector index search requested top-{k} over {ntotal} entries")]
    IndexSearchOutOfRange { k: usize, ntotal: usize },
}
