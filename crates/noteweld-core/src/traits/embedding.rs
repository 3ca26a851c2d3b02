use crate::errors::NoteWeldResult;

/// An opaque embedding oracle: text → unit-norm vector of fixed
/// dimension D. The core depends only on this contract — the real model is
/// out of scope and pluggable.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a unit-norm vector of `dimensions()` floats.
    fn embed(&self, text: &str) -> NoteWeldResult<Vec<f32>>;

    /// Embed a batch of texts. Implementations may override this for
    /// throughput; the default embeds one at a time.
    fn embed_batch(&self, texts: &[String]) -> NoteWeldResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// The dimensionality D of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name, for logging.
    fn name(&self) -> &str;
}
