/// Pure, deterministic text normalization. Pluggable: the real
/// tokenizer/lemmatizer/stopword list is out of scope, the core depends only
/// on this contract.
pub trait TextNormalizer: Send + Sync {
    /// Normalize a bullet: returns (normalized text, average kept-word length).
    /// Idempotent under a second application to its own `normalized` output.
    fn normalize_bullet(&self, text: &str) -> (String, f64);

    /// Normalize a header: lowercase and trim outer whitespace only, no
    /// token filtering — header matching should not lose short content words.
    fn normalize_header(&self, text: &str) -> String {
        text.trim().to_lowercase()
    }
}
