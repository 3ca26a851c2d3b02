mod embedding;
mod normalizer;

pub use embedding::EmbeddingProvider;
pub use normalizer::TextNormalizer;
