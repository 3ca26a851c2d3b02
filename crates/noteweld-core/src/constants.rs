//! Default thresholds for the merge pipeline.

/// Default cosine-similarity threshold for bullet deduplication.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Default lexical-overlap threshold for bullet deduplication.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.3;

/// Default cosine-similarity threshold for header clustering.
pub const DEFAULT_HEADER_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Default notes directory, relative to the working directory.
pub const DEFAULT_NOTES_DIR: &str = "test_files";
