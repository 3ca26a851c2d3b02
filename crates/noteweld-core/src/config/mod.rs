//! Merge pipeline configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for a single merge run: the three similarity thresholds
/// plus the notes directory to discover input files in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Cosine-similarity threshold for bullet deduplication (default 0.7).
    pub similarity_threshold: f64,
    /// Lexical-overlap threshold for bullet deduplication (default 0.3).
    pub overlap_threshold: f64,
    /// Cosine-similarity threshold for header clustering (default 0.8).
    pub header_similarity_threshold: f64,
    /// Directory to discover `notes(\d*).json` files in.
    pub notes_dir: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: constants::DEFAULT_SIMILARITY_THRESHOLD,
            overlap_threshold: constants::DEFAULT_OVERLAP_THRESHOLD,
            header_similarity_threshold: constants::DEFAULT_HEADER_SIMILARITY_THRESHOLD,
            notes_dir: PathBuf::from(constants::DEFAULT_NOTES_DIR),
        }
    }
}
