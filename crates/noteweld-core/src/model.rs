//! The merge pipeline's data model (notes, headers, bullets, clusters,
//! retained items, conflict records) and the provenance report schema
//! emitted at the end of a run.

use serde::{Deserialize, Serialize};

/// A headered section as ingested from a source note file.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Assigned in a single pass across all notes in ingest order; stable
    /// within a run.
    pub header_id: u64,
    pub note_num: u64,
    pub header_name: String,
    /// Bullet text, in source order, 1-based indexing is applied by callers.
    pub bullets: Vec<String>,
}

/// The canonical representative of a deduplicated bullet group.
#[derive(Debug, Clone, PartialEq)]
pub struct RetainedBullet {
    pub source_note_num: u64,
    pub source_bullet_idx: u64,
    /// Bullet text with trailing periods stripped.
    pub text: String,
    pub avg_word_length: f64,
}

/// A superseded or absorbed bullet, recorded against the retained bullet it
/// conflicted with. Conflict lists are flat: `BulletConflict` does not itself
/// carry a further list of conflicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletConflict {
    pub note_id: u64,
    pub bullet_id: String,
    pub text: String,
    pub similarity: f64,
    pub overlap_ratio: f64,
}

/// A superseded header, recorded against the cluster's accepted header.
/// Flat for the same reason as `BulletConflict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderConflict {
    pub note_id: u64,
    pub header_id: u64,
    pub header_name: String,
    pub similarity: f64,
    pub overlap_ratio: f64,
}

/// An equivalence class of Headers judged semantically equivalent.
/// `accepted_header` is always the member of smallest `header_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCluster {
    pub accepted_header: Header,
    pub members: Vec<Header>,
    pub conflicts: Vec<HeaderConflict>,
}

/// Structured provenance document (schema fixed by the external interface).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceReport {
    pub headers: Vec<HeaderProvenance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderProvenance {
    pub header_id: u64,
    pub accepted_header_name: String,
    pub note_id: u64,
    pub conflicting_headers: Vec<HeaderConflict>,
    pub bullets: Vec<BulletProvenance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletProvenance {
    /// `"<note_id>_<bullet_idx>"`.
    pub bullet_id: String,
    pub accepted_bullet_text: String,
    pub conflicting_bullets: Vec<BulletConflict>,
}
