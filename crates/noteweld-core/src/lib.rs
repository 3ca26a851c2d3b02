//! # noteweld-core
//!
//! Foundation crate for the NoteWeld note-merging pipeline.
//! Defines the data model, the pluggable provider traits, config, and errors.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod traits;

pub use config::MergeConfig;
pub use errors::{NoteWeldError, NoteWeldResult};
pub use model::{
    BulletConflict, BulletProvenance, Header, HeaderCluster, HeaderConflict, HeaderProvenance,
    ProvenanceReport, RetainedBullet,
};
pub use traits::{EmbeddingProvider, TextNormalizer};
