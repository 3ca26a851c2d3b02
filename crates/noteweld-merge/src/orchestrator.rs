//! Top-level coordinator that drives a full merge run.

use std::collections::HashMap;

use noteweld_core::{
    BulletProvenance, EmbeddingProvider, Header, HeaderProvenance, NoteWeldResult,
    ProvenanceReport, TextNormalizer,
};
use noteweld_embed::{CacheKey, EmbeddingCache, NormalizationCache};
use tracing::{debug, info};

use crate::deduplicator::{dedupe, BulletCandidate};
use crate::header_clusterer::cluster_headers;
use crate::validation::{validate_cache_hit, validate_fresh_embedding};

/// A note as ingested, before header IDs are assigned. `headers` preserves
/// the source file's section order.
#[derive(Debug, Clone)]
pub struct IngestedNote {
    pub note_num: u64,
    pub headers: Vec<IngestedHeader>,
}

#[derive(Debug, Clone)]
pub struct IngestedHeader {
    pub header_name: String,
    /// Bullet text, already trimmed to the `"- "`-prefixed lines.
    pub bullets: Vec<String>,
}

/// Output of a full merge run: the plain-text merged document and the
/// structured provenance report.
#[derive(Debug, Clone)]
pub struct MergeOutput {
    pub merged_text: String,
    pub provenance: ProvenanceReport,
}

/// Drives header clustering, then per-cluster bullet deduplication, then
/// emits the merged document. Stateless between runs: every cache and index
/// it uses is scoped to a single `run` call.
pub struct MergeOrchestrator<'a> {
    normalizer: &'a dyn TextNormalizer,
    embedder: &'a dyn EmbeddingProvider,
    similarity_threshold: f64,
    overlap_threshold: f64,
    header_similarity_threshold: f64,
}

impl<'a> MergeOrchestrator<'a> {
    pub fn new(
        normalizer: &'a dyn TextNormalizer,
        embedder: &'a dyn EmbeddingProvider,
        similarity_threshold: f64,
        overlap_threshold: f64,
        header_similarity_threshold: f64,
    ) -> Self {
        Self {
            normalizer,
            embedder,
            similarity_threshold,
            overlap_threshold,
            header_similarity_threshold,
        }
    }

    pub fn with_config(
        normalizer: &'a dyn TextNormalizer,
        embedder: &'a dyn EmbeddingProvider,
        config: &noteweld_core::MergeConfig,
    ) -> Self {
        Self::new(
            normalizer,
            embedder,
            config.similarity_threshold,
            config.overlap_threshold,
            config.header_similarity_threshold,
        )
    }

    /// Run one merge over `notes`, which must already be in ascending
    /// `note_num` order.
    pub fn run(&self, notes: &[IngestedNote]) -> NoteWeldResult<MergeOutput> {
        let embedding_cache = EmbeddingCache::new();
        let normalization_cache = NormalizationCache::new();

        let headers = assign_header_ids(notes);
        info!(header_count = headers.len(), "assigned header ids");

        let header_embeddings = self.embed_headers(&headers, &embedding_cache)?;

        let clusters = cluster_headers(&headers, &header_embeddings, self.header_similarity_threshold);
        info!(cluster_count = clusters.len(), "clustered headers");

        let mut merged_lines: Vec<String> = Vec::new();
        let mut header_provenance: Vec<HeaderProvenance> = Vec::new();

        for cluster in &clusters {
            // `cluster.members` is already ascending by `header_id`
            // (header_clusterer sorts each group before returning it).
            let mut candidates: Vec<BulletCandidate> = Vec::new();
            for member in &cluster.members {
                for (idx, raw) in member.bullets.iter().enumerate() {
                    let (normalized_text, avg_word_length) =
                        self.normalize_cached(raw, &normalization_cache);
                    candidates.push(BulletCandidate {
                        source_note_num: member.note_num,
                        source_bullet_idx: (idx + 1) as u64,
                        raw_text: raw.clone(),
                        normalized_text,
                        avg_word_length,
                        embedding: Vec::new(),
                    });
                }
            }

            self.embed_bullets_in_place(&mut candidates, &embedding_cache)?;

            let outcome = dedupe(&candidates, self.similarity_threshold, self.overlap_threshold)?;
            debug!(
                header_id = cluster.accepted_header.header_id,
                retained = outcome.retained.len(),
                "deduplicated cluster"
            );

            merged_lines.push(format!("{}:", cluster.accepted_header.header_name));
            let mut bullet_provenance = Vec::with_capacity(outcome.retained.len());
            for (retained, conflicts) in outcome.retained.iter().zip(outcome.conflicts.iter()) {
                merged_lines.push(format!("- {}", retained.text));
                bullet_provenance.push(BulletProvenance {
                    bullet_id: format!("{}_{}", retained.source_note_num, retained.source_bullet_idx),
                    accepted_bullet_text: retained.text.clone(),
                    conflicting_bullets: conflicts.clone(),
                });
            }

            header_provenance.push(HeaderProvenance {
                header_id: cluster.accepted_header.header_id,
                accepted_header_name: cluster.accepted_header.header_name.clone(),
                note_id: cluster.accepted_header.note_num,
                conflicting_headers: cluster.conflicts.clone(),
                bullets: bullet_provenance,
            });
        }

        Ok(MergeOutput {
            merged_text: merged_lines.join("\n"),
            provenance: ProvenanceReport {
                headers: header_provenance,
            },
        })
    }

    fn normalize_cached(&self, raw: &str, cache: &NormalizationCache) -> (String, f64) {
        if let Some(cached) = cache.get(raw) {
            return cached;
        }
        let result = self.normalizer.normalize_bullet(raw);
        cache.insert(raw.to_string(), result.clone());
        result
    }

    fn embed_headers(&self, headers: &[Header], cache: &EmbeddingCache) -> NoteWeldResult<Vec<Vec<f32>>> {
        let dim = self.embedder.dimensions();
        let mut embeddings = Vec::with_capacity(headers.len());
        for header in headers {
            let label = format!("header {}_{}", header.note_num, header.header_name);
            let key = CacheKey::header(header.note_num, header.header_name.clone());
            let embedding = match cache.get(&key) {
                Some(v) => {
                    validate_cache_hit(&label, dim, &v)?;
                    v
                }
                None => {
                    let normalized = self.normalizer.normalize_header(&header.header_name);
                    let v = self.embedder.embed(&normalized)?;
                    validate_fresh_embedding(&label, dim, &v)?;
                    cache.insert(key, v.clone());
                    v
                }
            };
            embeddings.push(embedding);
        }
        Ok(embeddings)
    }

    fn embed_bullets_in_place(
        &self,
        candidates: &mut [BulletCandidate],
        cache: &EmbeddingCache,
    ) -> NoteWeldResult<()> {
        // Embed each unique normalized form once, then fan the
        // result out to every candidate sharing that form.
        let dim = self.embedder.dimensions();
        let mut by_normalized: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, c) in candidates.iter().enumerate() {
            by_normalized.entry(c.normalized_text.clone()).or_default().push(i);
        }

        for (normalized, indices) in by_normalized {
            let key = CacheKey::bullet(normalized.clone());
            let embedding = match cache.get(&key) {
                Some(v) => {
                    validate_cache_hit(&normalized, dim, &v)?;
                    v
                }
                None => {
                    let v = self.embedder.embed(&normalized)?;
                    validate_fresh_embedding(&normalized, dim, &v)?;
                    cache.insert(key, v.clone());
                    v
                }
            };
            for i in indices {
                candidates[i].embedding = embedding.clone();
            }
        }
        Ok(())
    }
}

/// Assign `header_id` in a single pass across all notes in ingest order.
fn assign_header_ids(notes: &[IngestedNote]) -> Vec<Header> {
    let mut headers = Vec::new();
    let mut next_id = 0u64;
    for note in notes {
        for h in &note.headers {
            headers.push(Header {
                header_id: next_id,
                note_num: note.note_num,
                header_name: h.header_name.clone(),
                bullets: h.bullets.clone(),
            });
            next_id += 1;
        }
    }
    headers
}
