//! Per-cluster bullet deduplication.

use noteweld_core::{BulletConflict, NoteWeldResult, RetainedBullet};

use crate::similarity::overlap_ratio;
use crate::vector_index::VectorIndex;

/// One candidate bullet going into deduplication: source position, raw and
/// normalized text, the normalizer's average-word-length signal, and its
/// embedding. Field order carries no semantic weight.
#[derive(Debug, Clone)]
pub struct BulletCandidate {
    pub source_note_num: u64,
    pub source_bullet_idx: u64,
    pub raw_text: String,
    pub normalized_text: String,
    pub avg_word_length: f64,
    pub embedding: Vec<f32>,
}

/// Result of deduplicating one cluster's bullets: retained bullets in
/// insertion order, and each retained bullet's accumulated conflict list
/// (indices line up with `retained`).
#[derive(Debug, Clone, Default)]
pub struct DedupeOutcome {
    pub retained: Vec<RetainedBullet>,
    pub conflicts: Vec<Vec<BulletConflict>>,
}

/// Strip trailing periods from a bullet's raw text.
fn strip_trailing_periods(text: &str) -> String {
    text.trim_end_matches('.').to_string()
}

fn bullet_id(note_num: u64, bullet_idx: u64) -> String {
    format!("{note_num}_{bullet_idx}")
}

/// Run the deduplication algorithm over an ordered sequence of candidate
/// bullets, using a private vector index scoped to this call.
///
/// The first candidate above `similarity_threshold` is checked against
/// `overlap_threshold`; on a match, the longer-average-word-length side is
/// retained (ties keep the existing retained bullet); otherwise the input
/// starts a new retained entry.
pub fn dedupe(
    items: &[BulletCandidate],
    similarity_threshold: f64,
    overlap_threshold: f64,
) -> NoteWeldResult<DedupeOutcome> {
    let mut index = VectorIndex::new();
    let mut normalized_texts: Vec<String> = Vec::new();
    let mut retained: Vec<RetainedBullet> = Vec::new();
    let mut conflicts: Vec<Vec<BulletConflict>> = Vec::new();

    for item in items {
        if retained.is_empty() {
            accept(&mut index, &mut normalized_texts, &mut retained, &mut conflicts, item);
            continue;
        }

        let k = retained.len();
        let candidates = index.search(&item.embedding, k)?;

        // Only the single most-similar candidate at or above the similarity
        // threshold is ever examined; a failed overlap check on it does not
        // fall through to the next-closest candidate.
        let top = candidates
            .first()
            .copied()
            .filter(|(similarity, _)| *similarity >= similarity_threshold);

        let matched = match top {
            Some((similarity, slot)) => {
                let overlap = overlap_ratio(&item.normalized_text, &normalized_texts[slot]);
                if overlap >= overlap_threshold {
                    if item.avg_word_length > retained[slot].avg_word_length {
                        let displaced = to_conflict(&retained[slot], similarity, overlap);
                        let mut inherited = conflicts[slot].clone();
                        inherited.push(displaced);

                        retained[slot] = RetainedBullet {
                            source_note_num: item.source_note_num,
                            source_bullet_idx: item.source_bullet_idx,
                            text: strip_trailing_periods(&item.raw_text),
                            avg_word_length: item.avg_word_length,
                        };
                        normalized_texts[slot] = item.normalized_text.clone();
                        conflicts[slot] = inherited;
                        // The index keeps the displaced item's embedding at this
                        // slot: a later candidate is compared against the stale
                        // vector, not a fresh embedding of the replacement text.
                    } else {
                        let conflict = to_conflict_from_candidate(item, similarity, overlap);
                        conflicts[slot].push(conflict);
                    }
                    true
                } else {
                    false
                }
            }
            None => false,
        };

        if !matched {
            accept(&mut index, &mut normalized_texts, &mut retained, &mut conflicts, item);
        }
    }

    Ok(DedupeOutcome { retained, conflicts })
}

fn accept(
    index: &mut VectorIndex,
    normalized_texts: &mut Vec<String>,
    retained: &mut Vec<RetainedBullet>,
    conflicts: &mut Vec<Vec<BulletConflict>>,
    item: &BulletCandidate,
) {
    index.add(item.embedding.clone());
    normalized_texts.push(item.normalized_text.clone());
    retained.push(RetainedBullet {
        source_note_num: item.source_note_num,
        source_bullet_idx: item.source_bullet_idx,
        text: strip_trailing_periods(&item.raw_text),
        avg_word_length: item.avg_word_length,
    });
    conflicts.push(Vec::new());
}

fn to_conflict(retained: &RetainedBullet, similarity: f64, overlap_ratio: f64) -> BulletConflict {
    BulletConflict {
        note_id: retained.source_note_num,
        bullet_id: bullet_id(retained.source_note_num, retained.source_bullet_idx),
        text: retained.text.clone(),
        similarity,
        overlap_ratio,
    }
}

fn to_conflict_from_candidate(
    item: &BulletCandidate,
    similarity: f64,
    overlap_ratio: f64,
) -> BulletConflict {
    BulletConflict {
        note_id: item.source_note_num,
        bullet_id: bullet_id(item.source_note_num, item.source_bullet_idx),
        text: strip_trailing_periods(&item.raw_text),
        similarity,
        overlap_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(note: u64, idx: u64, text: &str, norm: &str, awl: f64, embedding: Vec<f32>) -> BulletCandidate {
        BulletCandidate {
            source_note_num: note,
            source_bullet_idx: idx,
            raw_text: text.to_string(),
            normalized_text: norm.to_string(),
            avg_word_length: awl,
            embedding,
        }
    }

    #[test]
    fn empty_input_returns_empty_output() {
        let outcome = dedupe(&[], 0.7, 0.3).unwrap();
        assert!(outcome.retained.is_empty());
        assert!(outcome.conflicts.is_empty());
    }

    #[test]
    fn single_item_is_retained_unconditionally() {
        let items = vec![candidate(0, 1, "x", "x", 1.0, vec![1.0, 0.0])];
        let outcome = dedupe(&items, 0.7, 0.3).unwrap();
        assert_eq!(outcome.retained.len(), 1);
        assert_eq!(outcome.retained[0].text, "x");
    }

    #[test]
    fn exact_duplicate_bullets_collapse_with_conflict() {
        let items = vec![
            candidate(0, 1, "x", "x", 1.0, vec![1.0, 0.0]),
            candidate(1, 1, "x", "x", 1.0, vec![1.0, 0.0]),
        ];
        let outcome = dedupe(&items, 0.7, 0.3).unwrap();
        assert_eq!(outcome.retained.len(), 1);
        assert_eq!(outcome.conflicts[0].len(), 1);
        assert_eq!(outcome.conflicts[0][0].note_id, 1);
        assert_eq!(outcome.conflicts[0][0].bullet_id, "1_1");
    }

    #[test]
    fn replacement_by_longer_avg_word_length() {
        let items = vec![
            candidate(0, 1, "cat", "cat", 3.0, vec![1.0, 0.0]),
            candidate(1, 1, "cats", "cat", 4.0, vec![1.0, 0.0]),
        ];
        let outcome = dedupe(&items, 0.7, 0.3).unwrap();
        assert_eq!(outcome.retained.len(), 1);
        assert_eq!(outcome.retained[0].text, "cats");
        assert_eq!(outcome.retained[0].source_note_num, 1);
        assert_eq!(outcome.conflicts[0].len(), 1);
        assert_eq!(outcome.conflicts[0][0].text, "cat");
        assert_eq!(outcome.conflicts[0][0].note_id, 0);
    }

    #[test]
    fn similarity_without_overlap_both_retained() {
        let items = vec![
            candidate(0, 1, "alpha beta", "alpha beta", 5.0, vec![1.0, 0.0]),
            candidate(1, 1, "gamma delta", "gamma delta", 5.0, vec![0.99, 0.14106735]),
        ];
        let outcome = dedupe(&items, 0.7, 0.3).unwrap();
        assert_eq!(outcome.retained.len(), 2);
        assert!(outcome.conflicts.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn trailing_periods_are_stripped_from_retained_text() {
        let items = vec![candidate(0, 1, "hello.", "hello", 5.0, vec![1.0, 0.0])];
        let outcome = dedupe(&items, 0.7, 0.3).unwrap();
        assert_eq!(outcome.retained[0].text, "hello");
    }

    #[test]
    fn replaced_slot_keeps_comparing_against_displaced_embedding() {
        // e0 and e1 sit close enough (cos ~0.75) for B1 to match and replace
        // B0's slot. e2 sits close to e0 (cos ~0.87) but far from e1 (cos
        // ~0.32, below threshold). If the slot's embedding were updated to
        // e1 on replace, B2 would fail to match and start a new retained
        // bullet; since the slot keeps e0, B2 matches and lands as a
        // conflict on the single retained bullet instead.
        let e0 = vec![1.0, 0.0];
        let e1 = vec![0.75, 0.661_438];
        let e2 = vec![0.866_025, -0.5];
        let items = vec![
            candidate(0, 1, "cat", "cat", 3.0, e0),
            candidate(1, 1, "cats", "cat", 4.0, e1),
            candidate(2, 1, "cat", "cat", 3.0, e2),
        ];
        let outcome = dedupe(&items, 0.7, 0.3).unwrap();
        assert_eq!(outcome.retained.len(), 1);
        assert_eq!(outcome.retained[0].text, "cats");
        assert_eq!(outcome.conflicts[0].len(), 2);
    }

    #[test]
    fn conservation_across_retained_and_conflicts() {
        let items = vec![
            candidate(0, 1, "x", "x", 1.0, vec![1.0, 0.0]),
            candidate(1, 1, "x", "x", 1.0, vec![1.0, 0.0]),
            candidate(2, 1, "y", "y", 1.0, vec![0.0, 1.0]),
        ];
        let outcome = dedupe(&items, 0.7, 0.3).unwrap();
        let total: usize = outcome.retained.len() + outcome.conflicts.iter().map(|c| c.len()).sum::<usize>();
        assert_eq!(total, items.len());
    }
}
