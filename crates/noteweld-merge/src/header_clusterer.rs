//! Groups headers across all notes into equivalence classes by pairwise
//! cosine-similarity thresholding.

use noteweld_core::{Header, HeaderCluster, HeaderConflict};

use crate::similarity::{inner_product, overlap_ratio};
use crate::union_find::UnionFind;

/// Build an N×N cosine-similarity matrix over `embeddings`, union any pair
/// at or above `threshold`, and return one `HeaderCluster` per resulting
/// group. Clusters are ordered by ascending accepted `header_id`; within a
/// cluster, conflicts are ordered by ascending member `header_id`.
///
/// `headers` and `embeddings` must be parallel slices (same length, same
/// order). Cosine similarity is not transitive, so a tight-threshold chain
/// can connect headers that are not pairwise similar; this is the accepted
/// single-link clustering design — see module docs for the chaining caveat.
pub fn cluster_headers(headers: &[Header], embeddings: &[Vec<f32>], threshold: f64) -> Vec<HeaderCluster> {
    assert_eq!(headers.len(), embeddings.len());
    let n = headers.len();

    let mut uf = UnionFind::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if inner_product(&embeddings[i], &embeddings[j]) >= threshold {
                uf.union(i, j);
            }
        }
    }

    let mut clusters: Vec<HeaderCluster> = uf
        .groups()
        .into_iter()
        .map(|mut member_idxs| {
            member_idxs.sort_by_key(|&i| headers[i].header_id);
            let accepted_idx = member_idxs[0];
            let accepted_header = headers[accepted_idx].clone();
            let members: Vec<Header> = member_idxs.iter().map(|&i| headers[i].clone()).collect();

            let conflicts = member_idxs[1..]
                .iter()
                .map(|&i| HeaderConflict {
                    note_id: headers[i].note_num,
                    header_id: headers[i].header_id,
                    header_name: headers[i].header_name.clone(),
                    similarity: inner_product(&embeddings[accepted_idx], &embeddings[i]),
                    overlap_ratio: overlap_ratio(
                        &headers[accepted_idx].header_name.to_lowercase(),
                        &headers[i].header_name.to_lowercase(),
                    ),
                })
                .collect();

            HeaderCluster {
                accepted_header,
                members,
                conflicts,
            }
        })
        .collect();

    clusters.sort_by_key(|c| c.accepted_header.header_id);
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(id: u64, note: u64, name: &str) -> Header {
        Header {
            header_id: id,
            note_num: note,
            header_name: name.to_string(),
            bullets: vec![],
        }
    }

    #[test]
    fn dissimilar_headers_stay_in_separate_clusters() {
        let headers = vec![header(0, 0, "Introduction"), header(1, 1, "Conclusion")];
        let embeddings = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let clusters = cluster_headers(&headers, &embeddings, 0.8);
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn similar_headers_cluster_with_earliest_as_accepted() {
        let headers = vec![header(3, 1, "Intro"), header(0, 0, "Introduction")];
        let embeddings = vec![vec![1.0, 0.0], vec![0.99, 0.14106735]];
        let clusters = cluster_headers(&headers, &embeddings, 0.8);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].accepted_header.header_id, 0);
        assert_eq!(clusters[0].conflicts.len(), 1);
        assert_eq!(clusters[0].conflicts[0].header_id, 3);
    }

    #[test]
    fn transitive_chain_merges_via_union_find() {
        // h1-h2 sim 0.82, h2-h3 sim 0.82, h1-h3 sim 0.6 (below threshold directly)
        // but union-find still merges all three through h2.
        let headers = vec![
            header(0, 0, "h1"),
            header(1, 1, "h2"),
            header(2, 2, "h3"),
        ];
        // Vectors chosen so pairwise cosine similarities approximate the above.
        let e1 = vec![1.0, 0.0];
        let e2 = vec![0.82, (1.0f64 - 0.82 * 0.82).sqrt() as f32];
        let e3 = vec![0.45, (1.0f64 - 0.45 * 0.45).sqrt() as f32];
        let clusters = cluster_headers(&headers, &[e1, e2, e3], 0.8);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].members.len(), 3);
    }

    #[test]
    fn clusters_are_ordered_by_accepted_header_id() {
        let headers = vec![header(5, 0, "Z"), header(1, 1, "A")];
        let embeddings = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let clusters = cluster_headers(&headers, &embeddings, 0.99);
        assert_eq!(clusters[0].accepted_header.header_id, 1);
        assert_eq!(clusters[1].accepted_header.header_id, 5);
    }
}
