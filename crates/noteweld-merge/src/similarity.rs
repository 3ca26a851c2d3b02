//! Vector similarity and lexical overlap.

use std::collections::HashSet;

/// Inner product of two vectors. For unit-norm vectors this equals cosine
/// similarity. Returns 0.0 for mismatched or empty lengths.
pub fn inner_product(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| *x as f64 * *y as f64)
        .sum()
}

/// Jaccard-like lexical overlap ratio over whitespace-split word sets:
/// `|W1 ∩ W2| / max(|W1|, |W2|)`, with an empty-set guard returning 0.
pub fn overlap_ratio(a: &str, b: &str) -> f64 {
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    let denom = words_a.len().max(words_b.len());
    if denom == 0 {
        return 0.0;
    }

    let overlap = words_a.intersection(&words_b).count();
    overlap as f64 / denom as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_inner_product_one() {
        let v = vec![0.6, 0.8];
        let sim = inner_product(&v, &v);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_have_inner_product_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!((inner_product(&a, &b)).abs() < 1e-9);
    }

    #[test]
    fn mismatched_lengths_return_zero() {
        assert_eq!(inner_product(&[1.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn empty_vectors_return_zero() {
        assert_eq!(inner_product(&[], &[]), 0.0);
    }

    #[test]
    fn identical_word_sets_have_overlap_one() {
        assert_eq!(overlap_ratio("cat sat mat", "cat sat mat"), 1.0);
    }

    #[test]
    fn disjoint_word_sets_have_overlap_zero() {
        assert_eq!(overlap_ratio("cat sat mat", "dog ran far"), 0.0);
    }

    #[test]
    fn partial_overlap_uses_max_denominator() {
        // W1 = {cat, sat}, W2 = {cat, sat, mat} -> intersection 2, max(2,3) = 3
        let ratio = overlap_ratio("cat sat", "cat sat mat");
        assert!((ratio - (2.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn both_empty_returns_zero() {
        assert_eq!(overlap_ratio("", ""), 0.0);
    }
}
