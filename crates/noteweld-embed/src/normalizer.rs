//! Default `TextNormalizer`: lowercase, alphanumeric tokenization, stopword
//! removal, and a light suffix-stripping stand-in for lemmatization. No
//! external corpus or model — deterministic and dependency-free.

use noteweld_core::TextNormalizer;

/// A small fixed English stopword set, the closed-class words that carry no
/// content signal for bullet matching.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above", "below",
    "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again", "further",
    "then", "once", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "it", "its", "this", "that", "these", "those", "i",
    "you", "he", "she", "we", "they", "them", "his", "her", "their", "our", "your", "as", "not",
    "no", "so", "than", "too", "very", "can", "will", "just", "should", "would", "could", "what",
    "which", "who", "whom", "all", "each", "such", "only", "own", "same",
];

/// Reduce a lowercase word to an approximate lemma by stripping common
/// inflectional suffixes. Not a real morphological analyzer — a deterministic
/// stand-in that collapses the common plural/verb-inflection cases.
fn lemmatize(word: &str) -> String {
    if word.len() > 4 && word.ends_with("ies") {
        format!("{}y", &word[..word.len() - 3])
    } else if word.len() > 4 && (word.ends_with("sses") || word.ends_with("xes") || word.ends_with("ches") || word.ends_with("shes")) {
        word[..word.len() - 2].to_string()
    } else if word.len() > 3 && word.ends_with("ing") && !word.ends_with("thing") {
        word[..word.len() - 3].to_string()
    } else if word.len() > 3 && word.ends_with("ed") {
        word[..word.len() - 2].to_string()
    } else if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in lowered.chars() {
        if c.is_alphanumeric() {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Deterministic, dependency-free default normalizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNormalizer;

impl DefaultNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for DefaultNormalizer {
    fn normalize_bullet(&self, text: &str) -> (String, f64) {
        let kept: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|w| !STOPWORDS.contains(&w.as_str()))
            .collect();

        // Averaged over the surviving surface forms, before lemmatization:
        // two bullets that lemmatize to the same stem (e.g. "cat"/"cats")
        // must still carry distinct average-word-length signals for the
        // deduplicator's replacement tie-break to have anything to compare.
        let avg_word_length = if kept.is_empty() {
            0.0
        } else {
            kept.iter().map(|w| w.len()).sum::<usize>() as f64 / kept.len() as f64
        };

        let lemmatized: Vec<String> = kept.iter().map(|w| lemmatize(w)).collect();
        (lemmatized.join(" "), avg_word_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lowercases_and_drops_stopwords() {
        let n = DefaultNormalizer::new();
        let (normalized, _) = n.normalize_bullet("The Cat sat on the Mat");
        assert_eq!(normalized, "cat sat mat");
    }

    #[test]
    fn empty_input_yields_zero_avg_length() {
        let n = DefaultNormalizer::new();
        let (normalized, avg) = n.normalize_bullet("the and of");
        assert_eq!(normalized, "");
        assert_eq!(avg, 0.0);
    }

    #[test]
    fn singular_and_plural_forms_normalize_equal() {
        let n = DefaultNormalizer::new();
        let (cat, _) = n.normalize_bullet("cat");
        let (cats, _) = n.normalize_bullet("cats");
        assert_eq!(cat, cats);
    }

    #[test]
    fn idempotent_under_second_application() {
        let n = DefaultNormalizer::new();
        let (once, _) = n.normalize_bullet("The cats are running quickly");
        let (twice, _) = n.normalize_bullet(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn header_normalization_only_lowercases_and_trims() {
        let n = DefaultNormalizer::new();
        assert_eq!(n.normalize_header("  The Introduction  "), "the introduction");
    }

    proptest! {
        #[test]
        fn normalize_bullet_is_idempotent_on_arbitrary_ascii_words(
            words in prop::collection::vec("[a-zA-Z]{1,12}", 0..10)
        ) {
            let n = DefaultNormalizer::new();
            let sentence = words.join(" ");
            let (once, _) = n.normalize_bullet(&sentence);
            let (twice, _) = n.normalize_bullet(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
