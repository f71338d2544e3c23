//! Similarity scoring — TF-IDF cosine similarity between two text blobs.
//!
//! The vector space is built from exactly the two input documents, so the
//! score is deterministic for a fixed input pair: no external corpus state,
//! no fitted vocabulary carried between calls.

use std::collections::BTreeMap;

/// Per-term document frequency can only be 1 or 2 with a two-document corpus;
/// smoothed IDF (`ln((1+n)/(1+df)) + 1`) keeps shared vocabulary weighted,
/// so a text compared with itself scores the maximum.
const DOCUMENT_COUNT: f64 = 2.0;

/// Cosine similarity between two texts in TF-IDF space, scaled to 0–100
/// and rounded to two decimal places.
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    similarity_rounded(text_a, text_b, 2)
}

/// Same as [`similarity`] with a caller-chosen number of decimal places.
pub fn similarity_rounded(text_a: &str, text_b: &str, decimals: u32) -> f64 {
    round_to(tfidf_cosine(text_a, text_b) * 100.0, decimals)
}

/// Raw cosine in [0, 1]. Degenerate input (either side with no terms, or a
/// zero-norm vector) yields 0.0 rather than an error.
fn tfidf_cosine(text_a: &str, text_b: &str) -> f64 {
    let terms_a = term_counts(text_a);
    let terms_b = term_counts(text_b);

    if terms_a.is_empty() || terms_b.is_empty() {
        return 0.0;
    }

    // Vocabulary over both documents; BTreeMap keeps term order stable.
    let mut vocabulary: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for (term, count) in &terms_a {
        vocabulary.entry(term.as_str()).or_default().0 = *count as f64;
    }
    for (term, count) in &terms_b {
        vocabulary.entry(term.as_str()).or_default().1 = *count as f64;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (tf_a, tf_b) in vocabulary.values() {
        let df = match (*tf_a > 0.0, *tf_b > 0.0) {
            (true, true) => 2.0,
            _ => 1.0,
        };
        let idf = ((1.0 + DOCUMENT_COUNT) / (1.0 + df)).ln() + 1.0;

        let weight_a = tf_a * idf;
        let weight_b = tf_b * idf;

        dot += weight_a * weight_b;
        norm_a += weight_a * weight_a;
        norm_b += weight_b * weight_b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Term frequencies for one document: lowercased, split on non-alphanumeric,
/// terms shorter than two characters ignored. No stopword filtering here —
/// the scorer weights raw text so term frequency stays honest.
fn term_counts(text: &str) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for term in text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
    {
        *counts.entry(term.to_string()).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_maximum() {
        let text = "Senior Rust engineer building distributed systems with tokio";
        assert_eq!(similarity(text, text), 100.0);
    }

    #[test]
    fn test_disjoint_texts_score_low() {
        let score = similarity("apples oranges bananas", "kubernetes docker terraform");
        // Disjoint vocabularies still share no terms; cosine is exactly zero
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_inputs_return_zero_not_error() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("", "some text here"), 0.0);
        assert_eq!(similarity("some text here", ""), 0.0);
    }

    #[test]
    fn test_punctuation_only_input_is_degenerate() {
        assert_eq!(similarity("!!! ??? ...", "--- ;;; :::"), 0.0);
    }

    #[test]
    fn test_single_char_terms_are_ignored() {
        // "a" and "i" fall below the two-character term floor on both sides
        assert_eq!(similarity("a i a i", "a i"), 0.0);
    }

    #[test]
    fn test_score_is_symmetric() {
        let a = "Python developer with SQL experience";
        let b = "Looking for a Python engineer who knows databases";
        assert_eq!(similarity(a, b), similarity(b, a));
    }

    #[test]
    fn test_score_is_deterministic() {
        let a = "data pipelines in airflow and spark";
        let b = "spark streaming and batch pipelines";
        let first = similarity(a, b);
        for _ in 0..5 {
            assert_eq!(similarity(a, b), first);
        }
    }

    #[test]
    fn test_score_is_bounded() {
        let a = "rust rust rust tokio axum serde";
        let b = "rust tokio";
        let score = similarity(a, b);
        assert!((0.0..=100.0).contains(&score), "score {score} out of range");
    }

    #[test]
    fn test_overlap_scores_between_extremes() {
        let score = similarity("python sql communication", "python leadership");
        assert!(score > 0.0 && score < 100.0, "score {score}");
    }

    #[test]
    fn test_rounding_respects_decimals() {
        let a = "alpha beta gamma delta";
        let b = "alpha beta epsilon zeta";
        let one_dp = similarity_rounded(a, b, 1);
        assert_eq!(round_to(one_dp, 1), one_dp);
    }

    #[test]
    fn test_round_to_two_places() {
        assert_eq!(round_to(66.66666, 2), 66.67);
        assert_eq!(round_to(50.0, 2), 50.0);
        assert_eq!(round_to(33.333, 1), 33.3);
    }
}
