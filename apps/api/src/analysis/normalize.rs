//! Text normalization — lowercase, strip punctuation, tokenize, drop stopwords.
//!
//! Used by the skill extractor only. The similarity scorer tokenizes raw text
//! itself so its weighting reflects true term frequency.

/// Common English stopwords filtered during normalization.
///
/// Contraction fragments appear in their punctuation-stripped form ("dont",
/// "isnt") because the character filter runs before tokenization.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "arent", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "cant", "could", "couldnt", "did", "didnt", "do", "does", "doesnt", "doing",
    "dont", "down", "during", "each", "few", "for", "from", "further", "had", "hadnt", "has",
    "hasnt", "have", "havent", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "isnt", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "shouldnt", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "wasnt", "we", "were", "werent", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "wont", "would", "wouldnt",
    "you", "your", "yours", "yourself", "yourselves",
];

fn is_stopword(token: &str) -> bool {
    ENGLISH_STOPWORDS.contains(&token)
}

/// Normalizes raw text: lowercase, keep only alphanumeric and whitespace
/// characters, split into word tokens, drop stopwords, rejoin with single
/// spaces. Empty or whitespace-only input yields an empty string; never fails.
pub fn normalize(text: &str) -> String {
    // Punctuation is dropped, not replaced: "ci/cd" -> "cicd", "scikit-learn" -> "scikitlearn".
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .filter(|t| !is_stopword(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Token view of [`normalize`], used by the skill extractor for
/// boundary-anchored phrase matching.
pub fn normalize_tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        let out = normalize("Hello, World! This is C++ & Rust.");
        assert_eq!(out, "hello world c rust");
    }

    #[test]
    fn test_normalize_drops_stopwords() {
        let out = normalize("the quick brown fox is on the move");
        assert!(!out.contains("the"));
        assert!(!out.contains("is"));
        assert!(!out.contains("on"));
        assert!(out.contains("quick"));
        assert!(out.contains("fox"));
    }

    #[test]
    fn test_normalize_empty_and_whitespace_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_normalize_contains_no_punctuation() {
        let out = normalize("résumé — skills: Python, SQL; 5+ years (minimum)!");
        assert!(out
            .chars()
            .all(|c| c.is_alphanumeric() || c.is_whitespace()));
    }

    #[test]
    fn test_normalize_contains_no_stopword_tokens() {
        let out = normalize("We are looking for an engineer who has shipped products");
        for token in out.split_whitespace() {
            assert!(
                !ENGLISH_STOPWORDS.contains(&token),
                "stopword {token:?} survived normalization"
            );
        }
    }

    #[test]
    fn test_normalize_keeps_hyphenated_terms_joined() {
        assert_eq!(normalize("scikit-learn"), "scikitlearn");
        assert_eq!(normalize("CI/CD pipelines"), "cicd pipelines");
    }

    #[test]
    fn test_normalize_handles_unicode() {
        // Unicode alphanumerics survive, symbols do not
        let out = normalize("müller 東京 ©2024");
        assert_eq!(out, "müller 東京 2024");
    }

    #[test]
    fn test_normalize_tokens_only_stopwords() {
        assert!(normalize_tokens("the and or but is").is_empty());
    }
}
