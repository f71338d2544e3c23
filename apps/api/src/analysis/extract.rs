//! Skill extraction — whole-word matching of lexicon terms against normalized text.

use crate::analysis::normalize::normalize_tokens;

/// Returns the candidates found in `text`, preserving candidate order.
///
/// Each candidate phrase is normalized with the same pipeline as the text and
/// matched as a contiguous token run, so matches are boundary-anchored:
/// "java" never matches inside "javascript", and "machine learning" must
/// appear as a phrase, not as a bag of words. Duplicates in the candidate
/// list are kept; candidates whose normalized form is empty never match.
pub fn extract_skills<S: AsRef<str>>(text: &str, candidates: &[S]) -> Vec<String> {
    let tokens = normalize_tokens(text);

    candidates
        .iter()
        .filter(|candidate| {
            let phrase = normalize_tokens(candidate.as_ref());
            !phrase.is_empty() && contains_token_run(&tokens, &phrase)
        })
        .map(|candidate| candidate.as_ref().to_string())
        .collect()
}

/// True iff `phrase` appears as a contiguous run within `tokens`.
fn contains_token_run(tokens: &[String], phrase: &[String]) -> bool {
    if phrase.is_empty() || tokens.len() < phrase.len() {
        return false;
    }
    tokens.windows(phrase.len()).any(|window| window == phrase)
}
