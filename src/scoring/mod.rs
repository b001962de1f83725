//! Transcription scoring: tokenization, set-match percentage, positional diff

pub mod alignment;
pub mod equivalence;
pub mod normalize;
pub mod similarity;

use serde::{Deserialize, Serialize};

pub use alignment::{
    compute_alignment_entries, AlignmentEntry, EntryKind, DEFAULT_MISTAKE_THRESHOLD,
};
pub use equivalence::canonicalize_tokens;
pub use normalize::{normalize, tokenize};
pub use similarity::compute_similarity_percent;

/// Result of scoring a user transcription against a reference transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Classified tokens for the colored rendering
    pub entries: Vec<AlignmentEntry>,
    /// Matched-token percentage over the larger side, 2 decimal places
    #[serde(rename = "similarityPercent")]
    pub similarity_percent: f64,
}

/// Score a user transcription against a reference transcript.
///
/// Never fails for string input; empty strings are valid and yield a
/// degenerate result. Both sides are canonicalized first (contractions
/// expanded, digits spelled out) so equivalent wordings match in both
/// schemes. The percentage uses set matching and the entries use a
/// positional diff; the two schemes are intentionally independent (see
/// DESIGN.md) and may disagree on borderline input.
pub fn score(user_text: &str, reference_text: &str) -> ScoreResult {
    score_with_threshold(user_text, reference_text, DEFAULT_MISTAKE_THRESHOLD)
}

/// `score` with a caller-supplied near-miss threshold
pub fn score_with_threshold(
    user_text: &str,
    reference_text: &str,
    mistake_threshold: f64,
) -> ScoreResult {
    let user_tokens = canonicalize_tokens(&tokenize(user_text));
    let reference_tokens = canonicalize_tokens(&tokenize(reference_text));

    ScoreResult {
        entries: compute_alignment_entries(&user_tokens, &reference_tokens, mistake_threshold),
        similarity_percent: compute_similarity_percent(&user_tokens, &reference_tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_score_zero() {
        let result = score("", "");
        assert_eq!(result.similarity_percent, 0.0);
        assert!(result.entries.is_empty());
    }

    #[test]
    fn test_identical_text_is_perfect() {
        let result = score("hello world", "hello world");
        assert_eq!(result.similarity_percent, 100.0);
        assert!(result.entries.iter().all(|e| e.kind == EntryKind::Correct));
    }

    #[test]
    fn test_one_of_two_matches() {
        let result = score("hello there", "hello world");
        assert_eq!(result.similarity_percent, 50.0);
    }

    #[test]
    fn test_punctuation_and_case_do_not_matter() {
        let result = score("Hello, World!", "hello world");
        assert_eq!(result.similarity_percent, 100.0);
    }

    #[test]
    fn test_contractions_count_as_correct() {
        let result = score("don't stop", "do not stop");
        assert_eq!(result.similarity_percent, 100.0);
        assert!(result.entries.iter().all(|e| e.kind == EntryKind::Correct));
    }

    #[test]
    fn test_digits_match_spelled_out_numbers() {
        let result = score("i saw 2 dogs", "i saw two dogs");
        assert_eq!(result.similarity_percent, 100.0);
        assert!(result.entries.iter().all(|e| e.kind == EntryKind::Correct));
    }

    #[test]
    fn test_deterministic() {
        let a = score("the quick brown fox fox", "the quick brown fox jumps");
        let b = score("the quick brown fox fox", "the quick brown fox jumps");
        assert_eq!(a.similarity_percent, b.similarity_percent);
        assert_eq!(a.entries, b.entries);
    }

    #[test]
    fn test_empty_user_text_lists_reference_as_missing() {
        let result = score("", "two words");
        assert_eq!(result.similarity_percent, 0.0);
        assert_eq!(result.entries.len(), 2);
        assert!(result.entries.iter().all(|e| e.kind == EntryKind::Missing));
    }

    #[test]
    fn test_score_result_wire_shape() {
        let json = serde_json::to_value(score("hi", "hi")).unwrap();
        assert_eq!(json["similarityPercent"], 100.0);
        assert_eq!(json["entries"][0]["type"], "correct");
    }
}
