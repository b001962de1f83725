//! Set-match similarity percentage

/// Fraction of user tokens found in the reference, over the larger side,
/// as a percentage rounded to 2 decimal places.
///
/// The reference acts as a multiset: each user token consumes at most one
/// matching occurrence (first-found), so duplicated user words cannot
/// over-count a single reference word. Both sides empty yields 0.
pub fn compute_similarity_percent(user_tokens: &[String], reference_tokens: &[String]) -> f64 {
    let denominator = user_tokens.len().max(reference_tokens.len());
    if denominator == 0 {
        return 0.0;
    }

    let mut pool: Vec<&String> = reference_tokens.iter().collect();
    let mut matches = 0usize;

    for token in user_tokens {
        if let Some(pos) = pool.iter().position(|candidate| *candidate == token) {
            pool.remove(pos);
            matches += 1;
        }
    }

    let percent = matches as f64 / denominator as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identical_is_100() {
        let t = tokens(&["hello", "world"]);
        assert_eq!(compute_similarity_percent(&t, &t), 100.0);
    }

    #[test]
    fn test_half_match_is_50() {
        assert_eq!(
            compute_similarity_percent(&tokens(&["hello", "there"]), &tokens(&["hello", "world"])),
            50.0
        );
    }

    #[test]
    fn test_both_empty_is_0() {
        assert_eq!(compute_similarity_percent(&[], &[]), 0.0);
        assert_eq!(compute_similarity_percent(&tokens(&["word"]), &[]), 0.0);
        assert_eq!(compute_similarity_percent(&[], &tokens(&["word"])), 0.0);
    }

    #[test]
    fn test_duplicate_tokens_cannot_double_count() {
        // "cat cat" against "cat": one match over max(2, 1) = 50%
        assert_eq!(
            compute_similarity_percent(&tokens(&["cat", "cat"]), &tokens(&["cat"])),
            50.0
        );
    }

    #[test]
    fn test_denominator_is_larger_side() {
        // 1 match over max(1, 3)
        assert_eq!(
            compute_similarity_percent(&tokens(&["a"]), &tokens(&["a", "b", "c"])),
            33.33
        );
    }

    #[test]
    fn test_order_does_not_affect_percentage() {
        let reference = tokens(&["the", "quick", "brown", "fox"]);
        let shuffled = tokens(&["fox", "brown", "quick", "the"]);
        assert_eq!(compute_similarity_percent(&shuffled, &reference), 100.0);
    }
}
