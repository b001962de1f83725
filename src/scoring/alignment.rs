//! Positional diff between user and reference token sequences

use serde::{Deserialize, Serialize};

/// Classification of one rendered comparison unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// User token matches the reference at this position
    Correct,
    /// Near-miss: same position, small spelling deviation
    Mistake,
    /// User token with no acceptable reference counterpart
    Wrong,
    /// Reference token the user never typed
    Missing,
}

/// One classified unit of the comparison; a sequence of these joined by
/// spaces reconstructs a color-codable rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentEntry {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl AlignmentEntry {
    fn new(text: &str, kind: EntryKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
        }
    }
}

/// Ratio threshold above which a positional mismatch counts as a near-miss
pub const DEFAULT_MISTAKE_THRESHOLD: f64 = 0.75;

/// Order-sensitive similarity between two words: `2*M / (len_a + len_b)`
/// where `M` is the length of their longest common character subsequence.
/// 1.0 for equal words, 0.0 for disjoint ones; anagrams score well below
/// 1.0 because character order matters.
fn match_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    // Longest common subsequence length, two-row dynamic programming
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for ca in &a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    let common = prev[b.len()];

    2.0 * common as f64 / (a.len() + b.len()) as f64
}

/// Classify reference and user tokens positionally.
///
/// Walks both sequences in lockstep: equal tokens are `correct`, near-misses
/// (ratio >= threshold) are `mistake`, anything else emits the user token as
/// `wrong` plus the displaced reference token as `missing`. Leftover user
/// tokens are `wrong`, leftover reference tokens are `missing`.
///
/// This is an independent computation from the set-match percentage; the two
/// are not guaranteed to agree (see DESIGN.md).
pub fn compute_alignment_entries(
    user_tokens: &[String],
    reference_tokens: &[String],
    mistake_threshold: f64,
) -> Vec<AlignmentEntry> {
    let mut entries = Vec::new();
    let mut user_idx = 0;
    let mut ref_idx = 0;

    while user_idx < user_tokens.len() && ref_idx < reference_tokens.len() {
        let user = &user_tokens[user_idx];
        let reference = &reference_tokens[ref_idx];

        if user == reference {
            entries.push(AlignmentEntry::new(user, EntryKind::Correct));
        } else if match_ratio(user, reference) >= mistake_threshold {
            entries.push(AlignmentEntry::new(user, EntryKind::Mistake));
        } else {
            entries.push(AlignmentEntry::new(user, EntryKind::Wrong));
            entries.push(AlignmentEntry::new(reference, EntryKind::Missing));
        }
        user_idx += 1;
        ref_idx += 1;
    }

    while user_idx < user_tokens.len() {
        entries.push(AlignmentEntry::new(&user_tokens[user_idx], EntryKind::Wrong));
        user_idx += 1;
    }

    while ref_idx < reference_tokens.len() {
        entries.push(AlignmentEntry::new(
            &reference_tokens[ref_idx],
            EntryKind::Missing,
        ));
        ref_idx += 1;
    }

    entries
}
