//! Token normalization shared by both scoring schemes

/// Punctuation stripped during normalization
const PUNCTUATION: &str = ".,/#!$%^&*;:{}=-_`~()";

/// Normalize text for comparison: lowercase, strip punctuation, collapse
/// whitespace runs to single spaces, trim. Pure and idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered.chars().filter(|c| !PUNCTUATION.contains(*c)).collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into normalized word tokens. Empty or whitespace-only input
/// yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }
    normalized.split(' ').map(|w| w.to_string()).collect()
}
