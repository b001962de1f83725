//! Removal of bracketed noise annotations from caption text

use regex::Regex;

/// Noise annotations that caption tracks embed as bracketed markers.
/// Extend this list to cover new categories; the pattern is derived from it.
const NOISE_WORDS: &[&str] = &[
    "music",
    "applause",
    "laughter",
    "noise",
    "crowd cheering",
    "cheering",
    "silence",
];

/// Strips bracketed noise markers like `[Music]` or `[ APPLAUSE ]` from
/// caption text, case-insensitively and tolerating internal whitespace.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    pattern: Regex,
}

impl NoiseFilter {
    pub fn new() -> Self {
        // NOISE_WORDS contains no regex metacharacters, so the alternation
        // can be built by plain joining
        let alternation = NOISE_WORDS.join("|");
        let pattern = Regex::new(&format!(r"(?i)\[\s*({})\s*\]", alternation))
            .unwrap_or_else(|e| panic!("invalid noise pattern: {}", e));

        Self { pattern }
    }

    /// Remove all noise markers and trim the ends. Idempotent: stripping an
    /// already-stripped string is a no-op.
    pub fn strip(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").trim().to_string()
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_case_insensitively_with_internal_whitespace() {
        let filter = NoiseFilter::new();
        let cleaned = filter.strip("Hello [Music] world [ APPLAUSE ] today");
        assert_eq!(cleaned, "Hello  world  today");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let filter = NoiseFilter::new();
        let once = filter.strip("[music] so [ Laughter ] it goes [CROWD CHEERING]");
        let twice = filter.strip(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_markers_survive() {
        let filter = NoiseFilter::new();
        assert_eq!(filter.strip("[Spanish] hola"), "[Spanish] hola");
        assert_eq!(filter.strip("a [coughing] b"), "a [coughing] b");
    }

    #[test]
    fn test_marker_only_input_strips_to_empty() {
        let filter = NoiseFilter::new();
        assert_eq!(filter.strip("[Music]"), "");
        assert_eq!(filter.strip("  [ silence ]  "), "");
    }
}
