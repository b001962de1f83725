//! Token equivalences: contractions and spelled-out numbers
//!
//! A typist who writes "don't" for a reference "do not", or "3" for
//! "three", has heard the audio correctly. Both token sequences are
//! rewritten to a canonical form before comparison so these pairs count as
//! matches in both scoring schemes. Extend the table to cover new
//! equivalences; the rewrite logic never changes.

/// Contractions and their expansions, in normalized (lowercased,
/// punctuation-stripped) form. Ambiguous contractions canonicalize to the
/// reading used in dictation contexts ("he's" as "he is").
const CONTRACTIONS: &[(&str, &str)] = &[
    ("i'm", "i am"),
    ("you're", "you are"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("it's", "it is"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("i've", "i have"),
    ("you've", "you have"),
    ("we've", "we have"),
    ("they've", "they have"),
    ("i'll", "i will"),
    ("you'll", "you will"),
    ("he'll", "he will"),
    ("she'll", "she will"),
    ("it'll", "it will"),
    ("we'll", "we will"),
    ("they'll", "they will"),
    ("can't", "cannot"),
    ("won't", "will not"),
    ("wouldn't", "would not"),
    ("shouldn't", "should not"),
    ("couldn't", "could not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
];

const ONES: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: &[&str] = &[
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: &[&str] = &[
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spelled-out form of 1..=100, matching what a typed number word looks
/// like after normalization (hyphens are stripped, so 21 is "twentyone")
fn number_word(n: u32) -> Option<String> {
    match n {
        1..=9 => Some(ONES[(n - 1) as usize].to_string()),
        10..=19 => Some(TEENS[(n - 10) as usize].to_string()),
        20..=99 => {
            let tens = TENS[(n / 10 - 2) as usize];
            match n % 10 {
                0 => Some(tens.to_string()),
                ones => Some(format!("{}{}", tens, ONES[(ones - 1) as usize])),
            }
        }
        100 => Some("one hundred".to_string()),
        _ => None,
    }
}

/// Canonical replacement for a single normalized token, if one applies
fn expand(token: &str) -> Option<String> {
    if let Some((_, expansion)) = CONTRACTIONS.iter().find(|(short, _)| *short == token) {
        return Some(expansion.to_string());
    }

    if let Ok(n) = token.parse::<u32>() {
        return number_word(n);
    }

    None
}

/// Rewrite a normalized token sequence to canonical form: contractions
/// become their expansions and digit tokens become their spelled-out words.
/// Expansions may grow the sequence ("don't" becomes two tokens).
pub fn canonicalize_tokens(tokens: &[String]) -> Vec<String> {
    let mut canonical = Vec::with_capacity(tokens.len());

    for token in tokens {
        match expand(token) {
            Some(expansion) => {
                canonical.extend(expansion.split(' ').map(|w| w.to_string()));
            }
            None => canonical.push(token.clone()),
        }
    }

    canonical
}
