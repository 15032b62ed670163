use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("static regex"));

/// Tokens of this many characters or fewer are dropped (articles, prepositions, bare digits).
pub const MAX_NOISE_TOKEN_CHARS: usize = 2;

/// Lowercases `text` and splits it on runs of non-word characters.
///
/// Tokens of two characters or fewer are dropped. Order and duplicates are preserved.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .split(&lowered)
        .filter(|token| token.chars().count() > MAX_NOISE_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Lowercase, trim and collapse internal whitespace; used for whole-text equality checks.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
