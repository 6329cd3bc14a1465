use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapses every run of whitespace into a single space and trims both ends.
pub fn normalize(input: &str) -> String {
    WHITESPACES.replace_all(input.trim(), " ").into_owned()
}
