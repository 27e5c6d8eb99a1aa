//! Dashes, quotes, ellipses and trailing whitespace.
//!
//! Order matters here: opening quotes are classified before closing ones,
//! and trailing whitespace is stripped last so it cannot interfere with em
//! dashes at line ends.

use super::{Category, Rule};
use once_cell::sync::Lazy;
use regex::Regex;

/// True for a hyphen or any character `\d` matches.
pub(crate) fn is_digit_or_hyphen(c: char) -> bool {
    static DIGIT_OR_HYPHEN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[\d-]$").expect("Valid digit class regex"));
    DIGIT_OR_HYPHEN.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Punctuation rules, in application order.
pub fn rules() -> Vec<Rule> {
    let rule = |name, pattern: &str, replacement| {
        Rule::new(name, Category::Punctuation, pattern, replacement)
            .expect("Valid punctuation regex")
    };

    vec![
        // Two or three hyphens between words, or before a line break
        rule("em-dash", r"\b---?(\b|\n)", "—${1}"),
        // Numeric range. Hyphens or digits on either side mean a date such as
        // 2024-12-26, which is left alone.
        rule("en-dash", r"(\d+)-(\d+)", "${1}–${2}")
            .not_preceded_by(is_digit_or_hyphen)
            .not_followed_by(is_digit_or_hyphen),
        rule("open-quote", r#""\b"#, "“"),
        rule("close-quote", r#"(\b[.?,!]?)""#, "${1}”"),
        rule("ellipsis", r"\.\.\.", "…"),
        rule("trailing-whitespace", r"[ \t]+(\n|$)", "${1}"),
    ]
}
