//! Contractions written with a straight apostrophe.
//!
//! Each rule swaps the `'` for a right single quotation mark (`’`). The
//! suffixes are mutually exclusive, so any apostrophe is rewritten by at
//! most one rule.

use super::{Category, Rule};

/// Contraction rules, in application order.
pub fn rules() -> Vec<Rule> {
    [
        ("negation", r"(\b[a-zA-Z]+n)'(t\b)", "${1}’${2}"),
        ("have", r"(\b[a-zA-Z]+)'(ve\b)", "${1}’${2}"),
        ("is-has", r"(\b[a-zA-Z]+)'(s\b)", "${1}’${2}"),
        ("would-had", r"(\b[a-zA-Z]+)'(d\b)", "${1}’${2}"),
        ("will", r"(\b[a-zA-Z]+)'(ll\b)", "${1}’${2}"),
        ("i-am", r"\bI'm\b", "I’m"),
        ("madam", r"(\b[Mm]a)'(am\b)", "${1}’${2}"),
        ("oclock", r"\bo'clock\b", "o’clock"),
    ]
    .into_iter()
    .map(|(name, pattern, replacement)| {
        Rule::new(name, Category::Contraction, pattern, replacement)
            .expect("Valid contraction regex")
    })
    .collect()
}
