//! Loanword spellings.
//!
//! Not meant to be exhaustive; dictionary checkers cover general spelling.

use super::{Category, Rule};

/// Modifier letter turned comma (U+02BB), the proper 'okina.
pub const OKINA: char = '\u{02BB}';

/// Spelling rules, in application order.
pub fn rules() -> Vec<Rule> {
    vec![Rule::new("hawaii", Category::Spelling, r"\bHawai'?i\b", "Hawaiʻi")
        .expect("Valid spelling regex")]
}
