//! Test fixtures: the stylized corpus of texts and their corrections.

/// A text, its expected correction and the expected issue count.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub before: &'static str,
    pub after: &'static str,
    pub count: usize,
}

const fn case(before: &'static str, after: &'static str, count: usize) -> Case {
    Case {
        before,
        after,
        count,
    }
}

/// Contractions written with straight apostrophes.
pub const CONTRACTIONS: &[Case] = &[
    case("this can't be right", "this can’t be right", 1),
    case("could've been", "could’ve been", 1),
    case("he's cooking", "he’s cooking", 1),
    case("I'd rather not", "I’d rather not", 1),
    case("what'll it take", "what’ll it take", 1),
    case(" I'm livid", " I’m livid", 1),
    case("yes ma'am", "yes ma’am", 1),
    case("Yes, Ma'am.", "Yes, Ma’am.", 1),
    case("thirteen o'clock", "thirteen o’clock", 1),
];

/// Loanword spellings.
pub const SPELLING: &[Case] = &[
    case("Hawaii", "Hawaiʻi", 1),
    case("Hawai'i", "Hawaiʻi", 1),
];

/// Dashes, quotes, ellipses and trailing whitespace.
pub const PUNCTUATION: &[Case] = &[
    case("One way--to em dash", "One way—to em dash", 1),
    case("Another---way", "Another—way", 1),
    case("Range: 25-28", "Range: 25–28", 1),
    case("2025-01-01", "2025-01-01", 0),
    case("Time for \"curly quotes\"", "Time for “curly quotes”", 2),
    case("Well...", "Well…", 1),
    case("Trailing whitespace    ", "Trailing whitespace", 1),
    case("Trailing whitespace    \n\n", "Trailing whitespace\n\n", 1),
    case("Trailing \n  whitespace\t\n", "Trailing\n  whitespace\n", 2),
];

/// Texts with more than one kind of issue.
pub const MIXED: &[Case] = &[
    case("Could've been  \nin Hawaii", "Could’ve been\nin Hawaiʻi", 3),
    case(
        "She said \"I can't--not today.\" \nIt's 9-5...",
        "She said “I can’t—not today.”\nIt’s 9–5…",
        8,
    ),
];

/// Every case in the corpus.
pub fn all_cases() -> impl Iterator<Item = &'static Case> {
    CONTRACTIONS
        .iter()
        .chain(SPELLING)
        .chain(PUNCTUATION)
        .chain(MIXED)
}
