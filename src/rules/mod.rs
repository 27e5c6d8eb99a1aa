//! Typographic rules and the ordered rule set.
//!
//! A [`Rule`] pairs a compiled pattern with a replacement template. Rules
//! are grouped into three categories but always applied as one flat,
//! ordered sequence: every rule sees the output of the rules before it.

pub mod contractions;
pub mod punctuation;
pub mod spelling;

use crate::error::{TypographyError, TypographyResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;

/// Logical grouping of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Straight apostrophes inside contractions
    Contraction,

    /// Loanword spellings
    Spelling,

    /// Dashes, quotes, ellipses and whitespace
    Punctuation,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contraction => write!(f, "contraction"),
            Self::Spelling => write!(f, "spelling"),
            Self::Punctuation => write!(f, "punctuation"),
        }
    }
}

/// Predicate over the character adjacent to a match.
pub type CharGuard = fn(char) -> bool;

/// A single pattern/replacement rule.
///
/// The replacement is a `regex` template: `${1}` refers to the first
/// capture group. `regex` has no lookaround, so a rule may carry guards on
/// the characters just outside a match instead. A candidate rejected by a
/// guard is skipped and the search resumes one character after its start.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    category: Category,
    pattern: Regex,
    replacement: &'static str,
    not_preceded_by: Option<CharGuard>,
    not_followed_by: Option<CharGuard>,
}

impl Rule {
    /// Compiles a new rule.
    pub fn new(
        name: &'static str,
        category: Category,
        pattern: &str,
        replacement: &'static str,
    ) -> TypographyResult<Self> {
        let pattern = Regex::new(pattern).map_err(|e| TypographyError::Pattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name,
            category,
            pattern,
            replacement,
            not_preceded_by: None,
            not_followed_by: None,
        })
    }

    /// Rejects matches whose preceding character satisfies `guard`.
    pub fn not_preceded_by(mut self, guard: CharGuard) -> Self {
        self.not_preceded_by = Some(guard);
        self
    }

    /// Rejects matches whose following character satisfies `guard`.
    pub fn not_followed_by(mut self, guard: CharGuard) -> Self {
        self.not_followed_by = Some(guard);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Replaces every non-overlapping accepted match in `text`.
    ///
    /// Returns the rewritten text and the number of substitutions made.
    /// The text is borrowed unchanged when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut pos = 0;
        let mut count = 0;

        while pos <= text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };
            let Some(m) = caps.get(0) else {
                break;
            };

            if !self.accepts(text, m.start(), m.end()) {
                pos = next_boundary(text, m.start());
                continue;
            }

            out.push_str(&text[copied..m.start()]);
            caps.expand(self.replacement, &mut out);
            copied = m.end();
            count += 1;

            pos = if m.is_empty() {
                // Keep the character under an empty match and step past it
                let next = next_boundary(text, m.end()).min(text.len());
                out.push_str(&text[m.end()..next]);
                copied = next;
                next_boundary(text, m.end())
            } else {
                m.end()
            };
        }

        if count == 0 {
            return (Cow::Borrowed(text), 0);
        }

        out.push_str(&text[copied..]);
        (Cow::Owned(out), count)
    }

    fn accepts(&self, text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();

        let blocked_before = matches!((self.not_preceded_by, before), (Some(g), Some(c)) if g(c));
        let blocked_after = matches!((self.not_followed_by, after), (Some(g), Some(c)) if g(c));

        !blocked_before && !blocked_after
    }
}

/// Byte offset of the character boundary after `at`, or `text.len() + 1`
/// when `at` is already the end.
fn next_boundary(text: &str, at: usize) -> usize {
    at + text[at..].chars().next().map_or(1, char::len_utf8)
}

/// An ordered, immutable sequence of rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates a rule set that applies `rules` in the given order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in rule set: contractions, then spelling, then punctuation.
    pub fn standard() -> &'static RuleSet {
        static STANDARD: Lazy<RuleSet> = Lazy::new(|| {
            let mut rules = contractions::rules();
            rules.extend(spelling::rules());
            rules.extend(punctuation::rules());
            RuleSet::new(rules)
        });
        &STANDARD
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }
}
