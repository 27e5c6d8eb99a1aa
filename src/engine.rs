//! The rule engine.
//!
//! Applies every rule of a [`RuleSet`] in order, feeding each rule the
//! output of the previous one, and counts the substitutions made.

use crate::rules::{Category, RuleSet};

/// Substitutions made by a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub rule: &'static str,
    pub category: Category,
    pub count: usize,
}

/// Corrected text and the issues found on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correction {
    /// Text after every rule has been applied
    pub text: String,

    /// Total number of substitutions across all rules
    pub issue_count: usize,

    /// Per-rule counts, in rule order, for rules that matched
    pub hits: Vec<RuleHit>,
}

impl Correction {
    /// Returns true if any rule made a substitution.
    pub fn has_issues(&self) -> bool {
        self.issue_count > 0
    }

    /// Splits into the corrected text and the issue count.
    pub fn into_parts(self) -> (String, usize) {
        (self.text, self.issue_count)
    }
}

impl RuleSet {
    /// Applies all rules, in order, to `text`.
    pub fn apply_count_issues(&self, text: &str) -> Correction {
        let mut current = text.to_string();
        let mut issue_count = 0;
        let mut hits = Vec::new();

        for rule in self.iter() {
            let (next, count) = rule.apply(&current);
            tracing::trace!(rule = rule.name(), count, "applied rule");

            if count > 0 {
                hits.push(RuleHit {
                    rule: rule.name(),
                    category: rule.category(),
                    count,
                });
                issue_count += count;
                current = next.into_owned();
            }
        }

        tracing::debug!(issue_count, rules_hit = hits.len(), "checked text");

        Correction {
            text: current,
            issue_count,
            hits,
        }
    }
}

/// Applies the standard rule set to `text`.
///
/// # Examples
///
/// ```
/// let correction = typography::apply_count_issues("Could've been  \nin Hawaii");
/// assert_eq!(correction.text, "Could’ve been\nin Hawaiʻi");
/// assert_eq!(correction.issue_count, 3);
/// ```
pub fn apply_count_issues(text: &str) -> Correction {
    RuleSet::standard().apply_count_issues(text)
}
