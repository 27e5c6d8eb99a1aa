//! Find ASCII typography that is better rendered as Unicode, and fix it.
//!
//! A curated, ordered set of regex rules rewrites straight apostrophes in
//! contractions, loanword spellings, dashes, straight quotes, ellipses and
//! trailing whitespace. Every substitution counts as one issue.
//!
//! # Architecture
//!
//! - [`rules`]: the rules, grouped into contractions, spelling and punctuation
//! - [`engine`]: applies a rule set in order and counts substitutions
//! - [`source`]: whole-file and stdin input
//! - [`report`]: issue summaries and line diffs
//! - [`error`]: boundary errors (rule construction, input)
//!
//! # Quick Start
//!
//! ```
//! use typography::apply_count_issues;
//!
//! let correction = apply_count_issues(r#"Time for "curly quotes""#);
//! assert_eq!(correction.text, "Time for “curly quotes”");
//! assert_eq!(correction.issue_count, 2);
//! ```
//!
//! Rule order is part of the contract: later rules see the output of
//! earlier ones. For the texts this tool is meant for, a second pass over
//! corrected output finds nothing.
//!
//! ```
//! use typography::apply_count_issues;
//!
//! let first = apply_count_issues("One way--to em dash...  ");
//! let second = apply_count_issues(&first.text);
//! assert_eq!(second.text, first.text);
//! assert_eq!(second.issue_count, 0);
//! ```

pub mod engine;
pub mod error;
pub mod report;
pub mod rules;
pub mod source;

pub use engine::{apply_count_issues, Correction, RuleHit};
pub use error::{TypographyError, TypographyResult};
pub use rules::{Category, Rule, RuleSet};
pub use source::TextSource;
