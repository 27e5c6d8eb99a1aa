//! Custom assertions for correction testing.

use super::fixtures::Case;
use typography::apply_count_issues;

/// Asserts that a case is corrected as expected, and that correcting the
/// corrected text again changes nothing.
///
/// # Panics
/// Panics with the offending input if either pass disagrees.
pub fn assert_corrects(case: &Case) {
    let first = apply_count_issues(case.before);
    assert_eq!(first.text, case.after, "wrong correction for {:?}", case.before);
    assert_eq!(
        first.issue_count, case.count,
        "wrong issue count for {:?}",
        case.before
    );

    assert_idempotent(case.after);
}

/// Asserts that `text` has no issues left.
///
/// # Panics
/// Panics if any rule still matches.
pub fn assert_idempotent(text: &str) {
    let again = apply_count_issues(text);
    assert_eq!(again.text, text, "second pass changed {:?}", text);
    assert_eq!(again.issue_count, 0, "second pass found issues in {:?}", text);
}
