//! Human-readable reports: an issue summary and a line diff.

use crate::engine::Correction;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// One line of a line-level diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLine<'a> {
    Same(&'a str),
    Removed(&'a str),
    Added(&'a str),
}

/// Issue count as a short phrase.
pub fn summary(issue_count: usize) -> String {
    match issue_count {
        0 => "no issues".to_string(),
        1 => "1 issue found".to_string(),
        n => format!("{} issues found", n),
    }
}

/// Diffs two texts line by line.
///
/// Common leading and trailing lines are matched first. Corrections never
/// add or remove lines, so what remains usually has the same length on both
/// sides and is paired by position; otherwise a longest common subsequence
/// aligns it. Within a changed hunk, removed lines come before added ones.
pub fn line_diff<'a>(before: &'a str, after: &'a str) -> Vec<DiffLine<'a>> {
    let old: Vec<&str> = before.lines().collect();
    let new: Vec<&str> = after.lines().collect();

    let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let old_mid = &old[prefix..old.len() - suffix];
    let new_mid = &new[prefix..new.len() - suffix];

    let mut diff = Vec::with_capacity(old.len().max(new.len()));
    diff.extend(old[..prefix].iter().copied().map(DiffLine::Same));
    if old_mid.len() == new_mid.len() {
        pair_lines(old_mid, new_mid, &mut diff);
    } else {
        lcs_lines(old_mid, new_mid, &mut diff);
    }
    diff.extend(old[old.len() - suffix..].iter().copied().map(DiffLine::Same));
    diff
}

fn pair_lines<'a>(old: &[&'a str], new: &[&'a str], diff: &mut Vec<DiffLine<'a>>) {
    let mut i = 0;
    while i < old.len() {
        if old[i] == new[i] {
            diff.push(DiffLine::Same(old[i]));
            i += 1;
            continue;
        }

        let run = old[i..]
            .iter()
            .zip(&new[i..])
            .take_while(|(a, b)| a != b)
            .count();
        diff.extend(old[i..i + run].iter().copied().map(DiffLine::Removed));
        diff.extend(new[i..i + run].iter().copied().map(DiffLine::Added));
        i += run;
    }
}

fn lcs_lines<'a>(old: &[&'a str], new: &[&'a str], diff: &mut Vec<DiffLine<'a>>) {
    // lcs[i][j] = LCS length of old[i..] and new[j..]
    let mut lcs = vec![vec![0usize; new.len() + 1]; old.len() + 1];
    for i in (0..old.len()).rev() {
        for j in (0..new.len()).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            diff.push(DiffLine::Same(old[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            diff.push(DiffLine::Removed(old[i]));
            i += 1;
        } else {
            diff.push(DiffLine::Added(new[j]));
            j += 1;
        }
    }
    diff.extend(old[i..].iter().copied().map(DiffLine::Removed));
    diff.extend(new[j..].iter().copied().map(DiffLine::Added));
}

/// Renders the report for one input.
///
/// The first line is `"{name}: {summary}"`. When issues were found, the
/// diff between `before` and the corrected text follows.
pub fn render(name: &str, before: &str, correction: &Correction, color: bool) -> String {
    let mut out = format!("{}: {}\n", name, summary(correction.issue_count));

    if !correction.has_issues() {
        return out;
    }

    for line in line_diff(before, &correction.text) {
        let rendered = match line {
            DiffLine::Same(l) => format!("  {}\n", l),
            DiffLine::Removed(l) if color => format!("{}- {}{}\n", RED, l, RESET),
            DiffLine::Removed(l) => format!("- {}\n", l),
            DiffLine::Added(l) if color => format!("{}+ {}{}\n", GREEN, l, RESET),
            DiffLine::Added(l) => format!("+ {}\n", l),
        };
        out.push_str(&rendered);
    }

    out
}
