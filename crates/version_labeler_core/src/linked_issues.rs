//! Extraction of linked issue numbers from pull request descriptions.
//!
//! GitHub links an issue to a pull request when the description contains a
//! closing keyword followed by the issue reference, for example `Fixes #12`.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

#[cfg(test)]
#[path = "linked_issues_tests.rs"]
mod tests;

/// Keywords that link a pull request to the issue it closes.
pub const CLOSING_KEYWORDS: [&str; 8] = [
    "close", "closes", "fix", "fixes", "fixed", "resolve", "resolves", "resolved",
];

static LINKED_ISSUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)(?:{})\s+#(\d+)", CLOSING_KEYWORDS.join("|"));
    Regex::new(&pattern).expect("closing keyword pattern is a valid regex")
});

/// Returns the issue numbers referenced with a closing keyword, in order of appearance.
///
/// Matching ignores case and requires whitespace between the keyword and the
/// `#<number>` reference. The keyword may end a longer word, so `unresolved #2`
/// links issue 2. References that do not fit in a `u64`, and `#0`, are
/// skipped. Duplicates are kept; see [`unique_issue_numbers`].
///
/// # Examples
///
/// ```
/// use version_labeler_core::extract_linked_issues;
///
/// assert_eq!(extract_linked_issues("Fixes #1, Closes #2"), vec![1, 2]);
/// assert!(extract_linked_issues("Related to #3").is_empty());
/// ```
pub fn extract_linked_issues(body: &str) -> Vec<u64> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    LINKED_ISSUE_PATTERN
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .filter(|number| *number > 0)
        .collect()
}

/// Removes repeated issue numbers, keeping the first occurrence of each.
pub fn unique_issue_numbers(numbers: &[u64]) -> Vec<u64> {
    let mut seen = HashSet::new();
    numbers
        .iter()
        .copied()
        .filter(|number| seen.insert(*number))
        .collect()
}
