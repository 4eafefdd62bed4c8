//! # Models
//!
//! This module contains the data models returned by the GitHub REST API that the
//! version labeler works with: branches, labels and pull requests.
//!
//! Only the fields the labeler reads are modelled. Unknown fields in the responses
//! are ignored during deserialization.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a branch in a repository.
///
/// # Examples
///
/// ```
/// use github_client::models::Branch;
///
/// let branch = Branch {
///     name: "main".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// The name of the branch
    pub name: String,
}

/// Represents a label on a repository, issue or pull request.
///
/// # Fields
///
/// * `name` - The name of the label
/// * `color` - The hex color code of the label, without the leading `#`
/// * `description` - An optional description of the label
///
/// # Examples
///
/// ```
/// use github_client::models::Label;
///
/// let label = Label {
///     name: "major".to_string(),
///     color: "d73a4a".to_string(),
///     description: Some("Major version bump".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The name of the label
    pub name: String,

    /// The hex color code of the label
    #[serde(default)]
    pub color: String,

    /// The description of the label
    #[serde(default)]
    pub description: Option<String>,
}

impl Label {
    /// Creates a label with a name and color and no description.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: None,
        }
    }
}

/// The head reference of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestHead {
    /// The name of the branch the pull request merges from
    #[serde(rename = "ref")]
    pub ref_name: String,

    /// The commit SHA at the tip of the head branch
    #[serde(default)]
    pub sha: String,
}

/// Represents a pull request.
///
/// The `body` is `None` when the pull request has no description.
///
/// # Examples
///
/// ```rust
/// use github_client::models::{PullRequest, PullRequestHead};
///
/// let pr = PullRequest {
///     number: 42,
///     body: Some("Fixes #7".to_string()),
///     state: "open".to_string(),
///     head: PullRequestHead {
///         ref_name: "feature/login".to_string(),
///         sha: String::new(),
///     },
/// };
///
/// assert!(pr.is_open());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// The pull request number
    pub number: u64,

    /// The description of the pull request
    #[serde(default)]
    pub body: Option<String>,

    /// The state of the pull request (`open` or `closed`)
    #[serde(default)]
    pub state: String,

    /// The branch the pull request merges from
    #[serde(default)]
    pub head: PullRequestHead,
}

impl PullRequest {
    /// Returns true if the pull request is open.
    pub fn is_open(&self) -> bool {
        self.state.eq_ignore_ascii_case("open")
    }
}
