//! Repository domain types
//!
//! Validated owner and repository names, the `owner/repo` path built from them, and
//! the pull request number. Every labeler component receives a [`RepositoryPath`]
//! at construction, so names are validated once before any request is made.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// Validated GitHub user or organization name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerName(String);

impl OwnerName {
    /// Create a new owner name with validation
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Validation Rules
    /// - Length: 1-39 characters
    /// - Characters: ASCII alphanumeric and hyphens only
    /// - Must not start or end with hyphen
    /// - No consecutive hyphens
    ///
    /// # Errors
    /// Returns `ValidationError` if validation fails
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(ValidationError::empty_field("owner"));
        }

        if name.len() > 39 {
            return Err(ValidationError::too_long("owner", name.len(), 39));
        }

        if name.starts_with('-') || name.ends_with('-') {
            return Err(ValidationError::invalid_format(
                "owner",
                "must not start or end with hyphen",
            ));
        }

        if name.contains("--") {
            return Err(ValidationError::invalid_format(
                "owner",
                "must not contain consecutive hyphens",
            ));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ValidationError::invalid_format(
                "owner",
                "must contain only alphanumeric characters and hyphens",
            ));
        }

        Ok(Self(name.to_string()))
    }

    /// Get the owner name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OwnerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated GitHub repository name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Create a new repository name with validation
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Validation Rules
    /// - Length: 1-100 characters
    /// - Characters: ASCII alphanumeric, hyphens, underscores, periods
    /// - Must not start with `.` or `-`
    ///
    /// # Errors
    /// Returns `ValidationError` if validation fails
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(ValidationError::empty_field("repository_name"));
        }

        if name.len() > 100 {
            return Err(ValidationError::too_long(
                "repository_name",
                name.len(),
                100,
            ));
        }

        if name.starts_with('.') || name.starts_with('-') {
            return Err(ValidationError::invalid_format(
                "repository_name",
                "must not start with '.' or '-'",
            ));
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(ValidationError::invalid_format(
                "repository_name",
                "must contain only alphanumeric characters, hyphens, underscores, or periods",
            ));
        }

        Ok(Self(name.to_string()))
    }

    /// Get the repository name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RepositoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated `owner/repo` pair.
///
/// # Examples
///
/// ```
/// use version_labeler_core::RepositoryPath;
///
/// let path: RepositoryPath = "octo-org/hello-world".parse().unwrap();
/// assert_eq!(path.owner().as_str(), "octo-org");
/// assert_eq!(path.repo().as_str(), "hello-world");
/// assert_eq!(path.to_string(), "octo-org/hello-world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryPath {
    owner: OwnerName,
    repo: RepositoryName,
}

impl RepositoryPath {
    /// Create a repository path from already validated parts
    pub fn new(owner: OwnerName, repo: RepositoryName) -> Self {
        Self { owner, repo }
    }

    /// Parse an `owner/repo` string, such as the value of `GITHUB_REPOSITORY`
    ///
    /// # Errors
    /// Returns `ValidationError` if the string is not exactly two `/` separated
    /// parts or if either part fails validation
    pub fn parse(path: &str) -> Result<Self, ValidationError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(ValidationError::empty_field("repository_path"));
        }

        let (owner, repo) = path.split_once('/').ok_or_else(|| {
            ValidationError::invalid_format("repository_path", "expected 'owner/repo'")
        })?;

        if repo.contains('/') {
            return Err(ValidationError::invalid_format(
                "repository_path",
                "expected 'owner/repo'",
            ));
        }

        Ok(Self {
            owner: OwnerName::new(owner)?,
            repo: RepositoryName::new(repo)?,
        })
    }

    pub fn owner(&self) -> &OwnerName {
        &self.owner
    }

    pub fn repo(&self) -> &RepositoryName {
        &self.repo
    }
}

impl FromStr for RepositoryPath {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RepositoryPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A pull request number, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PullNumber(u64);

impl PullNumber {
    /// Create a new pull number
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidPullNumber` for zero
    pub fn new(number: u64) -> Result<Self, ValidationError> {
        if number == 0 {
            return Err(ValidationError::InvalidPullNumber);
        }
        Ok(Self(number))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl FromStr for PullNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidPullNumber)?;
        Self::new(number)
    }
}

impl std::fmt::Display for PullNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
