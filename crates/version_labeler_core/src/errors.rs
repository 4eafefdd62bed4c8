//! Error types for the version labeler.
//!
//! [`ValidationError`] covers input that is rejected before any network call.
//! [`LabelerError`] is the error returned by the labeler operations; API failures
//! are wrapped with a stable per-operation message and keep the original cause
//! as their source.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Result type for labeler operations.
pub type LabelerResult<T> = Result<T, LabelerError>;

/// Input validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' is too long: {actual} characters (max: {max})")]
    TooLong {
        field: String,
        actual: usize,
        max: usize,
    },

    #[error("Field '{field}' has an invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Invalid color code: {color}. It must be a 6-character hex code without #.")]
    InvalidColor { color: String },

    #[error("Duplicate label catalog entry: {value}")]
    DuplicateCatalogEntry { value: String },

    #[error("Pull request number must be a positive integer")]
    InvalidPullNumber,
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    pub fn too_long(field: impl Into<String>, actual: usize, max: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            actual,
            max,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_color(color: impl Into<String>) -> Self {
        Self::InvalidColor {
            color: color.into(),
        }
    }
}

/// Errors returned by the labeler operations.
#[derive(Error, Debug)]
pub enum LabelerError {
    /// Input was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The GitHub rate limit was hit. Reported apart from other API failures
    /// so callers can decide whether to wait instead of aborting.
    #[error("GitHub rate limit exceeded while trying to {operation}")]
    RateLimited {
        operation: String,
        #[source]
        source: github_client::Error,
    },

    #[error("Failed to check labels")]
    CheckLabels {
        #[source]
        source: github_client::Error,
    },

    #[error("Failed to sync labels")]
    SyncLabels {
        #[source]
        source: github_client::Error,
    },

    #[error("Failed to verify branches")]
    VerifyBranches {
        #[source]
        source: github_client::Error,
    },

    #[error("Failed to find pull request for commit")]
    LocatePullRequest {
        #[source]
        source: github_client::Error,
    },
}

impl LabelerError {
    /// Returns true if the failure was caused by the GitHub rate limit.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, LabelerError::RateLimited { .. })
    }

    /// Returns the underlying GitHub client error, if any.
    pub fn api_error(&self) -> Option<&github_client::Error> {
        match self {
            LabelerError::Validation(_) => None,
            LabelerError::RateLimited { source, .. }
            | LabelerError::CheckLabels { source }
            | LabelerError::SyncLabels { source }
            | LabelerError::VerifyBranches { source }
            | LabelerError::LocatePullRequest { source } => Some(source),
        }
    }
}
