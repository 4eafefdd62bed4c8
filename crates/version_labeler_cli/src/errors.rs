//! Error types for the version labeler action.
//!
//! Every error maps to a process exit status through [`Error::exit_code`].

use thiserror::Error;
use version_labeler_core::{LabelerError, ValidationError};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Exit status for a successful run.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status when a GitHub operation failed or the repository is not set up.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status for invalid input or configuration.
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Errors that can occur in the version labeler action.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or validating the configuration file.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read or parse the workflow event payload.
    #[error("Invalid event payload: {0}")]
    EventPayload(String),

    /// The GitHub client could not be created.
    #[error("Failed to create GitHub client")]
    Client(#[source] github_client::Error),

    /// A labeler operation failed.
    #[error(transparent)]
    Labeler(#[from] LabelerError),

    /// Required branches do not exist in the repository.
    #[error("Missing required branches: {}", .0.join(", "))]
    MissingBranches(Vec<String>),

    /// A required input was neither passed as an argument nor set in the environment.
    #[error("Missing required input: {0}")]
    MissingInput(String),

    /// An input value was rejected.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::EventPayload(_)
            | Error::MissingInput(_)
            | Error::Validation(_)
            | Error::Labeler(LabelerError::Validation(_)) => EXIT_INVALID_INPUT,
            Error::Client(_) | Error::Labeler(_) | Error::MissingBranches(_) => EXIT_FAILURE,
        }
    }
}

/// Formats an error with all of its sources, separated by `: `.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
