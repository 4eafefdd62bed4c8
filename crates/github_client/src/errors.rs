//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate. The HTTP status of a failed call decides the variant so
//! callers can tell authentication, permission and rate-limit failures apart.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.list_repository_labels("owner", "repo").await {
///     Ok(labels) => println!("Found {} labels", labels.len()),
///     Err(Error::AuthError(msg)) => eprintln!("Authentication failed: {}", msg),
///     Err(Error::RateLimitExceeded) => eprintln!("Rate limit exceeded, retry later"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The GitHub API answered with an unsuccessful status that has no dedicated variant.
    #[error("GitHub API request failed with status {status}: {message}")]
    ApiError {
        /// The HTTP status code of the response
        status: u16,
        /// The message GitHub returned
        message: String,
    },

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when:
    /// - The token is invalid, expired or revoked (HTTP 401)
    /// - The client cannot be built, for instance because of an invalid base URI
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The request could not be completed or produced no usable response.
    ///
    /// Transport failures (connection refused, invalid URI, invalid UTF-8) end up here.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found (HTTP 404).
    #[error("Resource not found")]
    NotFound,

    /// The token lacks the permissions needed for the request (HTTP 403).
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// GitHub API rate limit has been exceeded.
    ///
    /// GitHub reports this as HTTP 403 (or 429) with a rate-limit message. Nothing
    /// in this crate retries; the `X-RateLimit-Reset` header tells when to try again.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl Error {
    /// Returns true if the error was caused by the GitHub rate limit.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Error::RateLimitExceeded)
    }
}
