//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub
//! with a personal or workflow token, and the [`RepositoryClient`] trait that
//! describes the branch, label and pull request operations used by the
//! version labeler.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{Branch, Label, PullRequest, PullRequestHead};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The number of items requested per page for list endpoints.
///
/// GitHub caps `per_page` at 100. A page shorter than this marks the last page.
pub const PAGE_SIZE: usize = 100;

/// A client for interacting with the GitHub API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from an authenticated `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build the `Octocrab` instance from a token.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Fetches every page of a list endpoint and concatenates the results.
    ///
    /// Pages are requested with `per_page=100` until a page comes back with
    /// fewer items than that.
    async fn get_all_pages<T>(&self, route: &str, operation: &str) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned + Send,
    {
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let query = PageQuery {
                per_page: PAGE_SIZE,
                page,
            };

            debug!(route = route, page = page, "Requesting page");
            let result: OctocrabResult<Vec<T>> = self.client.get(route, Some(&query)).await;
            let batch = result.map_err(|e| map_octocrab_error(operation, e))?;

            let count = batch.len();
            items.extend(batch);

            if count < PAGE_SIZE {
                break;
            }

            page += 1;
        }

        Ok(items)
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<Branch>, Error> {
        let path = format!("/repos/{}/{}/branches", owner, repo);
        let branches: Vec<Branch> = self
            .get_all_pages(&path, "Failed to list branches")
            .await?;

        info!(count = branches.len(), "Retrieved repository branches");
        Ok(branches)
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_repository_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, Error> {
        let path = format!("/repos/{}/{}/labels", owner, repo);
        let labels: Vec<Label> = self
            .get_all_pages(&path, "Failed to list repository labels")
            .await?;

        info!(count = labels.len(), "Retrieved repository labels");
        Ok(labels)
    }

    #[instrument(skip(self, description), fields(owner = %owner, repo = %repo, label = %name))]
    async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        description: &str,
        color: &str,
    ) -> Result<(), Error> {
        let path = format!("/repos/{}/{}/labels", owner, repo);
        let payload = LabelCreatePayload {
            name,
            description,
            color,
        };

        let response: OctocrabResult<Label> = self.client.post(path, Some(&payload)).await;
        match response {
            Ok(label) => {
                info!(label = label.name, color = label.color, "Created label");
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to create label", e)),
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo, pull_number = pull_number))]
    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<PullRequest, Error> {
        let path = format!("/repos/{}/{}/pulls/{}", owner, repo, pull_number);
        let response: OctocrabResult<PullRequest> = self.client.get(path, None::<&()>).await;
        response.map_err(|e| map_octocrab_error("Failed to get pull request", e))
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo, issue_number = issue_number))]
    async fn list_labels_on_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Vec<Label>, Error> {
        let path = format!("/repos/{}/{}/issues/{}/labels", owner, repo, issue_number);
        self.get_all_pages(&path, "Failed to list labels on issue")
            .await
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo, issue_number = issue_number))]
    async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<(), Error> {
        let path = format!("/repos/{}/{}/issues/{}/labels", owner, repo, issue_number);
        let payload = AddLabelsPayload { labels };

        let response: OctocrabResult<Vec<Label>> = self.client.post(path, Some(&payload)).await;
        match response {
            Ok(current) => {
                info!(
                    added = ?labels,
                    label_count = current.len(),
                    "Added labels to issue"
                );
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to add labels", e)),
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo, sha = %sha))]
    async fn list_pull_requests_for_commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<Vec<PullRequest>, Error> {
        let path = format!("/repos/{}/{}/commits/{}/pulls", owner, repo, sha);
        self.get_all_pages(&path, "Failed to list pull requests for commit")
            .await
    }
}

/// Trait for the repository operations the version labeler depends on.
///
/// Implementations are expected to make a single attempt per call. Failures
/// are reported through [`Error`], with the HTTP status mapped to a variant.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Lists every branch in the repository.
    async fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<Branch>, Error>;

    /// Lists every label defined in the repository.
    async fn list_repository_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, Error>;

    /// Creates a label in the repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    /// * `name` - The label name.
    /// * `description` - A short description of the label.
    /// * `color` - A 6 character hex color code without the leading `#`.
    ///
    /// # Errors
    /// Returns an `Error` if the API call fails, for instance when the label
    /// already exists (422).
    async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        description: &str,
        color: &str,
    ) -> Result<(), Error>;

    /// Fetches a single pull request.
    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<PullRequest, Error>;

    /// Lists the labels attached to an issue or pull request.
    async fn list_labels_on_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
    ) -> Result<Vec<Label>, Error>;

    /// Adds labels to an issue or pull request. Existing labels are kept.
    async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<(), Error>;

    /// Lists the pull requests associated with a commit.
    async fn list_pull_requests_for_commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<Vec<PullRequest>, Error>;
}

#[derive(Debug, Serialize)]
struct PageQuery {
    per_page: usize,
    page: u32,
}

/// Request body for creating a label.
#[derive(Debug, Serialize)]
struct LabelCreatePayload<'a> {
    name: &'a str,
    description: &'a str,
    color: &'a str,
}

/// Request body for adding labels to an issue.
#[derive(Debug, Serialize)]
struct AddLabelsPayload<'a> {
    labels: &'a [String],
}

/// Creates an `Octocrab` client authenticated with a personal or workflow token.
///
/// # Arguments
///
/// * `token` - The token, typically the `GITHUB_TOKEN` of the workflow run.
/// * `base_uri` - An optional API base URI, for GitHub Enterprise Server or tests.
///
/// # Errors
///
/// Returns `Error::AuthError` if the base URI is invalid or the client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient};
/// use secrecy::SecretString;
///
/// # fn example() -> Result<(), github_client::Error> {
/// let token = SecretString::from("ghp_example".to_string());
/// let octocrab = create_token_client(&token, None)?;
/// let client = GitHubClient::new(octocrab);
/// # Ok(())
/// # }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &SecretString, base_uri: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder().personal_token(token.expose_secret().to_string());

    if let Some(uri) = base_uri {
        builder = builder.base_uri(uri).map_err(|e| {
            error!(base_uri = uri, error = %e, "Invalid GitHub API base URI");
            Error::AuthError(format!("Invalid GitHub API base URI '{}': {}", uri, e))
        })?;
    }

    builder.build().map_err(|e| {
        error!(error = ?e, "Failed to build Octocrab client with token");
        Error::AuthError("Failed to build a GitHub client from the token.".to_string())
    })
}

/// Returns true when a GitHub error message describes a rate limit.
fn is_rate_limit_message(message: &str) -> bool {
    message.to_lowercase().contains("rate limit")
}

/// Logs an octocrab error and translates it into an [`Error`].
///
/// The HTTP status decides the variant: 401 is an authentication failure,
/// 403 (or 429) with a rate-limit message is a rate limit, any other 403 is a
/// permission failure and 404 is not found.
fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let status = source.status_code.as_u16();
            error!(
                status = status,
                error_message = source.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            );

            match status {
                401 => Error::AuthError(source.message.clone()),
                403 | 429 if is_rate_limit_message(&source.message) => Error::RateLimitExceeded,
                403 => Error::PermissionDenied(source.message.clone()),
                404 => Error::NotFound,
                _ => Error::ApiError {
                    status,
                    message: source.message.clone(),
                },
            }
        }
        octocrab::Error::Serde { source, .. } => {
            error!(
                error_message = source.to_string(),
                "{}. Failed to deserialize the response.", message
            );
            Error::Deserialization(source)
        }
        _ => {
            error!(error_message = e.to_string(), message);
            Error::InvalidResponse
        }
    }
}
