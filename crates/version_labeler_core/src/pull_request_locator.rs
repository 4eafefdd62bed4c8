//! Finds the pull request a workflow run belongs to from its commit.

use github_client::RepositoryClient;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::errors::{LabelerError, LabelerResult, ValidationError};
use crate::repository::{PullNumber, RepositoryPath};

#[cfg(test)]
#[path = "pull_request_locator_tests.rs"]
mod tests;

pub struct PullRequestLocator {
    client: Arc<dyn RepositoryClient>,
    repository: RepositoryPath,
}

impl PullRequestLocator {
    pub fn new(client: Arc<dyn RepositoryClient>, repository: RepositoryPath) -> Self {
        Self { client, repository }
    }

    /// Returns the first open pull request associated with the commit.
    ///
    /// Closed and merged pull requests are skipped. Returns `None` when the
    /// commit has no open pull request.
    ///
    /// # Errors
    ///
    /// * `LabelerError::Validation` - The commit SHA is empty
    /// * `LabelerError::LocatePullRequest` - The API request failed
    #[instrument(skip(self), fields(repository = %self.repository))]
    pub async fn find_for_commit(&self, sha: &str) -> LabelerResult<Option<PullNumber>> {
        let sha = sha.trim();
        if sha.is_empty() {
            return Err(ValidationError::empty_field("sha").into());
        }

        let pulls = self
            .client
            .list_pull_requests_for_commit(
                self.repository.owner().as_str(),
                self.repository.repo().as_str(),
                sha,
            )
            .await
            .map_err(|source| LabelerError::LocatePullRequest { source })?;

        debug!(count = pulls.len(), "Pull requests associated with commit");

        match pulls.iter().find(|pull| pull.is_open()) {
            Some(pull) => Ok(Some(PullNumber::new(pull.number)?)),
            None => {
                warn!(sha, "No open pull request found for commit");
                Ok(None)
            }
        }
    }
}
