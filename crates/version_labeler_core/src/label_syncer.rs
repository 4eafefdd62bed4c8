//! Copies the version bump label from linked issues onto a pull request.

use futures::future::try_join_all;
use github_client::{Label, RepositoryClient};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::catalog::LabelCatalog;
use crate::errors::{LabelerError, LabelerResult};
use crate::linked_issues::{extract_linked_issues, unique_issue_numbers};
use crate::priority::{resolve_priority_label, PriorityLabel};
use crate::repository::{PullNumber, RepositoryPath};

#[cfg(test)]
#[path = "label_syncer_tests.rs"]
mod tests;

/// The result of a label sync that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The label was added to the pull request.
    Applied(PriorityLabel),

    /// The pull request has no description to read linked issues from.
    MissingBody,

    /// The description does not link any issue with a closing keyword.
    NoLinkedIssues,

    /// None of the linked issues carries a version bump label.
    NoPriorityLabel,
}

impl SyncOutcome {
    /// A short description of the outcome for logs and annotations.
    pub fn describe(&self) -> String {
        match self {
            SyncOutcome::Applied(label) => format!("Applied '{}' label", label.name()),
            SyncOutcome::MissingBody => "Pull request body is null".to_string(),
            SyncOutcome::NoLinkedIssues => "No linked issues found".to_string(),
            SyncOutcome::NoPriorityLabel => "No priority labels found".to_string(),
        }
    }
}

/// Applies the highest priority bump label of the linked issues to one pull request.
///
/// Labels are only ever added; labels already on the pull request stay.
pub struct LabelSyncer {
    client: Arc<dyn RepositoryClient>,
    repository: RepositoryPath,
    pull_number: PullNumber,
    catalog: Arc<LabelCatalog>,
}

impl LabelSyncer {
    pub fn new(
        client: Arc<dyn RepositoryClient>,
        repository: RepositoryPath,
        pull_number: PullNumber,
        catalog: Arc<LabelCatalog>,
    ) -> Self {
        Self {
            client,
            repository,
            pull_number,
            catalog,
        }
    }

    /// Syncs the version bump label from the linked issues to the pull request.
    ///
    /// # Behavior
    ///
    /// 1. Fetches the pull request; stops with a warning if it has no body
    /// 2. Extracts the linked issues; stops with a warning if there are none
    /// 3. Fetches the labels of every linked issue concurrently
    /// 4. Picks the highest priority bump label; stops with a warning if there is none
    /// 5. Adds that single label to the pull request
    ///
    /// Issues linked more than once are only fetched once.
    ///
    /// # Errors
    ///
    /// Any API failure, including a single failed issue lookup, is returned as
    /// `LabelerError::SyncLabels` with the client error as its source.
    #[instrument(skip(self), fields(repository = %self.repository, pull_number = %self.pull_number))]
    pub async fn sync_labels(&self) -> LabelerResult<SyncOutcome> {
        self.try_sync()
            .await
            .map_err(|source| LabelerError::SyncLabels { source })
    }

    async fn try_sync(&self) -> Result<SyncOutcome, github_client::Error> {
        let owner = self.repository.owner().as_str();
        let repo = self.repository.repo().as_str();
        let pull_number = self.pull_number.as_u64();

        let pull_request = self
            .client
            .get_pull_request(owner, repo, pull_number)
            .await?;

        let Some(body) = pull_request.body else {
            warn!("Pull request body is null");
            return Ok(SyncOutcome::MissingBody);
        };

        let linked = extract_linked_issues(&body);
        if linked.is_empty() {
            warn!("No linked issues found");
            return Ok(SyncOutcome::NoLinkedIssues);
        }

        let issues = unique_issue_numbers(&linked);
        debug!(issues = ?issues, "Fetching labels of linked issues");

        let lookups = issues
            .iter()
            .map(|issue_number| self.client.list_labels_on_issue(owner, repo, *issue_number));
        let labels: Vec<Label> = try_join_all(lookups).await?.into_iter().flatten().collect();

        let Some(selected) = resolve_priority_label(&labels, &self.catalog) else {
            warn!("No priority labels found");
            return Ok(SyncOutcome::NoPriorityLabel);
        };

        self.client
            .add_labels(owner, repo, pull_number, &[selected.name().to_string()])
            .await?;

        info!(
            label = selected.name(),
            priority = selected.priority,
            "Applied version label to pull request"
        );
        Ok(SyncOutcome::Applied(selected))
    }
}
