//! Ensures the version bump labels exist in a repository.

use futures::future::try_join_all;
use github_client::RepositoryClient;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::catalog::{BumpType, LabelCatalog, LabelDefinition};
use crate::errors::{LabelerError, LabelerResult};
use crate::repository::RepositoryPath;

#[cfg(test)]
#[path = "label_checker_tests.rs"]
mod tests;

/// Creates the catalog labels that a repository is missing.
///
/// Existing labels are never updated or deleted, so running the checker again
/// after it succeeded makes no changes.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use github_client::GitHubClient;
/// use version_labeler_core::{LabelCatalog, LabelChecker, RepositoryPath};
///
/// # async fn example(client: GitHubClient) -> Result<(), Box<dyn std::error::Error>> {
/// let checker = LabelChecker::new(
///     Arc::new(client),
///     RepositoryPath::parse("octo-org/hello-world")?,
///     Arc::new(LabelCatalog::default()),
/// );
///
/// let outcome = checker.ensure_labels_exist().await?;
/// println!("Created {} labels", outcome.created.len());
/// # Ok(())
/// # }
/// ```
pub struct LabelChecker {
    client: Arc<dyn RepositoryClient>,
    repository: RepositoryPath,
    catalog: Arc<LabelCatalog>,
}

impl LabelChecker {
    pub fn new(
        client: Arc<dyn RepositoryClient>,
        repository: RepositoryPath,
        catalog: Arc<LabelCatalog>,
    ) -> Self {
        Self {
            client,
            repository,
            catalog,
        }
    }

    /// Creates every catalog label that does not exist in the repository yet.
    ///
    /// Labels are compared by name without regard to case, the same way GitHub
    /// treats label names. The missing labels are created concurrently, one request
    /// each; when nothing is missing no creation request is made.
    ///
    /// # Errors
    ///
    /// Returns `LabelerError::RateLimited` if GitHub rejected a request because of
    /// the rate limit, and `LabelerError::CheckLabels` for any other API failure.
    /// A failed creation fails the whole batch; creations already sent are not
    /// rolled back.
    #[instrument(skip(self), fields(repository = %self.repository))]
    pub async fn ensure_labels_exist(&self) -> LabelerResult<LabelCheckOutcome> {
        let owner = self.repository.owner().as_str();
        let repo = self.repository.repo().as_str();

        let existing: HashSet<String> = self
            .client
            .list_repository_labels(owner, repo)
            .await
            .map_err(check_labels_error)?
            .into_iter()
            .map(|label| label.name.to_lowercase())
            .collect();

        let (present, missing): (Vec<&LabelDefinition>, Vec<&LabelDefinition>) = self
            .catalog
            .iter()
            .partition(|definition| existing.contains(definition.name()));

        let outcome = LabelCheckOutcome {
            created: missing.iter().map(|d| d.bump).collect(),
            existing: present.iter().map(|d| d.bump).collect(),
        };

        if missing.is_empty() {
            debug!("All version labels already exist");
            return Ok(outcome);
        }

        let creations = missing.iter().map(|definition| {
            info!(
                label = definition.name(),
                color = %definition.color,
                text_color = ?definition.color.accessible_text_color().map(|c| c.to_string()),
                "Creating missing label"
            );
            self.client.create_label(
                owner,
                repo,
                definition.name(),
                &definition.description,
                definition.color.as_str(),
            )
        });

        try_join_all(creations).await.map_err(check_labels_error)?;

        info!(created = ?outcome.created, "Created missing version labels");
        Ok(outcome)
    }
}

/// What the label checker found and did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCheckOutcome {
    /// Labels that were missing and have been created
    pub created: Vec<BumpType>,

    /// Labels that already existed
    pub existing: Vec<BumpType>,
}

impl LabelCheckOutcome {
    pub fn has_changes(&self) -> bool {
        !self.created.is_empty()
    }
}

fn check_labels_error(source: github_client::Error) -> LabelerError {
    if source.is_rate_limit() {
        LabelerError::RateLimited {
            operation: "check labels".to_string(),
            source,
        }
    } else {
        LabelerError::CheckLabels { source }
    }
}
