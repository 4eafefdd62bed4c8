//! Label sync command.

use tracing::warn;
use version_labeler_core::{LabelSyncer, PullRequestLocator, SyncOutcome};

use crate::{
    annotations,
    errors::Error,
    inputs::{ActionContext, PullRequestArgs},
};

#[cfg(test)]
#[path = "sync_labels_cmd_tests.rs"]
mod sync_labels_cmd_tests;

/// Message when no pull request could be resolved for the run
pub const NO_PULL_REQUEST: &str = "No pull request found for this run";

/// Resolves the pull request and syncs its version label.
///
/// Returns `None` without making changes when no pull request can be resolved.
/// Benign outcomes are annotated as warnings and an applied label as a notice.
pub async fn sync_labels(
    context: &ActionContext,
    args: &PullRequestArgs,
) -> Result<Option<SyncOutcome>, Error> {
    let locator = PullRequestLocator::new(context.client.clone(), context.repository.clone());
    let Some(pull_number) = args.resolve(&locator).await? else {
        warn!("{}", NO_PULL_REQUEST);
        annotations::warning(NO_PULL_REQUEST);
        return Ok(None);
    };

    let syncer = LabelSyncer::new(
        context.client.clone(),
        context.repository.clone(),
        pull_number,
        context.catalog.clone(),
    );

    let outcome = syncer.sync_labels().await?;
    match outcome {
        SyncOutcome::Applied(_) => annotations::notice(&outcome.describe()),
        _ => annotations::warning(&outcome.describe()),
    }

    Ok(Some(outcome))
}

pub fn describe(outcome: Option<&SyncOutcome>) -> String {
    match outcome {
        Some(outcome) => outcome.describe(),
        None => NO_PULL_REQUEST.to_string(),
    }
}
