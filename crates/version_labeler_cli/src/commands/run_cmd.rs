//! The full action run.

use tracing::{info, instrument};
use version_labeler_core::{BranchVerification, LabelCheckOutcome, SyncOutcome};

use crate::{
    commands::{check_labels_cmd, sync_labels_cmd, verify_branches_cmd},
    errors::Error,
    inputs::{ActionContext, PullRequestArgs},
};

#[cfg(test)]
#[path = "run_cmd_tests.rs"]
mod run_cmd_tests;

/// The result of each step of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub labels: LabelCheckOutcome,
    pub branches: BranchVerification,

    /// `None` when no pull request was found for the run
    pub sync: Option<SyncOutcome>,
}

impl RunSummary {
    /// One line per step.
    pub fn lines(&self) -> Vec<String> {
        vec![
            check_labels_cmd::describe(&self.labels),
            verify_branches_cmd::describe(&self.branches),
            sync_labels_cmd::describe(self.sync.as_ref()),
        ]
    }
}

/// Checks the labels, verifies the branches and syncs the pull request label, in that order.
///
/// Missing branches do not stop the run; the caller decides how to report them.
/// Any other failure stops the run at the failing step.
#[instrument(skip_all, fields(repository = %context.repository))]
pub async fn run(context: &ActionContext, args: &PullRequestArgs) -> Result<RunSummary, Error> {
    let labels = check_labels_cmd::check_labels(context).await?;
    let branches = verify_branches_cmd::verify_branches(context).await?;
    let sync = sync_labels_cmd::sync_labels(context, args).await?;

    info!(
        labels_created = labels.created.len(),
        branches_ok = branches.success,
        "Version labeler run finished"
    );

    Ok(RunSummary {
        labels,
        branches,
        sync,
    })
}
