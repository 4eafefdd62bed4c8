//! Command modules for the version labeler.
//!
//! - `check_labels_cmd`: Creates the missing version bump labels
//! - `sync_labels_cmd`: Copies the bump label from linked issues to the pull request
//! - `verify_branches_cmd`: Checks the release flow branches
//! - `run_cmd`: All three in sequence, the default action entry point

use clap::Subcommand;

use crate::{
    errors::Error,
    inputs::{ActionContext, PullRequestArgs},
};

pub mod check_labels_cmd;
pub mod run_cmd;
pub mod sync_labels_cmd;
pub mod verify_branches_cmd;

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create the major, minor and patch labels if they are missing
    CheckLabels,

    /// Copy the highest priority bump label from the linked issues to the pull request
    SyncLabels(PullRequestArgs),

    /// Check that the development, staging and production branches exist
    VerifyBranches,

    /// Check labels, verify branches and sync labels
    Run(PullRequestArgs),
}

/// Runs a subcommand and prints its result.
///
/// # Errors
///
/// Returns the error of the failed step. Missing branches are reported as
/// `Error::MissingBranches` after the remaining steps have run.
pub async fn execute(command: &Commands, context: &ActionContext) -> Result<(), Error> {
    match command {
        Commands::CheckLabels => {
            let outcome = check_labels_cmd::check_labels(context).await?;
            println!("{}", check_labels_cmd::describe(&outcome));
            Ok(())
        }
        Commands::SyncLabels(args) => {
            let outcome = sync_labels_cmd::sync_labels(context, args).await?;
            println!("{}", sync_labels_cmd::describe(outcome.as_ref()));
            Ok(())
        }
        Commands::VerifyBranches => {
            let verification = verify_branches_cmd::verify_branches(context).await?;
            println!("{}", verify_branches_cmd::describe(&verification));
            verify_branches_cmd::require_success(verification)
        }
        Commands::Run(args) => {
            let summary = run_cmd::run(context, args).await?;
            for line in summary.lines() {
                println!("{}", line);
            }
            verify_branches_cmd::require_success(summary.branches)
        }
    }
}
