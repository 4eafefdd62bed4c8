//! Branch verification command.

use version_labeler_core::{BranchVerification, BranchVerifier};

use crate::{annotations, errors::Error, inputs::ActionContext};

#[cfg(test)]
#[path = "verify_branches_cmd_tests.rs"]
mod verify_branches_cmd_tests;

/// Checks the configured branches. Missing branches are annotated as errors.
pub async fn verify_branches(context: &ActionContext) -> Result<BranchVerification, Error> {
    let verifier = BranchVerifier::new(
        context.client.clone(),
        context.repository.clone(),
        context.config.branches.clone(),
    );

    let verification = verifier.verify_branches().await?;
    if !verification.success {
        annotations::error(&describe(&verification));
    }

    Ok(verification)
}

pub fn describe(verification: &BranchVerification) -> String {
    if verification.success {
        "All required branches exist".to_string()
    } else {
        format!(
            "Missing required branches: {}",
            verification.missing_branches.join(", ")
        )
    }
}

/// Turns a failed verification into `Error::MissingBranches`.
pub fn require_success(verification: BranchVerification) -> Result<(), Error> {
    if verification.success {
        Ok(())
    } else {
        Err(Error::MissingBranches(verification.missing_branches))
    }
}
