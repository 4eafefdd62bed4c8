//! Label check command.

use tracing::info;
use version_labeler_core::{LabelCheckOutcome, LabelChecker};

use crate::{annotations, errors::Error, inputs::ActionContext};

#[cfg(test)]
#[path = "check_labels_cmd_tests.rs"]
mod check_labels_cmd_tests;

/// Creates the catalog labels the repository is missing.
pub async fn check_labels(context: &ActionContext) -> Result<LabelCheckOutcome, Error> {
    let checker = LabelChecker::new(
        context.client.clone(),
        context.repository.clone(),
        context.catalog.clone(),
    );

    let outcome = checker.ensure_labels_exist().await?;
    if outcome.has_changes() {
        annotations::notice(&describe(&outcome));
    } else {
        info!("Version labels are up to date");
    }

    Ok(outcome)
}

pub fn describe(outcome: &LabelCheckOutcome) -> String {
    if outcome.has_changes() {
        let names: Vec<&str> = outcome.created.iter().map(|b| b.label_name()).collect();
        format!("Created labels: {}", names.join(", "))
    } else {
        "All version labels exist".to_string()
    }
}
