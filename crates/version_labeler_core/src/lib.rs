//! # Version Labeler Core
//!
//! Domain logic for keeping semantic version bump labels on pull requests.
//!
//! ## Overview
//!
//! A repository carries three labels, `major`, `minor` and `patch`, each with a
//! priority. When a pull request closes issues through keywords in its
//! description ("Fixes #12"), the highest priority bump label found on those
//! issues is copied onto the pull request. The crate provides:
//!
//! - [`LabelChecker`] - Creates the catalog labels a repository is missing
//! - [`LabelSyncer`] - Copies the bump label from linked issues to a pull request
//! - [`BranchVerifier`] - Checks that the release flow branches exist
//! - [`PullRequestLocator`] - Finds the open pull request of a commit
//!
//! All GitHub access goes through the [`github_client::RepositoryClient`] trait so the
//! components can be driven by any implementation of it.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use github_client::{create_token_client, GitHubClient};
//! use secrecy::SecretString;
//! use version_labeler_core::{LabelCatalog, LabelSyncer, PullNumber, RepositoryPath};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let token = SecretString::from("ghp_example".to_string());
//! let client = GitHubClient::new(create_token_client(&token, None)?);
//!
//! let syncer = LabelSyncer::new(
//!     Arc::new(client),
//!     RepositoryPath::parse("octo-org/hello-world")?,
//!     PullNumber::new(42)?,
//!     Arc::new(LabelCatalog::default()),
//! );
//!
//! let outcome = syncer.sync_labels().await?;
//! println!("{}", outcome.describe());
//! # Ok(())
//! # }
//! ```

pub mod branch_verifier;
pub mod catalog;
pub mod color;
pub mod errors;
pub mod label_checker;
pub mod label_syncer;
pub mod linked_issues;
pub mod priority;
pub mod pull_request_locator;
pub mod repository;

#[cfg(test)]
mod test_support;

pub use branch_verifier::{
    BranchConfig, BranchRole, BranchSetting, BranchVerification, BranchVerifier,
};
pub use catalog::{BumpType, LabelCatalog, LabelDefinition};
pub use color::HexColor;
pub use errors::{LabelerError, LabelerResult, ValidationError};
pub use label_checker::{LabelCheckOutcome, LabelChecker};
pub use label_syncer::{LabelSyncer, SyncOutcome};
pub use linked_issues::{extract_linked_issues, unique_issue_numbers, CLOSING_KEYWORDS};
pub use priority::{resolve_priority_label, PriorityLabel};
pub use pull_request_locator::PullRequestLocator;
pub use repository::{OwnerName, PullNumber, RepositoryName, RepositoryPath};
