//! Read-only check that the release flow branches exist in a repository.

use github_client::RepositoryClient;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::errors::{LabelerError, LabelerResult};
use crate::repository::RepositoryPath;

#[cfg(test)]
#[path = "branch_verifier_tests.rs"]
mod tests;

/// The role a branch plays in the release flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchRole {
    Development,
    Staging,
    Production,
}

impl BranchRole {
    pub const ALL: [BranchRole; 3] = [
        BranchRole::Development,
        BranchRole::Staging,
        BranchRole::Production,
    ];

    /// The branch name used when the configuration does not name one.
    pub fn default_name(&self) -> &'static str {
        match self {
            BranchRole::Development => "main",
            BranchRole::Staging => "stage",
            BranchRole::Production => "release",
        }
    }
}

fn default_is_used() -> bool {
    true
}

/// Configuration of a single required branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchSetting {
    /// Branch name; the role's default name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the branch is required at all
    #[serde(default = "default_is_used")]
    pub is_used: bool,
}

impl BranchSetting {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            is_used: true,
        }
    }

    pub fn unused() -> Self {
        Self {
            name: None,
            is_used: false,
        }
    }
}

impl Default for BranchSetting {
    fn default() -> Self {
        Self {
            name: None,
            is_used: true,
        }
    }
}

/// The branches a repository is expected to have.
///
/// Defaults to `main`, `stage` and `release`, all required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchConfig {
    pub development: BranchSetting,
    pub staging: BranchSetting,
    pub production: BranchSetting,
}

impl BranchConfig {
    pub fn setting(&self, role: BranchRole) -> &BranchSetting {
        match role {
            BranchRole::Development => &self.development,
            BranchRole::Staging => &self.staging,
            BranchRole::Production => &self.production,
        }
    }

    /// Names of the branches that must exist, in development, staging, production order.
    pub fn required_branches(&self) -> Vec<String> {
        BranchRole::ALL
            .iter()
            .filter_map(|role| {
                let setting = self.setting(*role);
                if !setting.is_used {
                    return None;
                }
                let name = setting
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .unwrap_or(role.default_name());
                Some(name.to_string())
            })
            .collect()
    }
}

/// Result of a branch verification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchVerification {
    pub success: bool,

    /// Required branches that do not exist, in configuration order
    pub missing_branches: Vec<String>,
}

/// Checks that the configured branches exist. Makes no changes to the repository.
pub struct BranchVerifier {
    client: Arc<dyn RepositoryClient>,
    repository: RepositoryPath,
    config: BranchConfig,
}

impl BranchVerifier {
    pub fn new(
        client: Arc<dyn RepositoryClient>,
        repository: RepositoryPath,
        config: BranchConfig,
    ) -> Self {
        Self {
            client,
            repository,
            config,
        }
    }

    /// Lists the names of all branches of the repository.
    ///
    /// # Errors
    ///
    /// Returns `LabelerError::VerifyBranches` if the branch list cannot be retrieved.
    #[instrument(skip(self), fields(repository = %self.repository))]
    pub async fn branches(&self) -> LabelerResult<Vec<String>> {
        let branches = self
            .client
            .list_branches(
                self.repository.owner().as_str(),
                self.repository.repo().as_str(),
            )
            .await
            .map_err(|source| {
                error!(error = %source, "Failed to retrieve branch list");
                LabelerError::VerifyBranches { source }
            })?;

        Ok(branches.into_iter().map(|branch| branch.name).collect())
    }

    /// Checks every required branch against the branch list.
    ///
    /// Branch names are compared exactly. Unused branches are not checked.
    #[instrument(skip(self), fields(repository = %self.repository))]
    pub async fn verify_branches(&self) -> LabelerResult<BranchVerification> {
        let existing: HashSet<String> = self.branches().await?.into_iter().collect();

        let missing_branches: Vec<String> = self
            .config
            .required_branches()
            .into_iter()
            .filter(|name| !existing.contains(name))
            .collect();

        if missing_branches.is_empty() {
            info!("All required branches exist");
        } else {
            warn!(missing = ?missing_branches, "Required branches are missing");
        }

        Ok(BranchVerification {
            success: missing_branches.is_empty(),
            missing_branches,
        })
    }
}
