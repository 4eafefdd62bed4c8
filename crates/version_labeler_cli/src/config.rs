//! Configuration file for the version labeler.
//!
//! The configuration is an optional TOML file. Every field has a default, so an
//! empty file (or no file at all) gives the built-in label catalog and the
//! `main`, `stage` and `release` branches.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use version_labeler_core::{BranchConfig, BumpType, LabelCatalog, LabelDefinition};

use crate::errors::Error;

/// Configuration file read when no path is given
pub const DEFAULT_CONFIG_PATH: &str = ".github/version-labeler.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the version labeler.
///
/// # Example TOML Configuration
///
/// ```toml
/// [labels.major]
/// description = "Breaking change"
/// color = "b60205"
///
/// [labels.patch]
/// priority = 1
///
/// [branches.staging]
/// is_used = false
///
/// [branches.production]
/// name = "prod"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides for the built-in bump labels
    pub labels: LabelsConfig,

    /// Branches the repository must have
    pub branches: BranchConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelsConfig {
    pub major: LabelOverride,
    pub minor: LabelOverride,
    pub patch: LabelOverride,
}

impl LabelsConfig {
    pub fn get(&self, bump: BumpType) -> &LabelOverride {
        match bump {
            BumpType::Major => &self.major,
            BumpType::Minor => &self.minor,
            BumpType::Patch => &self.patch,
        }
    }
}

/// Replaces fields of a built-in label definition. Absent fields keep the built-in value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Six hex digits, without `#`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read or
    /// contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads the configuration for a run.
    ///
    /// An explicitly given path must exist. Without one the file at
    /// [`DEFAULT_CONFIG_PATH`] is used if present, and the defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, Error> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    info!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Builds the label catalog from the built-in definitions and the overrides.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if an override color is not a valid hex code or
    /// two labels end up with the same priority.
    pub fn catalog(&self) -> Result<LabelCatalog, Error> {
        let definitions = BumpType::ALL
            .into_iter()
            .map(|bump| {
                let builtin = LabelDefinition::builtin(bump);
                let overrides = self.labels.get(bump);

                LabelDefinition::new(
                    bump,
                    overrides
                        .description
                        .clone()
                        .unwrap_or(builtin.description),
                    overrides
                        .color
                        .as_deref()
                        .unwrap_or(builtin.color.as_str()),
                    overrides.priority.unwrap_or(builtin.priority),
                )
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::Config(format!("Invalid label configuration: {}", e)))?;

        LabelCatalog::new(definitions)
            .map_err(|e| Error::Config(format!("Invalid label configuration: {}", e)))
    }
}
