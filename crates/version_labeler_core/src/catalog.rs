//! The catalog of version bump labels.
//!
//! The catalog maps each [`BumpType`] to the label that represents it in a
//! repository: its description, color and priority. It is validated once when it
//! is built and is immutable afterwards; components that need it receive it at
//! construction.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::color::HexColor;
use crate::errors::ValidationError;

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;

/// The kind of version bump a label requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    Major,
    Minor,
    Patch,
}

impl BumpType {
    /// Every bump type, highest default priority first.
    pub const ALL: [BumpType; 3] = [BumpType::Major, BumpType::Minor, BumpType::Patch];

    /// The label name used for this bump type.
    pub fn label_name(&self) -> &'static str {
        match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
        }
    }

    /// Looks up a bump type from a label name, ignoring case.
    ///
    /// Returns `None` for labels that are not version bump labels.
    pub fn from_label_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|b| b.label_name() == name)
    }

    fn default_definition(&self) -> (&'static str, &'static str, u32) {
        match self {
            BumpType::Major => ("Major version bump", "d73a4a", 3),
            BumpType::Minor => ("Minor version bump", "2ea44f", 2),
            BumpType::Patch => ("Patch version bump", "0969da", 1),
        }
    }
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label_name())
    }
}

impl FromStr for BumpType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label_name(s).ok_or_else(|| {
            ValidationError::invalid_format("bump_type", "expected one of major, minor, patch")
        })
    }
}

/// A label the catalog keeps in every repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDefinition {
    pub bump: BumpType,
    pub description: String,
    pub color: HexColor,

    /// Higher wins when several bump labels are linked to one pull request.
    pub priority: u32,
}

impl LabelDefinition {
    /// Creates a label definition, validating the color code.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidColor` if `color` is not six hex digits.
    pub fn new(
        bump: BumpType,
        description: impl Into<String>,
        color: &str,
        priority: u32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            bump,
            description: description.into(),
            color: HexColor::new(color)?,
            priority,
        })
    }

    /// The built-in definition for a bump type, using GitHub's default red, green and blue.
    pub fn builtin(bump: BumpType) -> Self {
        let (description, color, priority) = bump.default_definition();
        Self {
            bump,
            description: description.to_string(),
            color: HexColor::new_unchecked(color),
            priority,
        }
    }

    pub fn name(&self) -> &'static str {
        self.bump.label_name()
    }
}

/// The validated, immutable set of version bump labels.
///
/// # Examples
///
/// ```
/// use version_labeler_core::{BumpType, LabelCatalog};
///
/// let catalog = LabelCatalog::default();
/// assert_eq!(catalog.priority_of(BumpType::Major), 3);
/// assert_eq!(catalog.get(BumpType::Patch).color.as_str(), "0969da");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCatalog {
    entries: Vec<LabelDefinition>,
}

impl LabelCatalog {
    /// Builds a catalog from label definitions.
    ///
    /// # Validation Rules
    /// - Each bump type appears exactly once
    /// - Priorities are unique, so they form a total order
    ///
    /// Colors are already validated by [`LabelDefinition`]. A color on which
    /// neither black nor white text is readable is logged as a warning.
    ///
    /// # Errors
    /// Returns `ValidationError` if a rule is broken.
    pub fn new(entries: Vec<LabelDefinition>) -> Result<Self, ValidationError> {
        let mut names = HashSet::new();
        let mut priorities = HashSet::new();

        for entry in &entries {
            if !names.insert(entry.bump) {
                return Err(ValidationError::DuplicateCatalogEntry {
                    value: entry.name().to_string(),
                });
            }

            if !priorities.insert(entry.priority) {
                return Err(ValidationError::DuplicateCatalogEntry {
                    value: format!("priority {}", entry.priority),
                });
            }

            match entry.color.accessible_text_color() {
                Some(text) => debug!(
                    label = entry.name(),
                    color = %entry.color,
                    text_color = %text,
                    "Label color validated"
                ),
                None => warn!(
                    label = entry.name(),
                    color = %entry.color,
                    "Label color has poor contrast with both black and white text"
                ),
            }
        }

        if let Some(missing) = BumpType::ALL.iter().find(|b| !names.contains(*b)) {
            return Err(ValidationError::invalid_format(
                "label_catalog",
                format!("missing entry for '{}'", missing),
            ));
        }

        let mut entries = entries;
        entries.sort_by_key(|e| e.bump);

        Ok(Self { entries })
    }

    /// The definition for a bump type.
    pub fn get(&self, bump: BumpType) -> &LabelDefinition {
        // Construction guarantees one entry per bump type, sorted by bump type.
        &self.entries[bump as usize]
    }

    pub fn priority_of(&self, bump: BumpType) -> u32 {
        self.get(bump).priority
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelDefinition> {
        self.entries.iter()
    }
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self {
            entries: BumpType::ALL
                .into_iter()
                .map(LabelDefinition::builtin)
                .collect(),
        }
    }
}
