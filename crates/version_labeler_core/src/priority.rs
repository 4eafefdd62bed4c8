//! Selection of the single version bump label to apply to a pull request.

use github_client::Label;

use crate::catalog::{BumpType, LabelCatalog};

#[cfg(test)]
#[path = "priority_tests.rs"]
mod tests;

/// A version bump label found on a linked issue, with its catalog priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityLabel {
    pub bump: BumpType,
    pub priority: u32,

    /// The color of the label on the issue it was found on.
    pub color: String,
}

impl PriorityLabel {
    pub fn name(&self) -> &'static str {
        self.bump.label_name()
    }
}

/// Keeps the labels that name a bump type (ignoring case) and attaches their priority.
pub fn priority_labels(labels: &[Label], catalog: &LabelCatalog) -> Vec<PriorityLabel> {
    labels
        .iter()
        .filter_map(|label| {
            let bump = BumpType::from_label_name(&label.name)?;
            Some(PriorityLabel {
                bump,
                priority: catalog.priority_of(bump),
                color: label.color.clone(),
            })
        })
        .collect()
}

/// Picks the highest priority bump label from the labels of all linked issues.
///
/// Labels that are not bump labels are ignored. When two labels share the highest
/// priority the first one wins. Returns `None` when no bump label is present.
///
/// # Examples
///
/// ```
/// use github_client::Label;
/// use version_labeler_core::{resolve_priority_label, BumpType, LabelCatalog};
///
/// let labels = vec![Label::new("minor", ""), Label::new("bug", ""), Label::new("major", "")];
/// let selected = resolve_priority_label(&labels, &LabelCatalog::default()).unwrap();
/// assert_eq!(selected.bump, BumpType::Major);
/// ```
pub fn resolve_priority_label(labels: &[Label], catalog: &LabelCatalog) -> Option<PriorityLabel> {
    priority_labels(labels, catalog)
        .into_iter()
        .reduce(|highest, current| {
            if current.priority > highest.priority {
                current
            } else {
                highest
            }
        })
}
