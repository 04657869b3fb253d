//! Checked state of the section form.
//!
//! The page submits with GET, so a submission arrives as query keys: one per
//! checked box plus the hidden marker field. Toggles never track their own
//! state; the page recomputes it from the query on every render.

use crate::config::SectionEntry;

/// Name of the hidden field sent with every form submission.
pub const SUBMITTED_MARKER: &str = "_submitted";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleState {
    pub label: String,
    pub checked: bool,
}

/// Resolve each section's checked state.
///
/// `has_key` reports whether the request query contains a key. Without the
/// marker the configured defaults apply; with it, a section is checked only
/// if its field name was submitted.
pub fn toggle_states(sections: &[SectionEntry], has_key: impl Fn(&str) -> bool) -> Vec<ToggleState> {
    let submitted = has_key(SUBMITTED_MARKER);

    sections
        .iter()
        .map(|entry| {
            let checked = if submitted {
                has_key(&entry.name.field_name())
            } else {
                entry.enabled
            };
            ToggleState {
                label: entry.name.to_string(),
                checked,
            }
        })
        .collect()
}

/// Labels of the sections currently included, in display order.
pub fn included_labels(states: &[ToggleState]) -> Vec<&str> {
    states
        .iter()
        .filter(|s| s.checked)
        .map(|s| s.label.as_str())
        .collect()
}
