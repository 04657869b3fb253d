//! Form-field names derived from resume section labels.
//!
//! A label like "Work Experience" becomes the checkbox name `work-experience`:
//! lower-cased, with each run of whitespace collapsed to a single hyphen.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Derive the form-field name for a section label.
///
/// Leading and trailing whitespace is not trimmed, so `"  Skills   Summary "`
/// becomes `"-skills-summary-"`. An empty label yields an empty name.
///
/// Lower-casing applies to the whole label, so context rules such as the Greek
/// final sigma hold. Whitespace is the ECMAScript `\s` set: U+FEFF counts,
/// U+0085 does not.
pub fn field_name(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_whitespace = false;

    for c in lower.chars() {
        if is_field_whitespace(c) {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            out.push(c);
        }
    }

    out
}

fn is_field_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionLabelError {
    #[error("section label must contain at least one non-whitespace character")]
    Blank,
}

/// A resume section label that is known to contain visible text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionLabel(String);

impl SectionLabel {
    pub fn new(label: impl Into<String>) -> Result<Self, SectionLabelError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(SectionLabelError::Blank);
        }
        Ok(Self(label))
    }

    /// Built-in labels that are known to be non-blank.
    pub(crate) fn from_static(label: &'static str) -> Self {
        debug_assert!(!label.trim().is_empty(), "blank built-in section label");
        Self(label.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The checkbox name this label renders with.
    pub fn field_name(&self) -> String {
        field_name(&self.0)
    }
}

impl TryFrom<String> for SectionLabel {
    type Error = SectionLabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionLabel> for String {
    fn from(label: SectionLabel) -> Self {
        label.0
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(field_name("Work Experience"), "work-experience");
        assert_eq!(field_name("Projects"), "projects");
        assert_eq!(field_name("Open Source Contributions"), "open-source-contributions");
    }

    #[test]
    fn whitespace_runs_collapse_to_one_hyphen() {
        assert_eq!(field_name("  Skills   Summary "), "-skills-summary-");
        assert_eq!(field_name("Tech\t\nStack"), "tech-stack");
    }

    #[test]
    fn empty_and_blank_labels() {
        assert_eq!(field_name(""), "");
        assert_eq!(field_name("   "), "-");
    }

    #[test]
    fn non_ascii_labels() {
        assert_eq!(field_name("Éducation Supérieure"), "éducation-supérieure");
        // U+00A0 no-break space counts as whitespace
        assert_eq!(field_name("Side\u{00A0}Projects"), "side-projects");
    }

    #[test]
    fn greek_final_sigma() {
        assert_eq!(field_name("ΣΠΟΥΔΕΣ Εργασια"), "σπουδες-εργασια");
    }

    #[test]
    fn whitespace_matches_form_rules() {
        assert_eq!(field_name("A\u{FEFF}B"), "a-b");
        assert_eq!(field_name("A\u{0085}B"), "a\u{0085}b");
        assert_eq!(field_name("A\u{3000}\u{2028}B"), "a-b");
    }

    #[test]
    fn same_input_same_name() {
        let label = "Volunteer   Work";
        assert_eq!(field_name(label), field_name(label));
    }

    #[test]
    fn section_label_rejects_blank() {
        assert_eq!(SectionLabel::new(""), Err(SectionLabelError::Blank));
        assert_eq!(SectionLabel::new(" \t "), Err(SectionLabelError::Blank));
    }

    #[test]
    fn section_label_keeps_text_verbatim() {
        let label = SectionLabel::new(" Skills ").unwrap();
        assert_eq!(label.as_str(), " Skills ");
        assert_eq!(label.to_string(), " Skills ");
        assert_eq!(label.field_name(), "-skills-");
    }
}
