//! Resume sections offered on the toggle page.
//!
//! The list is read once at startup, either from the TOML file named by
//! `SECTIONS_CONFIG` or from the built-in defaults:
//!
//! ```toml
//! [[sections]]
//! name = "Work Experience"
//! enabled = true
//! ```

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

use crate::field_name::SectionLabel;
use crate::form::SUBMITTED_MARKER;

/// Env var naming an optional TOML file with the section list.
pub const SECTIONS_CONFIG_ENV: &str = "SECTIONS_CONFIG";

/// Built-in sections, in display order, with their default state.
const DEFAULT_SECTIONS: &[(&str, bool)] = &[
    ("Professional Summary", true),
    ("Skills", true),
    ("Work Experience", true),
    ("Education", true),
    ("Technical Projects", false),
    ("Accomplishments", false),
];

static SECTIONS: OnceLock<SectionsConfig> = OnceLock::new();

// ── TOML shape ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    sections: Vec<SectionEntry>,
}

// ── Public config ─────────────────────────────────────────────────────────────

/// One toggle on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub name: SectionLabel,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no sections configured")]
    Empty,
    #[error("sections {first:?} and {second:?} both use the field name {field:?}")]
    DuplicateFieldName { first: String, second: String, field: String },
    #[error("section {label:?} uses the reserved field name {field:?}")]
    ReservedFieldName { label: String, field: String },
}

/// Ordered, validated list of resume sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionsConfig {
    sections: Vec<SectionEntry>,
}

impl SectionsConfig {
    /// Validate a section list: non-empty, and every entry must map to its own
    /// form field.
    pub fn new(sections: Vec<SectionEntry>) -> Result<Self, ConfigError> {
        if sections.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut seen: HashMap<String, &SectionLabel> = HashMap::new();
        for entry in &sections {
            let field = entry.name.field_name();
            if field == SUBMITTED_MARKER {
                return Err(ConfigError::ReservedFieldName {
                    label: entry.name.to_string(),
                    field,
                });
            }
            if let Some(first) = seen.get(&field) {
                return Err(ConfigError::DuplicateFieldName {
                    first: first.to_string(),
                    second: entry.name.to_string(),
                    field,
                });
            }
            seen.insert(field, &entry.name);
        }

        Ok(Self { sections })
    }

    /// Parse the TOML form of the config.
    pub fn parse(content: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(content).context("Failed to parse sections config")?;
        Ok(Self::new(file.sections)?)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sections config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid sections config: {}", path.display()))
    }

    /// Load from `$SECTIONS_CONFIG` when set, otherwise use the defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(SECTIONS_CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn sections(&self) -> &[SectionEntry] {
        &self.sections
    }
}

impl Default for SectionsConfig {
    fn default() -> Self {
        let sections = DEFAULT_SECTIONS
            .iter()
            .map(|&(name, enabled)| SectionEntry {
                name: SectionLabel::from_static(name),
                enabled,
            })
            .collect();
        Self { sections }
    }
}

/// Install the process-wide section list. Must be called at most once, before
/// the server starts answering requests.
pub fn init_sections(config: SectionsConfig) -> Result<()> {
    SECTIONS
        .set(config)
        .map_err(|_| anyhow!("sections config already initialized"))
}

/// The process-wide section list; the defaults if `init_sections` never ran.
pub fn sections_config() -> &'static SectionsConfig {
    SECTIONS.get_or_init(SectionsConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn entry(name: &str, enabled: bool) -> SectionEntry {
        SectionEntry {
            name: SectionLabel::new(name).unwrap(),
            enabled,
        }
    }

    #[test]
    fn defaults_are_valid() {
        let defaults = SectionsConfig::default();
        assert_eq!(defaults.sections().len(), DEFAULT_SECTIONS.len());
        assert_eq!(SectionsConfig::new(defaults.sections().to_vec()), Ok(defaults.clone()));
        for entry in defaults.sections() {
            assert_eq!(SectionLabel::new(entry.name.as_str()), Ok(entry.name.clone()));
        }

        let work = &defaults.sections()[2];
        assert_eq!(work.name.as_str(), "Work Experience");
        assert!(work.enabled);
        assert!(!defaults.sections()[4].enabled);
    }

    #[test]
    fn parse_toml() {
        let config = SectionsConfig::parse(
            r#"
            [[sections]]
            name = "Projects"
            enabled = true

            [[sections]]
            name = "Open Source Contributions"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.sections(),
            &[entry("Projects", true), entry("Open Source Contributions", false)]
        );
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(SectionsConfig::new(vec![]), Err(ConfigError::Empty));
        assert!(SectionsConfig::parse("").is_err());
    }

    #[test]
    fn rejects_blank_label() {
        let err = SectionsConfig::parse("[[sections]]\nname = \"   \"\n").unwrap_err();
        assert!(format!("{:#}", err).contains("non-whitespace"));
    }

    #[test]
    fn rejects_colliding_field_names() {
        let err = SectionsConfig::new(vec![entry("Work Experience", true), entry("work   experience", false)]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateFieldName {
                first: "Work Experience".into(),
                second: "work   experience".into(),
                field: "work-experience".into(),
            }
        );
    }

    #[test]
    fn rejects_reserved_marker() {
        let err = SectionsConfig::new(vec![entry("_Submitted", false)]).unwrap_err();
        assert!(matches!(err, ConfigError::ReservedFieldName { .. }));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[sections]]\nname = \"Skills\"\nenabled = true").unwrap();

        let config = SectionsConfig::load(file.path()).unwrap();
        assert_eq!(config.sections(), &[entry("Skills", true)]);
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = SectionsConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
