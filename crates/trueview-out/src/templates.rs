//! Template loading and management for TrueView reports.
//!
//! A templates file is a `version` plus a map of named Handlebars templates.
//!
//! A copy of the workspace `templates/report-templates.yaml` is compiled in, so
//! rendering works without any file on disk.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

/// Built-in templates, embedded at compile time
const BUILTIN_YAML: &str = include_str!("../../../templates/report-templates.yaml");

static BUILTIN: Lazy<Result<TemplatesFile, String>> = Lazy::new(|| TemplatesFile::from_yaml(BUILTIN_YAML));

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

impl TemplatesFile {
    /// Load templates from a YAML file
    pub fn load(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read templates file {}: {}", path, e))?;
        Self::from_yaml(&content)
    }

    /// The compiled-in templates
    pub fn builtin() -> Result<Self, String> {
        BUILTIN.clone()
    }

    /// Load from `path` if given, otherwise the built-in set
    pub fn load_or_builtin(path: Option<&str>) -> Result<Self, String> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse templates YAML: {}", e))
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        let yaml = r#"
version: "1.0"
templates:
  verdict:
    description: One verdict
    template: "{{label}}"
"#;

        let file = TemplatesFile::from_yaml(yaml).unwrap();
        assert_eq!(file.version, "1.0");
        assert_eq!(file.get("verdict").map(|t| t.template.as_str()), Some("{{label}}"));
    }

    #[test]
    fn test_missing_templates_map() {
        assert!(TemplatesFile::from_yaml("template: \"{{overall}}\"").is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(TemplatesFile::from_yaml("templates: [").is_err());
    }

    #[test]
    fn test_builtin_templates() {
        let file = TemplatesFile::builtin().unwrap();
        for name in ["metric_breakdown", "reasoning_list", "report_markdown", "report_summary", "verdict_cards"] {
            assert!(file.get(name).is_some(), "missing built-in template {}", name);
        }
    }
}
