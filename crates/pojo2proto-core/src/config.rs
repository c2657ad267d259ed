//! Generator configuration types

use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};

/// Output strategy for a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// One schema document per declared type and top-level enum
    #[default]
    PerType,
    /// One schema document for all declarations
    Aggregate,
}

/// Configuration consumed by the generator engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Target schema package
    #[serde(default)]
    pub package_name: Option<String>,

    /// Fallback package used when `package_name` is absent or empty
    #[serde(default)]
    pub project_group: Option<String>,

    /// Emit a single aggregate document instead of one per type
    #[serde(default)]
    pub single_file: bool,

    /// Base name of the aggregate document
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Field names that are never emitted
    #[serde(default)]
    pub exclude_fields: Vec<String>,

    /// Log level filter for the command-line tool
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_project_name() -> String {
    "schema".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_name: None,
            project_group: None,
            single_file: false,
            project_name: default_project_name(),
            exclude_fields: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Output strategy selected by `single_file`
    pub fn mode(&self) -> OutputMode {
        if self.single_file {
            OutputMode::Aggregate
        } else {
            OutputMode::PerType
        }
    }

    /// Check that the configuration can name its outputs
    pub fn validate(&self) -> CodegenResult<()> {
        let name = self.project_name.trim();
        if name.is_empty() {
            return Err(CodegenError::Config("project name cannot be empty".into()));
        }
        if name.contains(['/', '\\']) {
            return Err(CodegenError::Config(format!(
                "project name '{name}' must not contain path separators"
            )));
        }
        if self.exclude_fields.iter().any(|f| f.trim().is_empty()) {
            return Err(CodegenError::Config(
                "excluded field names cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// Package written into schema headers, if any
    ///
    /// `package_name` wins when non-empty; otherwise `project_group`.
    pub fn effective_package(&self) -> Option<&str> {
        [self.package_name.as_deref(), self.project_group.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|p| !p.is_empty())
    }
}
