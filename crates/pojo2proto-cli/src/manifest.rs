//! Manifest parsing and validation

use anyhow::{Context, Result};
use pojo2proto::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default manifest file name, looked up in the working directory
pub const DEFAULT_MANIFEST: &str = "pojo2proto.toml";

/// pojo2proto.toml manifest structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub project: ProjectSection,

    #[serde(default)]
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSection {
    #[serde(default)]
    pub name: Option<String>,

    /// Used as the schema package when `generator.package_name` is unset
    #[serde(default)]
    pub group: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorSection {
    #[serde(default)]
    pub package_name: Option<String>,

    #[serde(default)]
    pub single_file: bool,

    #[serde(default)]
    pub exclude_fields: Vec<String>,

    #[serde(default)]
    pub log_level: Option<String>,
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.project.name
            && name.trim().is_empty()
        {
            anyhow::bail!("Project name cannot be empty");
        }

        if let Some(group) = &self.project.group
            && !group.is_empty()
            && !is_valid_package(group)
        {
            anyhow::bail!("Invalid project group: {}", group);
        }

        if let Some(package) = &self.generator.package_name
            && !package.is_empty()
            && !is_valid_package(package)
        {
            anyhow::bail!("Invalid package name: {}", package);
        }

        if self.generator.exclude_fields.iter().any(|f| f.trim().is_empty()) {
            anyhow::bail!("Excluded field names cannot be empty");
        }

        if let Some(level) = &self.generator.log_level
            && !is_valid_log_level(level)
        {
            anyhow::bail!("Invalid log level: {}", level);
        }

        Ok(())
    }

    /// Convert into engine configuration
    pub fn into_config(self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();

        GeneratorConfig {
            package_name: self.generator.package_name,
            project_group: self.project.group,
            single_file: self.generator.single_file,
            project_name: self.project.name.unwrap_or(defaults.project_name),
            exclude_fields: self.generator.exclude_fields,
            log_level: self.generator.log_level.unwrap_or(defaults.log_level),
        }
    }
}

/// Check if a string is a dotted package name, e.g. `com.acme.proto`
fn is_valid_package(package: &str) -> bool {
    package.split('.').all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    })
}

/// Check if a string is a level name accepted by the log filter
fn is_valid_log_level(level: &str) -> bool {
    let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];

    valid_levels.contains(&level.to_ascii_lowercase().as_str())
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

    println!("Checking manifest: {}", path);

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    let config = manifest.into_config();
    let mode = if config.single_file {
        format!("single file ({})", pojo2proto::schema_file_name(&config.project_name))
    } else {
        "one file per type".to_string()
    };

    println!("✓ Project: {}", config.project_name);
    println!(
        "✓ Package: {}",
        config.effective_package().unwrap_or("(none)")
    );
    println!("✓ Output: {}", mode);
    println!("✓ Excluded fields: {}", config.exclude_fields.len());
    println!("\nManifest is valid!");

    Ok(())
}

#[cfg(test)]
#[path = "manifest/manifest_tests.rs"]
mod manifest_tests;
