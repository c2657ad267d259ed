//! Schema generation command

use crate::manifest::{DEFAULT_MANIFEST, Manifest};
use anyhow::{Context, Result};
use pojo2proto::{DeclarationSet, GenerationReport, GeneratorConfig, OutputUnit};
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line values that override the manifest
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub package: Option<String>,
    pub single_file: bool,
    pub project_name: Option<String>,
}

impl Overrides {
    /// Apply these overrides on top of a manifest-derived configuration
    pub fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(package) = self.package {
            config.package_name = Some(package);
        }
        if self.single_file {
            config.single_file = true;
        }
        if let Some(project_name) = self.project_name {
            config.project_name = project_name;
        }
        config
    }
}

/// Load the manifest at `path`, or the default manifest if one exists.
///
/// An explicit path must exist. Without one, a missing default manifest
/// yields an empty manifest.
pub fn load_manifest(path: Option<&str>) -> Result<Manifest> {
    let manifest = match path {
        Some(path) => Manifest::from_file(path)?,
        None if Path::new(DEFAULT_MANIFEST).exists() => Manifest::from_file(DEFAULT_MANIFEST)?,
        None => Manifest::default(),
    };
    manifest.validate()?;
    Ok(manifest)
}

/// Resolve the engine configuration from the manifest and command-line overrides
pub fn resolve_config(manifest_path: Option<&str>, overrides: Overrides) -> Result<GeneratorConfig> {
    let manifest = load_manifest(manifest_path)?;
    let config = overrides.apply(manifest.into_config());
    config.validate().context("Invalid generator configuration")?;
    Ok(config)
}

/// Run schema generation
pub fn run(input: &str, output: &str, config: &GeneratorConfig) -> Result<()> {
    let set = read_declarations(Path::new(input))?;

    tracing::info!(
        "Generating schemas for {} compilation units from {}",
        set.units.len(),
        input
    );

    let report = pojo2proto::generate(&set, config);
    let written = write_outputs(Path::new(output), &report.outputs)?;

    summarize(&report, written.len())
}

/// Read a declaration set produced by the external parser
fn read_declarations(path: &Path) -> Result<DeclarationSet> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read declarations: {:?}", path))?;

    DeclarationSet::from_json(&bytes)
        .with_context(|| format!("Failed to parse declarations: {:?}", path))
}

/// Write every output unit into `output_dir`, creating it if needed
pub fn write_outputs(output_dir: &Path, outputs: &[OutputUnit]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let mut written = Vec::with_capacity(outputs.len());
    for output in outputs {
        let path = output_dir.join(&output.file_name);
        fs::write(&path, &output.content)
            .with_context(|| format!("Failed to write schema: {:?}", path))?;

        tracing::info!("Generated {}", path.display());
        written.push(path);
    }

    Ok(written)
}

fn summarize(report: &GenerationReport, written: usize) -> Result<()> {
    if !report.caveats.is_empty() {
        tracing::info!("{} caveat(s) reported", report.caveats.len());
    }

    if !report.is_success() {
        for failure in &report.failures {
            tracing::error!("{}", failure);
        }
        anyhow::bail!(
            "{} declaration(s) failed to generate; {} file(s) written",
            report.failures.len(),
            written
        );
    }

    tracing::info!("Wrote {} schema file(s)", written);
    Ok(())
}
