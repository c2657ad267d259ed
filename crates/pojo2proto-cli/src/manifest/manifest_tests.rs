#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

// Manifest parsing tests

#[test]
fn Manifest___from_str___parses_valid_toml() {
    let toml = r#"
[project]
name = "acme-model"
group = "com.acme"

[generator]
package_name = "com.acme.proto"
single_file = true
exclude_fields = ["serialVersionUID", "log"]
log_level = "debug"
"#;

    let manifest = Manifest::from_str(toml).unwrap();

    assert_eq!(manifest.project.name.as_deref(), Some("acme-model"));
    assert_eq!(manifest.project.group.as_deref(), Some("com.acme"));
    assert_eq!(
        manifest.generator.package_name.as_deref(),
        Some("com.acme.proto")
    );
    assert!(manifest.generator.single_file);
    assert_eq!(manifest.generator.exclude_fields.len(), 2);
}

#[test]
fn Manifest___from_str___parses_empty_manifest() {
    let manifest = Manifest::from_str("").unwrap();

    assert!(manifest.project.name.is_none());
    assert!(!manifest.generator.single_file);
    assert!(manifest.generator.exclude_fields.is_empty());
}

#[test]
fn Manifest___from_str___rejects_invalid_toml() {
    assert!(Manifest::from_str("[project\nname = ").is_err());
}

#[test]
fn Manifest___from_file___missing_file___errors() {
    let err = Manifest::from_file("/nonexistent/pojo2proto.toml").unwrap_err();

    assert!(err.to_string().contains("Failed to read manifest"));
}

#[test]
fn Manifest___from_file___reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_MANIFEST);
    fs::write(&path, "[project]\nname = \"from-disk\"\n").unwrap();

    let manifest = Manifest::from_file(&path).unwrap();

    assert_eq!(manifest.project.name.as_deref(), Some("from-disk"));
}

// Manifest validation tests

#[test]
fn Manifest___validate___accepts_valid_manifest() {
    let manifest = Manifest {
        project: ProjectSection {
            name: Some("acme".to_string()),
            group: Some("com.acme".to_string()),
        },
        generator: GeneratorSection {
            package_name: Some("com.acme.proto".to_string()),
            single_file: false,
            exclude_fields: vec!["serialVersionUID".to_string()],
            log_level: Some("INFO".to_string()),
        },
    };

    assert!(manifest.validate().is_ok());
}

#[test]
fn Manifest___validate___accepts_default_manifest() {
    assert!(Manifest::default().validate().is_ok());
}

#[test]
fn Manifest___validate___rejects_empty_project_name() {
    let manifest = Manifest {
        project: ProjectSection {
            name: Some("  ".to_string()),
            group: None,
        },
        ..Manifest::default()
    };

    assert!(manifest.validate().is_err());
}

#[test]
fn Manifest___validate___rejects_invalid_package_name() {
    let manifest = Manifest {
        generator: GeneratorSection {
            package_name: Some("com..acme".to_string()),
            ..GeneratorSection::default()
        },
        ..Manifest::default()
    };

    assert!(manifest.validate().is_err());
}

#[test]
fn Manifest___validate___rejects_invalid_group() {
    let manifest = Manifest {
        project: ProjectSection {
            name: None,
            group: Some("com.1acme".to_string()),
        },
        ..Manifest::default()
    };

    assert!(manifest.validate().is_err());
}

#[test]
fn Manifest___validate___rejects_empty_excluded_field() {
    let manifest = Manifest {
        generator: GeneratorSection {
            exclude_fields: vec!["ok".to_string(), "".to_string()],
            ..GeneratorSection::default()
        },
        ..Manifest::default()
    };

    assert!(manifest.validate().is_err());
}

#[test]
fn Manifest___validate___rejects_unknown_log_level() {
    let manifest = Manifest {
        generator: GeneratorSection {
            log_level: Some("loud".to_string()),
            ..GeneratorSection::default()
        },
        ..Manifest::default()
    };

    assert!(manifest.validate().is_err());
}

// Conversion tests

#[test]
fn Manifest___into_config___maps_every_section() {
    let manifest = Manifest::from_str(
        r#"
[project]
name = "acme-model"
group = "com.acme"

[generator]
single_file = true
exclude_fields = ["log"]
"#,
    )
    .unwrap();

    let config = manifest.into_config();

    assert_eq!(config.project_name, "acme-model");
    assert_eq!(config.project_group.as_deref(), Some("com.acme"));
    assert_eq!(config.effective_package(), Some("com.acme"));
    assert!(config.single_file);
    assert_eq!(config.exclude_fields, vec!["log".to_string()]);
    assert_eq!(config.log_level, "info");
}

#[test]
fn Manifest___into_config___defaults_project_name() {
    let config = Manifest::default().into_config();

    assert_eq!(config.project_name, "schema");
    assert_eq!(config.effective_package(), None);
}

// Helper tests

#[test]
fn is_valid_package___accepts_dotted_identifiers() {
    assert!(is_valid_package("com.acme.proto"));
    assert!(is_valid_package("single"));
    assert!(is_valid_package("_internal.v2"));
}

#[test]
fn is_valid_package___rejects_malformed_names() {
    assert!(!is_valid_package(".com"));
    assert!(!is_valid_package("com."));
    assert!(!is_valid_package("com.acme-model"));
    assert!(!is_valid_package("2com"));
}

// Check command tests

#[test]
fn check___valid_manifest___succeeds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_MANIFEST);
    fs::write(&path, "[project]\nname = \"acme\"\n").unwrap();

    assert!(check(Some(path.to_string_lossy().into_owned())).is_ok());
}

#[test]
fn check___invalid_manifest___fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_MANIFEST);
    fs::write(&path, "[generator]\npackage_name = \"not a package\"\n").unwrap();

    assert!(check(Some(path.to_string_lossy().into_owned())).is_err());
}
