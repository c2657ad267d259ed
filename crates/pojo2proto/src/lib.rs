//! # pojo2proto
//!
//! Generate proto3 schema documents from the declarations of plain data classes.
//!
//! pojo2proto consumes a [`DeclarationSet`] (the parsed shape of a set of source
//! files: classes, interfaces, enums and their fields) and produces one schema
//! document per type, or a single aggregate document for the whole set.
//!
//! ## Quick Start
//!
//! ```rust
//! use pojo2proto::prelude::*;
//!
//! let set = DeclarationSet {
//!     units: vec![
//!         CompilationUnit::of_type(
//!             TypeDeclaration::class("PersonPojo")
//!                 .with_field(Field::new("name", "String"))
//!                 .with_field(Field::new("addresses", "List<Address>")),
//!         ),
//!         CompilationUnit::of_enum(EnumDeclaration::new("Color", ["RED", "GREEN"])),
//!     ],
//! };
//!
//! let report = pojo2proto::generate(&set, &GeneratorConfig::default());
//!
//! assert!(report.is_success());
//! assert_eq!(report.outputs.len(), 2);
//! assert!(report.outputs[0].content.contains("repeated Address addresses = 2;"));
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`pojo2proto_core`] - Declaration model, configuration, and errors
//! - [`pojo2proto_codegen`] - Type mapping, import resolution, and document assembly

// Re-export core types
pub use pojo2proto_core::{
    Caveat, CodegenError, CodegenResult, CompilationUnit, DeclarationSet, EnumDeclaration,
    EnumEntry, EnumPool, Field, GeneratorConfig, OutputMode, OutputUnit, PrimaryType,
    SchemaEnumValue, SchemaField, TypeDeclaration, TypeKind, UnitFailure, schema_file_name,
};

// Re-export codegen entry points
pub use pojo2proto_codegen::{
    Assembler, GenerationReport, ImportResolver, TypeMapper, TypeRef, resolve,
};

// Re-export common dependencies that callers need
pub use serde_json;
pub use tracing;

/// Generate every schema document for a declaration set.
///
/// The global enum pool is built once from the whole set before any document
/// is rendered, so references to enums declared anywhere in the set resolve.
pub fn generate(set: &DeclarationSet, config: &GeneratorConfig) -> GenerationReport {
    let pool = set.enum_pool();
    tracing::debug!(
        units = set.units.len(),
        enums = pool.len(),
        mode = ?config.mode(),
        "generating schema documents"
    );
    Assembler::new(config, &pool).generate(&set.units)
}

/// Parse a JSON declaration set and generate its schema documents.
///
/// Fails on an invalid configuration or unparseable input. Per-declaration
/// failures are reported in the returned [`GenerationReport`].
pub fn generate_from_json(
    bytes: &[u8],
    config: &GeneratorConfig,
) -> CodegenResult<GenerationReport> {
    config.validate()?;
    let set = DeclarationSet::from_json(bytes)?;
    Ok(generate(&set, config))
}

/// Prelude module for convenient imports.
///
/// Use `use pojo2proto::prelude::*;` to import the model builders, the
/// configuration, and the report type.
pub mod prelude {
    pub use crate::{
        Caveat, CodegenError, CodegenResult, CompilationUnit, DeclarationSet, EnumDeclaration,
        Field, GenerationReport, GeneratorConfig, OutputMode, OutputUnit, PrimaryType,
        TypeDeclaration, TypeKind, UnitFailure,
    };
}
