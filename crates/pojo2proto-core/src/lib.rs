//! pojo2proto-core - Declaration model, configuration, and error types
//!
//! This crate provides the foundational types shared by the schema generator:
//! - [`DeclarationSet`] and [`CompilationUnit`] for the parsed input model
//! - [`EnumPool`] for the global enum pool of one generation run
//! - [`GeneratorConfig`] for engine configuration
//! - [`CodegenError`] and [`Caveat`] for error handling
//! - [`OutputUnit`] for the files handed to a writer

mod config;
mod error;
mod model;

pub use config::{GeneratorConfig, OutputMode};
pub use error::{Caveat, CodegenError, CodegenResult, UnitFailure};
pub use model::{
    CompilationUnit, DeclarationSet, EnumDeclaration, EnumEntry, EnumPool, Field, OutputUnit,
    PrimaryType, SchemaEnumValue, SchemaField, TypeDeclaration, TypeKind,
};

/// File extension of every generated schema document
pub const SCHEMA_FILE_EXTENSION: &str = "proto";

/// Build the schema file name for a declared type or project name
pub fn schema_file_name(stem: &str) -> String {
    format!("{stem}.{SCHEMA_FILE_EXTENSION}")
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Caveat, CodegenError, CodegenResult, CompilationUnit, DeclarationSet, EnumDeclaration,
        EnumPool, Field, GeneratorConfig, OutputMode, OutputUnit, PrimaryType, TypeDeclaration,
        TypeKind, UnitFailure,
    };
}

#[cfg(test)]
mod lib_tests;
