//! pojo2proto-codegen - proto3 schema generation from declaration models.
//!
//! # Pipeline
//!
//! ```text
//! DeclarationSet
//!     ↓
//!  [EnumPool::collect]        global enum pool, built once per run
//!     ↓
//!  [type_ref::resolve]        declared type text → TypeRef tree
//!     ↓
//!  ├─→ [TypeMapper]           TypeRef → proto3 type string
//!  └─→ [ImportResolver]       TypeRef → import paths
//!     ↓
//!  [Assembler]                per-type or aggregate documents
//!     ↓
//!  Vec<OutputUnit>
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pojo2proto_codegen::Assembler;
//! use pojo2proto_core::{CompilationUnit, EnumPool, Field, GeneratorConfig, TypeDeclaration};
//!
//! let units = vec![CompilationUnit::of_type(
//!     TypeDeclaration::class("Address").with_field(Field::new("street", "String")),
//! )];
//! let pool = EnumPool::collect(&units);
//! let config = GeneratorConfig::default();
//!
//! let report = Assembler::new(&config, &pool).generate(&units);
//!
//! assert_eq!(report.outputs[0].file_name, "Address.proto");
//! assert!(report.outputs[0].content.contains("string street = 1;"));
//! ```
//!
//! # Supported Types
//!
//! See [`type_map`] for the full table. In short: primitive scalars and their
//! boxed forms map to proto3 scalars, temporal types map to the `google.protobuf`
//! and `google.type` well-known types, collections become `repeated`, maps become
//! `map<K, V>`, and every other name is passed through as a message or enum.

pub mod assemble;
pub mod imports;
pub mod proto;
pub mod type_map;
pub mod type_ref;

pub use assemble::{Assembler, GenerationReport};
pub use imports::ImportResolver;
pub use type_map::{TypeCategory, TypeMapper, TypeShape, WellKnownType};
pub use type_ref::{Resolved, TypeRef, resolve};
