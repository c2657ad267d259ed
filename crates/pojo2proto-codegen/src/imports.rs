//! Import resolution for generated schema documents.
//!
//! Walks field types with the same decomposition as [`TypeMapper`](crate::TypeMapper)
//! but gathers referenced leaf names instead of rendered types. Each leaf name
//! contributes at most one import:
//!
//! - nested enum of the declaration being generated: nothing, checked before the
//!   global pool so a same-named enum elsewhere cannot shadow it
//! - enum in the pool, nested: `<Enclosing>.proto`, unless the enclosing type is
//!   the declaration being generated
//! - enum in the pool, top-level: `<Enum>.proto`
//! - well-known temporal type: its fixed import path
//! - scalar or calendar period: nothing
//! - anything else: `<Name>.proto`
//!
//! Imports are collected in a [`BTreeSet`], so they render in ascending
//! lexicographic order regardless of field order.

use crate::type_map::{TypeCategory, TypeShape};
use crate::type_ref::TypeRef;
use pojo2proto_core::{EnumPool, TypeDeclaration, schema_file_name};
use std::collections::BTreeSet;

/// Collect every leaf name of a reference, in order of appearance.
pub fn leaf_names(type_ref: &TypeRef) -> Vec<&str> {
    match TypeShape::of(type_ref) {
        TypeShape::Repeated(element) => leaf_names(element),
        TypeShape::Map(key, value) => {
            let mut names = leaf_names(key);
            names.extend(leaf_names(value));
            names
        }
        TypeShape::Leaf(name) => vec![name],
    }
}

/// Resolves the imports a declaration needs.
#[derive(Debug, Clone, Copy)]
pub struct ImportResolver<'a> {
    pool: &'a EnumPool,
}

impl<'a> ImportResolver<'a> {
    /// Create a resolver over the global enum pool of this run.
    pub fn new(pool: &'a EnumPool) -> Self {
        Self { pool }
    }

    /// Imports needed by `declaration` given the resolved types of its schema fields.
    pub fn imports_for(
        &self,
        declaration: &TypeDeclaration,
        field_types: &[TypeRef],
    ) -> BTreeSet<String> {
        field_types
            .iter()
            .flat_map(leaf_names)
            .filter_map(|name| self.import_for(name, declaration))
            .collect()
    }

    /// Import contributed by one leaf name referenced from `current`.
    pub fn import_for(&self, name: &str, current: &TypeDeclaration) -> Option<String> {
        if current.nested_enum(name).is_some() {
            return None;
        }
        if let Some(entry) = self.pool.lookup(name) {
            return match entry.declaration.enclosing_type.as_deref() {
                Some(enclosing) if enclosing == current.name => None,
                Some(enclosing) => Some(schema_file_name(enclosing)),
                None => Some(schema_file_name(&entry.declaration.name)),
            };
        }
        match TypeCategory::classify(name) {
            Some(TypeCategory::WellKnown(well_known)) => {
                Some(well_known.import_path().to_string())
            }
            Some(TypeCategory::Scalar(_) | TypeCategory::CalendarPeriod) => None,
            None => Some(schema_file_name(name)),
        }
    }

    /// Leaf names that resolve to neither an enum nor a known type.
    ///
    /// These are assumed to be peer messages.
    pub fn opaque_names<'t>(&self, field_types: &'t [TypeRef]) -> BTreeSet<&'t str> {
        field_types
            .iter()
            .flat_map(leaf_names)
            .filter(|name| !self.pool.contains(name) && TypeCategory::classify(name).is_none())
            .collect()
    }
}
