//! Assembly of schema documents for a whole declaration set.
//!
//! Two strategies, selected by [`GeneratorConfig::mode`]:
//!
//! - **Per-type**: one `<Name>.proto` per class (and per interface that declares
//!   nested enums), one per top-level enum. Each document carries only its own
//!   imports.
//! - **Aggregate**: one `<project_name>.proto` holding every message, then every
//!   top-level enum. Imports naming a type declared in the same document are
//!   dropped.
//!
//! Nested enums are always inlined in their enclosing message and never get a
//! document of their own. Interfaces contribute no fields.
//!
//! A declaration that fails (malformed generic syntax, or a name already
//! claimed by an earlier declaration) is reported in
//! [`GenerationReport::failures`] and skipped; its siblings are still emitted.

use crate::imports::ImportResolver;
use crate::proto;
use crate::type_map::TypeMapper;
use crate::type_ref::{self, TypeRef};
use pojo2proto_core::{
    Caveat, CodegenError, CompilationUnit, EnumPool, Field, GeneratorConfig, OutputMode, OutputUnit,
    PrimaryType, SchemaField, TypeDeclaration, UnitFailure, schema_file_name,
};
use std::collections::BTreeSet;

/// Outcome of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Documents to write, in input order.
    pub outputs: Vec<OutputUnit>,

    /// Declarations that could not be generated.
    pub failures: Vec<UnitFailure>,

    /// Fallbacks taken while generating.
    pub caveats: Vec<Caveat>,
}

impl GenerationReport {
    /// Whether every declaration was generated.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A message ready to render.
struct MessagePlan<'d> {
    declaration: &'d TypeDeclaration,
    fields: Vec<SchemaField>,
    imports: BTreeSet<String>,
    caveats: Vec<Caveat>,
}

impl MessagePlan<'_> {
    fn render(&self) -> String {
        proto::render_message(
            &self.declaration.name,
            &self.fields,
            &self.declaration.nested_enums,
        )
    }
}

/// Assembles schema documents from compilation units.
pub struct Assembler<'a> {
    config: &'a GeneratorConfig,
    mapper: TypeMapper<'a>,
    imports: ImportResolver<'a>,
}

impl<'a> Assembler<'a> {
    /// Create an assembler over the global enum pool of this run.
    pub fn new(config: &'a GeneratorConfig, pool: &'a EnumPool) -> Self {
        Self {
            config,
            mapper: TypeMapper::new(pool),
            imports: ImportResolver::new(pool),
        }
    }

    /// Generate every document for `units` under the configured mode.
    pub fn generate(&self, units: &[CompilationUnit]) -> GenerationReport {
        let declared = declared_names(units);
        let report = match self.config.mode() {
            OutputMode::PerType => self.generate_per_type(units, &declared),
            OutputMode::Aggregate => self.generate_aggregate(units, &declared),
        };

        for caveat in &report.caveats {
            tracing::warn!("{caveat}");
        }
        for failure in &report.failures {
            tracing::warn!(declaration = %failure.declaration, "{}", failure.error);
        }

        report
    }

    fn generate_per_type(
        &self,
        units: &[CompilationUnit],
        declared: &BTreeSet<&str>,
    ) -> GenerationReport {
        let package = self.config.effective_package();
        let mut report = GenerationReport::default();
        let mut claimed = BTreeSet::new();

        for unit in units {
            match &unit.primary {
                None => {
                    tracing::debug!(source = ?unit.source, "skipping unit without a primary type");
                }
                Some(PrimaryType::Type(decl)) if !emits_message(decl) => {
                    tracing::debug!(name = %decl.name, "skipping interface without nested enums");
                }
                Some(PrimaryType::Type(decl)) => {
                    match claim(&mut claimed, &decl.name)
                        .and_then(|()| self.plan_message(decl, declared))
                    {
                        Ok(plan) => {
                            let content =
                                proto::render_header(package, &plan.imports) + &plan.render();
                            report
                                .outputs
                                .push(OutputUnit::new(schema_file_name(&decl.name), content));
                            report.caveats.extend(plan.caveats);
                        }
                        Err(failure) => report.failures.push(failure),
                    }
                }
                Some(PrimaryType::Enum(decl)) => match claim(&mut claimed, &decl.name) {
                    Ok(()) => {
                        let content = proto::render_header(package, &BTreeSet::new())
                            + &proto::render_enum(decl);
                        report
                            .outputs
                            .push(OutputUnit::new(schema_file_name(&decl.name), content));
                    }
                    Err(failure) => report.failures.push(failure),
                },
            }
        }

        for output in &report.outputs {
            tracing::debug!(file = %output.file_name, "rendered schema document");
        }

        report
    }

    fn generate_aggregate(
        &self,
        units: &[CompilationUnit],
        declared: &BTreeSet<&str>,
    ) -> GenerationReport {
        let mut report = GenerationReport::default();
        let mut imports = BTreeSet::new();
        let mut messages = String::new();
        let mut enums = String::new();
        let mut claimed = BTreeSet::new();

        for unit in units {
            match &unit.primary {
                Some(PrimaryType::Type(decl)) if emits_message(decl) => {
                    match claim(&mut claimed, &decl.name)
                        .and_then(|()| self.plan_message(decl, declared))
                    {
                        Ok(plan) => {
                            messages.push_str(&plan.render());
                            imports.extend(plan.imports);
                            report.caveats.extend(plan.caveats);
                        }
                        Err(failure) => report.failures.push(failure),
                    }
                }
                Some(PrimaryType::Enum(decl)) => match claim(&mut claimed, &decl.name) {
                    Ok(()) => enums.push_str(&proto::render_enum(decl)),
                    Err(failure) => report.failures.push(failure),
                },
                _ => {}
            }
        }

        // Everything lives in one document; co-located types need no import.
        imports.retain(|import: &String| {
            let stem = import.strip_suffix(".proto").unwrap_or(import);
            !declared.contains(stem)
        });

        let file_name = schema_file_name(&self.config.project_name);
        tracing::debug!(file = %file_name, imports = imports.len(), "rendered aggregate schema document");

        let content = proto::render_header(self.config.effective_package(), &imports)
            + &messages
            + &enums;
        report.outputs.push(OutputUnit::new(file_name, content));

        report
    }

    fn plan_message<'d>(
        &self,
        decl: &'d TypeDeclaration,
        declared: &BTreeSet<&str>,
    ) -> Result<MessagePlan<'d>, UnitFailure> {
        let fields: Vec<&Field> = decl.schema_fields(&self.config.exclude_fields).collect();

        let mut caveats = Vec::new();
        let mut field_types: Vec<TypeRef> = Vec::with_capacity(fields.len());
        for field in &fields {
            let resolved = type_ref::resolve(&field.declared_type)
                .map_err(|err| UnitFailure::new(&decl.name, err))?;
            field_types.push(resolved.type_ref);
            caveats.extend(resolved.caveats);
        }

        let schema_fields = proto::schema_fields(
            fields.iter().copied().zip(field_types.iter()),
            &self.mapper,
        );
        let imports = self.imports.imports_for(decl, &field_types);

        caveats.extend(
            self.imports
                .opaque_names(&field_types)
                .into_iter()
                .filter(|name| !declared.contains(name))
                .map(|name| Caveat::AmbiguousTypeReference {
                    type_name: name.to_string(),
                    referenced_by: decl.name.clone(),
                }),
        );

        Ok(MessagePlan {
            declaration: decl,
            fields: schema_fields,
            imports,
            caveats,
        })
    }
}

/// Claim a schema name for one declaration; a name can be claimed once per run.
fn claim<'u>(claimed: &mut BTreeSet<&'u str>, name: &'u str) -> Result<(), UnitFailure> {
    if claimed.insert(name) {
        Ok(())
    } else {
        Err(UnitFailure::new(
            name,
            CodegenError::DuplicateDeclaration {
                name: name.to_string(),
            },
        ))
    }
}

/// Interfaces only get a message when they carry nested enums.
fn emits_message(decl: &TypeDeclaration) -> bool {
    !decl.is_interface() || !decl.nested_enums.is_empty()
}

/// Names of every primary type declared in the run.
fn declared_names(units: &[CompilationUnit]) -> BTreeSet<&str> {
    units
        .iter()
        .filter_map(CompilationUnit::primary_type_name)
        .collect()
}
