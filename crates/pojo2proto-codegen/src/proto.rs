//! proto3 text rendering.
//!
//! Renders the three fragment kinds of a schema document: the header, message
//! bodies, and enum bodies. Every fragment ends with a blank line, so fragments
//! concatenate into a well-formed document.

use crate::type_map::TypeMapper;
use crate::type_ref::TypeRef;
use pojo2proto_core::{EnumDeclaration, Field, SchemaEnumValue, SchemaField};
use std::collections::BTreeSet;

/// Syntax level written into every header.
pub const SYNTAX: &str = "proto3";

/// Assign message field ordinals, starting at 1 in source order.
///
/// `fields` must already exclude static and excluded fields.
pub fn schema_fields<'f>(
    fields: impl IntoIterator<Item = (&'f Field, &'f TypeRef)>,
    mapper: &TypeMapper<'_>,
) -> Vec<SchemaField> {
    fields
        .into_iter()
        .zip(1u32..)
        .map(|((field, type_ref), ordinal)| SchemaField {
            schema_type: mapper.map(type_ref),
            name: field.name.clone(),
            ordinal,
        })
        .collect()
}

/// Assign enum value ordinals, starting at 0 in declaration order.
pub fn enum_values(declaration: &EnumDeclaration) -> Vec<SchemaEnumValue> {
    declaration
        .constants
        .iter()
        .zip(0u32..)
        .map(|(name, ordinal)| SchemaEnumValue {
            name: name.clone(),
            ordinal,
        })
        .collect()
}

/// Render the document header.
///
/// The package block and the import block are each omitted, with their
/// trailing blank line, when empty.
pub fn render_header(package: Option<&str>, imports: &BTreeSet<String>) -> String {
    let mut header = String::new();

    header.push_str(&format!("syntax = \"{SYNTAX}\";\n\n"));

    if let Some(package) = package.filter(|p| !p.is_empty()) {
        header.push_str(&format!("package {package};\n\n"));
        header.push_str(&format!("option java_package = \"{package}\";\n"));
        header.push_str("option java_multiple_files = true;\n\n");
    }

    if !imports.is_empty() {
        for import in imports {
            header.push_str(&format!("import \"{import}\";\n"));
        }
        header.push('\n');
    }

    header
}

/// Render a message body, with nested enums inlined ahead of the fields.
pub fn render_message(
    name: &str,
    fields: &[SchemaField],
    nested_enums: &[EnumDeclaration],
) -> String {
    let mut sections: Vec<String> = nested_enums
        .iter()
        .map(|nested| render_enum_block(nested, "  "))
        .collect();

    if !fields.is_empty() {
        let mut field_lines = String::new();
        for field in fields {
            field_lines.push_str(&format!(
                "  {} {} = {};\n",
                field.schema_type, field.name, field.ordinal
            ));
        }
        sections.push(field_lines);
    }

    format!("message {name} {{\n{}}}\n\n", sections.join("\n"))
}

/// Render a top-level enum body.
pub fn render_enum(declaration: &EnumDeclaration) -> String {
    format!("{}\n", render_enum_block(declaration, ""))
}

fn render_enum_block(declaration: &EnumDeclaration, indent: &str) -> String {
    let mut block = format!("{indent}enum {} {{\n", declaration.name);
    for value in enum_values(declaration) {
        block.push_str(&format!("{indent}  {} = {};\n", value.name, value.ordinal));
    }
    block.push_str(&format!("{indent}}}\n"));
    block
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use pojo2proto_core::EnumPool;

    fn field(schema_type: &str, name: &str, ordinal: u32) -> SchemaField {
        SchemaField {
            schema_type: schema_type.into(),
            name: name.into(),
            ordinal,
        }
    }

    fn imports(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn render_header___with_package_and_imports() {
        let header = render_header(
            Some("com.acme.proto"),
            &imports(&["google/protobuf/timestamp.proto", "Address.proto"]),
        );

        assert_eq!(
            header,
            "syntax = \"proto3\";\n\
             \n\
             package com.acme.proto;\n\
             \n\
             option java_package = \"com.acme.proto\";\n\
             option java_multiple_files = true;\n\
             \n\
             import \"Address.proto\";\n\
             import \"google/protobuf/timestamp.proto\";\n\
             \n"
        );
    }

    #[test]
    fn render_header___without_package___omits_package_block() {
        let header = render_header(None, &imports(&["Address.proto"]));

        assert_eq!(
            header,
            "syntax = \"proto3\";\n\nimport \"Address.proto\";\n\n"
        );
    }

    #[test]
    fn render_header___empty_package___omits_package_block() {
        let header = render_header(Some(""), &BTreeSet::new());

        assert_eq!(header, "syntax = \"proto3\";\n\n");
    }

    #[test]
    fn render_header___without_imports___omits_import_block() {
        let header = render_header(Some("p"), &BTreeSet::new());

        assert!(header.ends_with("option java_multiple_files = true;\n\n"));
        assert!(!header.contains("import"));
    }

    #[test]
    fn render_message___fields_in_order() {
        let message = render_message(
            "PersonPojo",
            &[field("string", "name", 1), field("int32", "age", 2)],
            &[],
        );

        assert_eq!(
            message,
            "message PersonPojo {\n  string name = 1;\n  int32 age = 2;\n}\n\n"
        );
    }

    #[test]
    fn render_message___empty___has_empty_body() {
        assert_eq!(render_message("Empty", &[], &[]), "message Empty {\n}\n\n");
    }

    #[test]
    fn render_message___nested_enums___inlined_before_fields() {
        let status = EnumDeclaration::new("Status", ["NEW", "PAID"]).nested_in("Order");

        let message = render_message("Order", &[field("Status", "status", 1)], &[status]);

        assert_eq!(
            message,
            "message Order {\n\
             \x20 enum Status {\n\
             \x20   NEW = 0;\n\
             \x20   PAID = 1;\n\
             \x20 }\n\
             \n\
             \x20 Status status = 1;\n\
             }\n\n"
        );
    }

    #[test]
    fn render_message___only_nested_enums___no_trailing_blank_line() {
        let b = EnumDeclaration::new("b", ["c"]).nested_in("Conts");

        let message = render_message("Conts", &[], &[b]);

        assert_eq!(message, "message Conts {\n  enum b {\n    c = 0;\n  }\n}\n\n");
    }

    #[test]
    fn render_enum___top_level() {
        let color = EnumDeclaration::new("Color", ["RED", "GREEN", "BLUE"]);

        assert_eq!(
            render_enum(&color),
            "enum Color {\n  RED = 0;\n  GREEN = 1;\n  BLUE = 2;\n}\n\n"
        );
    }

    #[test]
    fn enum_values___start_at_zero() {
        let values = enum_values(&EnumDeclaration::new("E", ["A", "B"]));

        assert_eq!(values[0].ordinal, 0);
        assert_eq!(values[1].ordinal, 1);
        assert_eq!(values[1].name, "B");
    }

    #[test]
    fn schema_fields___start_at_one_and_map_types() {
        let pool = EnumPool::default();
        let mapper = TypeMapper::new(&pool);
        let fields = [Field::new("name", "String"), Field::new("tags", "List<String>")];
        let types = [
            TypeRef::named("String"),
            TypeRef::generic("List", vec![TypeRef::named("String")]),
        ];

        let schema = schema_fields(fields.iter().zip(types.iter()), &mapper);

        assert_eq!(
            schema,
            vec![
                field("string", "name", 1),
                field("repeated string", "tags", 2)
            ]
        );
    }
}
