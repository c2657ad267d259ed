#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn CodegenError___malformed___displays_type_and_reason() {
    let err = CodegenError::malformed("List<String", "unclosed '<'");

    let display = err.to_string();

    assert_eq!(
        display,
        "malformed generic syntax in 'List<String': unclosed '<'"
    );
}

#[test]
fn CodegenError___duplicate_declaration___names_declaration() {
    let err = CodegenError::DuplicateDeclaration {
        name: "Address".into(),
    };

    assert!(err.to_string().starts_with("'Address' is declared more than once"));
}

#[test]
fn CodegenError___from_serde_error___converts_to_serialization_error() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();

    let err: CodegenError = json_err.into();

    assert!(matches!(err, CodegenError::Serialization(_)));
}

#[test_case(CodegenError::malformed("a", "b"), "malformed_generic_syntax")]
#[test_case(CodegenError::DuplicateDeclaration { name: "x".into() }, "duplicate_declaration")]
#[test_case(CodegenError::Config("x".into()), "config")]
#[test_case(CodegenError::Serialization("x".into()), "serialization")]
fn CodegenError___kind___is_stable(error: CodegenError, expected: &str) {
    assert_eq!(error.kind(), expected);
}

#[test]
fn Caveat___unresolved_generic_shape___mentions_arity() {
    let caveat = Caveat::UnresolvedGenericShape {
        declared_type: "Triple<A, B, C>".into(),
        arity: 3,
    };

    let display = caveat.to_string();

    assert!(display.contains("Triple<A, B, C>"));
    assert!(display.contains("3 type arguments"));
}

#[test]
fn Caveat___ambiguous_reference___names_type_and_referrer() {
    let caveat = Caveat::AmbiguousTypeReference {
        type_name: "Address".into(),
        referenced_by: "PersonPojo".into(),
    };

    let display = caveat.to_string();

    assert!(display.contains("'Address'"));
    assert!(display.contains("'PersonPojo'"));
}

#[test]
fn UnitFailure___display___includes_declaration_and_error() {
    let failure = UnitFailure::new("Broken", CodegenError::malformed("Map<K", "unclosed '<'"));

    let display = failure.to_string();

    assert!(display.starts_with("failed to generate 'Broken'"));
    assert!(display.contains("Map<K"));
}
