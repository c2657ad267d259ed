#![allow(non_snake_case)]

use super::*;

#[test]
fn schema_file_name___simple_stem___appends_proto_extension() {
    assert_eq!(schema_file_name("Address"), "Address.proto");
}

#[test]
fn schema_file_name___project_name___appends_proto_extension() {
    assert_eq!(schema_file_name("my-service"), "my-service.proto");
}

#[test]
fn prelude___exports_model_and_config_types() {
    use crate::prelude::*;

    let config = GeneratorConfig::default();
    let set = DeclarationSet::default();

    assert_eq!(config.mode(), OutputMode::PerType);
    assert!(set.units.is_empty());
}
