//! Error and diagnostic types for schema generation

use std::fmt;
use thiserror::Error;

/// Result type alias for generator operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for generator operations
///
/// These are hard failures. Engine failures are scoped to a single declaration
/// and reported through [`UnitFailure`]; they never abort sibling declarations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// Declared type text has unbalanced or misplaced angle brackets
    #[error("malformed generic syntax in '{declared_type}': {reason}")]
    MalformedGenericSyntax {
        declared_type: String,
        reason: String,
    },

    /// Another declaration already claimed this schema name
    #[error("'{name}' is declared more than once; only the first declaration is generated")]
    DuplicateDeclaration { name: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CodegenError {
    /// Create a malformed generic syntax error
    pub fn malformed(declared_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CodegenError::MalformedGenericSyntax {
            declared_type: declared_type.into(),
            reason: reason.into(),
        }
    }

    /// Returns a stable, machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            CodegenError::MalformedGenericSyntax { .. } => "malformed_generic_syntax",
            CodegenError::DuplicateDeclaration { .. } => "duplicate_declaration",
            CodegenError::Config(_) => "config",
            CodegenError::Serialization(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::Serialization(err.to_string())
    }
}

/// Non-fatal diagnostic raised while mapping a declaration
///
/// Caveats describe fallbacks the generator took to stay total. Output is still
/// produced for the declaration that raised them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Caveat {
    /// A generic type had an argument count the generator does not decompose
    UnresolvedGenericShape { declared_type: String, arity: usize },

    /// A referenced name matched no scalar, well-known type, enum, or declared type
    AmbiguousTypeReference {
        type_name: String,
        referenced_by: String,
    },
}

impl fmt::Display for Caveat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Caveat::UnresolvedGenericShape {
                declared_type,
                arity,
            } => write!(
                f,
                "generic type '{declared_type}' has {arity} type arguments; treated as an opaque name"
            ),
            Caveat::AmbiguousTypeReference {
                type_name,
                referenced_by,
            } => write!(
                f,
                "type '{type_name}' referenced by '{referenced_by}' is not declared in this run; assuming message {type_name}"
            ),
        }
    }
}

/// Failure arm of a per-declaration result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to generate '{declaration}': {error}")]
pub struct UnitFailure {
    /// Simple name of the declaration that failed
    pub declaration: String,

    /// Reason for the failure
    #[source]
    pub error: CodegenError,
}

impl UnitFailure {
    /// Create a new unit failure
    pub fn new(declaration: impl Into<String>, error: CodegenError) -> Self {
        Self {
            declaration: declaration.into(),
            error,
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
