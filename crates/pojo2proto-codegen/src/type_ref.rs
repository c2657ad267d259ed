//! Structured type references parsed from declared type text.
//!
//! A declared type such as `Map<String, List<Map<String, Long>>>` is resolved
//! into a [`TypeRef`] tree. Generic arguments are split on top-level commas only,
//! so nested generics survive intact.
//!
//! # Shapes
//!
//! | Declared type | Result |
//! |---------------|--------|
//! | `String` | `TypeRef { base_name: "String", type_arguments: [] }` |
//! | `List<Address>` | one type argument |
//! | `Map<String, Address>` | two type arguments |
//! | `Triple<A, B, C>` | base name only, plus an [`Caveat::UnresolvedGenericShape`] |
//! | `List<String` | [`CodegenError::MalformedGenericSyntax`] |

use pojo2proto_core::{Caveat, CodegenError, CodegenResult};
use std::fmt;

/// A resolved type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Simple or dotted name without type arguments.
    pub base_name: String,

    /// Type arguments in declaration order; empty for non-generic references.
    pub type_arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// Create a non-generic reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            base_name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    /// Create a generic reference.
    pub fn generic(name: impl Into<String>, type_arguments: Vec<TypeRef>) -> Self {
        Self {
            base_name: name.into(),
            type_arguments,
        }
    }

    /// Whether this reference carries type arguments.
    pub fn is_generic(&self) -> bool {
        !self.type_arguments.is_empty()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_name)?;
        if self.is_generic() {
            f.write_str("<")?;
            for (i, arg) in self.type_arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// A resolved reference together with the fallbacks taken to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub type_ref: TypeRef,
    pub caveats: Vec<Caveat>,
}

/// Resolve declared type text into a [`TypeRef`].
///
/// Fails only on malformed bracket syntax. Unsupported generic arities degrade
/// to the base name with a caveat.
pub fn resolve(declared_type: &str) -> CodegenResult<Resolved> {
    resolve_segment(declared_type.trim(), declared_type)
}

fn resolve_segment(text: &str, declared_type: &str) -> CodegenResult<Resolved> {
    let Some(open) = text.find('<') else {
        if text.contains('>') {
            return Err(CodegenError::malformed(declared_type, "unmatched '>'"));
        }
        if text.is_empty() {
            return Err(CodegenError::malformed(declared_type, "empty type name"));
        }
        return Ok(Resolved {
            type_ref: TypeRef::named(text),
            caveats: Vec::new(),
        });
    };

    let base_name = text[..open].trim();
    if base_name.is_empty() {
        return Err(CodegenError::malformed(
            declared_type,
            "missing name before '<'",
        ));
    }

    let close = matching_close(text, open)
        .ok_or_else(|| CodegenError::malformed(declared_type, "unclosed '<'"))?;
    if close != text.len() - 1 {
        return Err(CodegenError::malformed(
            declared_type,
            "unexpected text after closing '>'",
        ));
    }

    let segments = split_top_level(&text[open + 1..close]);
    if segments.iter().any(|s| s.is_empty()) {
        return Err(CodegenError::malformed(declared_type, "empty type argument"));
    }

    match segments.len() {
        1 | 2 => {
            let mut type_arguments = Vec::with_capacity(segments.len());
            let mut caveats = Vec::new();
            for segment in segments {
                let resolved = resolve_segment(segment, declared_type)?;
                type_arguments.push(resolved.type_ref);
                caveats.extend(resolved.caveats);
            }
            Ok(Resolved {
                type_ref: TypeRef::generic(base_name, type_arguments),
                caveats,
            })
        }
        arity => Ok(Resolved {
            type_ref: TypeRef::named(base_name),
            caveats: vec![Caveat::UnresolvedGenericShape {
                declared_type: text.to_string(),
                arity,
            }],
        }),
    }
}

/// Byte index of the `>` closing the `<` at `open`.
fn matching_close(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices().skip_while(|(i, _)| *i < open) {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split generic arguments on commas that are not inside nested brackets.
fn split_top_level(inner: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                segments.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(inner[start..].trim());

    segments
}
