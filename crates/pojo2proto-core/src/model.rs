//! Declaration model consumed by the schema generator
//!
//! The model is produced by an external structural parser and handed over as
//! JSON. It is read-only for the lifetime of a generation run.
//!
//! ```text
//! DeclarationSet
//!   └─ CompilationUnit (one per source file)
//!        └─ PrimaryType: Type(TypeDeclaration) | Enum(EnumDeclaration)
//!             └─ TypeDeclaration { fields, nested_enums }
//! ```

use serde::{Deserialize, Serialize};

/// Kind of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
}

/// A field declared directly on a type (never inherited)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name
    pub name: String,

    /// Raw declared type text, e.g. `Map<String, List<Address>>`
    pub declared_type: String,

    /// Static fields are never schema fields
    #[serde(default)]
    pub is_static: bool,
}

impl Field {
    /// Create a new instance field
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            is_static: false,
        }
    }

    /// Create a new static field
    pub fn new_static(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            is_static: true,
            ..Self::new(name, declared_type)
        }
    }
}

/// An enum declaration, either top-level or nested inside a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    /// Simple enum name
    pub name: String,

    /// Simple name of the lexically enclosing type, if nested
    #[serde(default)]
    pub enclosing_type: Option<String>,

    /// Constant names in declaration order
    #[serde(default)]
    pub constants: Vec<String>,
}

impl EnumDeclaration {
    /// Create a top-level enum declaration
    pub fn new<I, S>(name: impl Into<String>, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            enclosing_type: None,
            constants: constants.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark this enum as nested inside `enclosing`
    pub fn nested_in(mut self, enclosing: impl Into<String>) -> Self {
        self.enclosing_type = Some(enclosing.into());
        self
    }
}

/// A class or interface declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TypeDeclarationRepr")]
pub struct TypeDeclaration {
    /// Simple type name
    pub name: String,

    /// Declaration kind
    pub kind: TypeKind,

    /// Fields declared directly on this type, in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Enums lexically nested in this type, in declaration order
    #[serde(default)]
    pub nested_enums: Vec<EnumDeclaration>,
}

impl TypeDeclaration {
    /// Create a class declaration with no members
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Class,
            fields: Vec::new(),
            nested_enums: Vec::new(),
        }
    }

    /// Create an interface declaration with no members
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Interface,
            ..Self::class(name)
        }
    }

    /// Add a field
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a nested enum; its enclosing type is set to this declaration
    pub fn with_nested_enum(mut self, nested: EnumDeclaration) -> Self {
        let name = self.name.clone();
        self.nested_enums.push(nested.nested_in(name));
        self
    }

    /// Whether this declaration is an interface
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Nested enum of this declaration named by a type reference, if any
    ///
    /// Matches `Status`, `Order.Status`, or a qualified name ending in `.Order.Status`.
    pub fn nested_enum(&self, type_name: &str) -> Option<&EnumDeclaration> {
        self.nested_enums.iter().find(|nested| {
            nested.name == type_name
                || type_name
                    .strip_suffix(nested.name.as_str())
                    .and_then(|prefix| prefix.strip_suffix('.'))
                    .and_then(|prefix| prefix.strip_suffix(self.name.as_str()))
                    .is_some_and(|rest| rest.is_empty() || rest.ends_with('.'))
        })
    }

    /// Fields that become schema fields: non-static and not excluded by name
    ///
    /// Interfaces never contribute schema fields.
    pub fn schema_fields<'a>(
        &'a self,
        excluded: &'a [String],
    ) -> impl Iterator<Item = &'a Field> + 'a {
        let interface = self.is_interface();
        self.fields
            .iter()
            .filter(move |_| !interface)
            .filter(|f| !f.is_static)
            .filter(move |f| !excluded.contains(&f.name))
    }
}

/// Wire shape of [`TypeDeclaration`]; enums must use [`PrimaryType::Enum`]
#[derive(Deserialize)]
struct TypeDeclarationRepr {
    name: String,
    kind: TypeKind,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default)]
    nested_enums: Vec<EnumDeclaration>,
}

impl TryFrom<TypeDeclarationRepr> for TypeDeclaration {
    type Error = String;

    fn try_from(repr: TypeDeclarationRepr) -> Result<Self, Self::Error> {
        if repr.kind == TypeKind::Enum {
            return Err(format!(
                "type declaration '{}' has kind 'enum'; enums are declared with \"declaration\": \"enum\"",
                repr.name
            ));
        }
        Ok(Self {
            name: repr.name,
            kind: repr.kind,
            fields: repr.fields,
            nested_enums: repr.nested_enums,
        })
    }
}

/// Primary declared type of a compilation unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "declaration", rename_all = "lowercase")]
pub enum PrimaryType {
    Type(TypeDeclaration),
    Enum(EnumDeclaration),
}

impl PrimaryType {
    /// Simple name of the primary type
    pub fn name(&self) -> &str {
        match self {
            PrimaryType::Type(decl) => &decl.name,
            PrimaryType::Enum(decl) => &decl.name,
        }
    }

    /// Declaration kind of the primary type
    pub fn kind(&self) -> TypeKind {
        match self {
            PrimaryType::Type(decl) => decl.kind,
            PrimaryType::Enum(_) => TypeKind::Enum,
        }
    }
}

/// One parsed source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Source path, for diagnostics only
    #[serde(default)]
    pub source: Option<String>,

    /// Declared source package
    #[serde(default)]
    pub package: Option<String>,

    /// Primary declared type; absent for files without one
    #[serde(default)]
    pub primary: Option<PrimaryType>,
}

impl CompilationUnit {
    /// Create a unit whose primary type is a class or interface
    pub fn of_type(decl: TypeDeclaration) -> Self {
        Self {
            primary: Some(PrimaryType::Type(decl)),
            ..Self::default()
        }
    }

    /// Create a unit whose primary type is an enum
    pub fn of_enum(decl: EnumDeclaration) -> Self {
        Self {
            primary: Some(PrimaryType::Enum(decl)),
            ..Self::default()
        }
    }

    /// Set the source package
    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Simple name of the primary type, if present
    pub fn primary_type_name(&self) -> Option<&str> {
        self.primary.as_ref().map(PrimaryType::name)
    }
}

/// All compilation units of one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationSet {
    #[serde(default)]
    pub units: Vec<CompilationUnit>,
}

impl DeclarationSet {
    /// Parse a declaration set from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Build the global enum pool for this set
    pub fn enum_pool(&self) -> EnumPool {
        EnumPool::collect(&self.units)
    }
}

/// An enum in the global pool, with its declaring package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    pub declaration: EnumDeclaration,
    pub package: Option<String>,
}

impl EnumEntry {
    /// Fully-qualified name: `package.Enclosing.Name`
    pub fn qualified_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if let Some(package) = self.package.as_deref().filter(|p| !p.is_empty()) {
            parts.push(package);
        }
        if let Some(enclosing) = self.declaration.enclosing_type.as_deref() {
            parts.push(enclosing);
        }
        parts.push(&self.declaration.name);
        parts.join(".")
    }

    /// Whether a type reference names this enum
    ///
    /// Matches the simple name, the qualified name, or any dotted suffix of it
    /// (e.g. `Conts.b` for `com.acme.Conts.b`).
    pub fn matches(&self, type_name: &str) -> bool {
        if self.declaration.name == type_name {
            return true;
        }
        let qualified = self.qualified_name();
        qualified == type_name
            || qualified
                .strip_suffix(type_name)
                .is_some_and(|prefix| prefix.ends_with('.'))
    }
}

/// Every enum declared anywhere in the input, top-level and nested
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumPool {
    entries: Vec<EnumEntry>,
}

impl EnumPool {
    /// Walk every unit and collect every enum declaration, in input order
    pub fn collect(units: &[CompilationUnit]) -> Self {
        let entries = units
            .iter()
            .flat_map(|unit| {
                let declarations: Vec<&EnumDeclaration> = match &unit.primary {
                    Some(PrimaryType::Enum(decl)) => vec![decl],
                    Some(PrimaryType::Type(decl)) => decl.nested_enums.iter().collect(),
                    None => Vec::new(),
                };
                declarations.into_iter().map(move |decl| EnumEntry {
                    declaration: decl.clone(),
                    package: unit.package.clone(),
                })
            })
            .collect();

        Self { entries }
    }

    /// Look up the enum a type reference names; first match in pool order wins
    pub fn lookup(&self, type_name: &str) -> Option<&EnumEntry> {
        self.entries.iter().find(|e| e.matches(type_name))
    }

    /// Whether a type reference names an enum in the pool
    pub fn contains(&self, type_name: &str) -> bool {
        self.lookup(type_name).is_some()
    }

    /// Number of enums in the pool
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over pool entries in collection order
    pub fn iter(&self) -> impl Iterator<Item = &EnumEntry> {
        self.entries.iter()
    }
}

/// A rendered message field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub schema_type: String,
    pub name: String,
    /// Starts at 1, contiguous, in source order
    pub ordinal: u32,
}

/// A rendered enum value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEnumValue {
    pub name: String,
    /// Starts at 0, contiguous, in declaration order
    pub ordinal: u32,
}

/// One generated schema file, handed to an external writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputUnit {
    pub file_name: String,
    pub content: String,
}

impl OutputUnit {
    /// Create a new output unit
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}
