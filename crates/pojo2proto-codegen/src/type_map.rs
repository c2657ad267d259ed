//! Source type to proto3 type mappings.
//!
//! # Type Mappings
//!
//! | Source | Proto |
//! |--------|-------|
//! | `String`, `UUID` | `string` |
//! | `int`, `Integer` | `int32` |
//! | `long`, `Long` | `int64` |
//! | `double`, `Double` | `double` |
//! | `float`, `Float` | `float` |
//! | `boolean`, `Boolean` | `bool` |
//! | `Instant`, `ZonedDateTime`, `LocalDateTime` | `google.protobuf.Timestamp` |
//! | `LocalDate` | `google.type.Date` |
//! | `LocalTime` | `google.type.TimeOfDay` |
//! | `Duration` | `google.protobuf.Duration` |
//! | `Period` | `string` |
//! | `List<T>` and other collections | `repeated T` |
//! | `Map<K, V>` and other maps | `map<K, V>` |
//! | enum in the pool | the enum name, unchanged |
//! | anything else | the name, unchanged (assumed peer message) |
//!
//! Lookups are case-exact. The enum pool is consulted with the name as declared;
//! the wrapper, scalar and well-known tables with its simple name, so
//! `java.time.Instant` and `java.util.List<T>` resolve like `Instant` and `List<T>`.

use crate::type_ref::TypeRef;
use pojo2proto_core::EnumPool;

/// Ordered-collection wrappers that become `repeated` fields.
pub const COLLECTION_WRAPPERS: &[&str] = &[
    "List",
    "ArrayList",
    "LinkedList",
    "Collection",
    "Set",
    "HashSet",
    "LinkedHashSet",
    "TreeSet",
];

/// Associative-collection wrappers that become `map` fields.
pub const MAP_WRAPPERS: &[&str] = &["Map", "HashMap", "LinkedHashMap", "TreeMap"];

/// Last segment of a dotted name.
pub fn simple_name(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, simple)| simple)
}

/// Scalar mapping from a source type name to a proto3 scalar
struct ScalarMapping {
    source_type: &'static str,
    proto_type: &'static str,
}

const SCALAR_MAPPINGS: &[ScalarMapping] = &[
    ScalarMapping {
        source_type: "String",
        proto_type: "string",
    },
    ScalarMapping {
        source_type: "UUID",
        proto_type: "string",
    },
    ScalarMapping {
        source_type: "int",
        proto_type: "int32",
    },
    ScalarMapping {
        source_type: "Integer",
        proto_type: "int32",
    },
    ScalarMapping {
        source_type: "long",
        proto_type: "int64",
    },
    ScalarMapping {
        source_type: "Long",
        proto_type: "int64",
    },
    ScalarMapping {
        source_type: "double",
        proto_type: "double",
    },
    ScalarMapping {
        source_type: "Double",
        proto_type: "double",
    },
    ScalarMapping {
        source_type: "float",
        proto_type: "float",
    },
    ScalarMapping {
        source_type: "Float",
        proto_type: "float",
    },
    ScalarMapping {
        source_type: "boolean",
        proto_type: "bool",
    },
    ScalarMapping {
        source_type: "Boolean",
        proto_type: "bool",
    },
];

/// Calendar period; rendered as `string` with no structured equivalent.
const CALENDAR_PERIOD: &str = "Period";

/// A pre-defined well-known proto type for temporal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownType {
    Timestamp,
    Date,
    TimeOfDay,
    Duration,
}

impl WellKnownType {
    /// Classify a source temporal type name.
    ///
    /// Instants, zoned and local date-times all collapse onto `Timestamp`.
    pub fn from_source_type(name: &str) -> Option<Self> {
        match name {
            "Instant" | "ZonedDateTime" | "LocalDateTime" => Some(WellKnownType::Timestamp),
            "LocalDate" => Some(WellKnownType::Date),
            "LocalTime" => Some(WellKnownType::TimeOfDay),
            "Duration" => Some(WellKnownType::Duration),
            _ => None,
        }
    }

    /// Fully-qualified proto type name.
    pub fn proto_type(&self) -> &'static str {
        match self {
            WellKnownType::Timestamp => "google.protobuf.Timestamp",
            WellKnownType::Date => "google.type.Date",
            WellKnownType::TimeOfDay => "google.type.TimeOfDay",
            WellKnownType::Duration => "google.protobuf.Duration",
        }
    }

    /// Import path of the file defining this type.
    pub fn import_path(&self) -> &'static str {
        match self {
            WellKnownType::Timestamp => "google/protobuf/timestamp.proto",
            WellKnownType::Date => "google/type/date.proto",
            WellKnownType::TimeOfDay => "google/type/timeofday.proto",
            WellKnownType::Duration => "google/protobuf/duration.proto",
        }
    }
}

/// Category of a non-enum leaf type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    /// Plain proto3 scalar; never needs an import.
    Scalar(&'static str),
    /// Well-known temporal type; needs its fixed import.
    WellKnown(WellKnownType),
    /// Calendar period; `string`, no import.
    CalendarPeriod,
}

impl TypeCategory {
    /// Classify a leaf name against the fixed scalar and well-known tables.
    ///
    /// Qualified names are classified by their simple name.
    pub fn classify(name: &str) -> Option<Self> {
        let name = simple_name(name);
        if let Some(mapping) = SCALAR_MAPPINGS.iter().find(|m| m.source_type == name) {
            return Some(TypeCategory::Scalar(mapping.proto_type));
        }
        if let Some(well_known) = WellKnownType::from_source_type(name) {
            return Some(TypeCategory::WellKnown(well_known));
        }
        if name == CALENDAR_PERIOD {
            return Some(TypeCategory::CalendarPeriod);
        }
        None
    }

    /// Proto type name for this category.
    pub fn proto_type(&self) -> &'static str {
        match self {
            TypeCategory::Scalar(proto_type) => proto_type,
            TypeCategory::WellKnown(well_known) => well_known.proto_type(),
            TypeCategory::CalendarPeriod => "string",
        }
    }
}

/// Structural decomposition shared by the mapper and the import resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape<'a> {
    /// Ordered collection with its element type.
    Repeated(&'a TypeRef),
    /// Associative collection with its key and value types.
    Map(&'a TypeRef, &'a TypeRef),
    /// Anything else, by base name.
    Leaf(&'a str),
}

impl<'a> TypeShape<'a> {
    /// Decompose a reference one level.
    ///
    /// A wrapper with the wrong argument count is a leaf named by its base name.
    pub fn of(type_ref: &'a TypeRef) -> Self {
        let name = type_ref.base_name.as_str();
        let wrapper = simple_name(name);
        match type_ref.type_arguments.as_slice() {
            [element] if COLLECTION_WRAPPERS.contains(&wrapper) => TypeShape::Repeated(element),
            [key, value] if MAP_WRAPPERS.contains(&wrapper) => TypeShape::Map(key, value),
            _ => TypeShape::Leaf(name),
        }
    }
}

/// Maps resolved type references to proto3 field types.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    pool: &'a EnumPool,
}

impl<'a> TypeMapper<'a> {
    /// Create a mapper over the global enum pool of this run.
    pub fn new(pool: &'a EnumPool) -> Self {
        Self { pool }
    }

    /// Map a reference to its proto3 type string.
    pub fn map(&self, type_ref: &TypeRef) -> String {
        match TypeShape::of(type_ref) {
            TypeShape::Repeated(element) => format!("repeated {}", self.map(element)),
            TypeShape::Map(key, value) => format!("map<{}, {}>", self.map(key), self.map(value)),
            TypeShape::Leaf(name) => self.map_name(name),
        }
    }

    /// Map a leaf name: enum pool first, then the fixed tables, else passthrough.
    fn map_name(&self, name: &str) -> String {
        if self.pool.contains(name) {
            return name.to_string();
        }
        match TypeCategory::classify(name) {
            Some(category) => category.proto_type().to_string(),
            None => name.to_string(),
        }
    }
}
