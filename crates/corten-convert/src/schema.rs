//! Schema model: the tagged type descriptors the converter dispatches on.
//!
//! A [`Schema`] pairs a closed base [`SchemaKind`] with an optional
//! logical-type annotation. The kind enumeration is exhaustive by
//! construction, so the dispatcher cannot silently skip a new kind; the
//! logical annotation is an open name tag resolved through the
//! [`LogicalTypeRegistry`](crate::convert::LogicalTypeRegistry) at
//! conversion time.
//!
//! Schemas are consumed, never produced, by the converter. Callers build
//! them through the constructors here or map them from their own schema
//! library.

use crate::value::Value;

/// Names of the logical-type annotations with built-in transforms.
pub mod logical_type_names {
    /// Whole days since the Unix epoch, over an `int`.
    pub const DATE: &str = "date";
    /// Epoch milliseconds, over a `long`.
    pub const TIMESTAMP_MILLIS: &str = "timestamp-millis";
    /// Epoch microseconds, over a `long`.
    pub const TIMESTAMP_MICROS: &str = "timestamp-micros";
    /// Milliseconds since midnight, over an `int`.
    pub const TIME_MILLIS: &str = "time-millis";
    /// Microseconds since midnight, over a `long`.
    pub const TIME_MICROS: &str = "time-micros";
    /// Canonical textual UUID, over a `string`.
    pub const UUID: &str = "uuid";
}

/// A schema node: a base kind plus an optional logical-type annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    kind: SchemaKind,
    logical_type: Option<String>,
}

/// The closed set of base schema kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// The null type; its only value is null.
    Null,
    /// A boolean.
    Boolean,
    /// A 32-bit signed integer.
    Int,
    /// A 64-bit signed integer.
    Long,
    /// A 32-bit IEEE float.
    Float,
    /// A 64-bit IEEE float.
    Double,
    /// A variable-length byte sequence.
    Bytes,
    /// A UTF-8 string.
    String,
    /// A fixed-width byte array.
    Fixed(FixedSchema),
    /// An enumeration over named symbols.
    Enum(EnumSchema),
    /// An ordered sequence of items sharing one schema.
    Array(Box<Schema>),
    /// A string-keyed map whose values share one schema.
    Map(Box<Schema>),
    /// An ordered sequence of named, typed fields.
    Record(RecordSchema),
    /// A set of alternative schemas.
    Union(UnionSchema),
}

/// A fixed-width byte array schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSchema {
    /// The type name.
    pub name: String,
    /// Exact width in bytes.
    pub size: usize,
}

/// An enumeration schema over named symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSchema {
    /// The type name.
    pub name: String,
    /// The declared symbols, in order.
    pub symbols: Vec<String>,
}

impl EnumSchema {
    /// Returns `true` if `symbol` is one of the declared symbols.
    #[must_use]
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }
}

/// A record schema: named fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    /// The type name.
    pub name: String,
    /// The fields, in declaration order.
    pub fields: Vec<Field>,
}

impl RecordSchema {
    /// Creates a record schema.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Looks a field up by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One field of a [`RecordSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name, the key of the output document entry.
    pub name: String,
    /// The field's schema.
    pub schema: Schema,
    /// Declared default, if any. Defaults are schema metadata for callers
    /// (registries, writers); conversion of an absent value still emits the
    /// null node.
    pub default: Option<Value>,
}

impl Field {
    /// Creates a field without a default.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            default: None,
        }
    }

    /// Sets the declared default value.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// A union of alternative schemas.
///
/// The shape the converter guarantees is the nullable pair
/// `{null, T}`; see [`Schema::nullable`].
#[derive(Debug, Clone, PartialEq)]
pub struct UnionSchema {
    /// The alternatives, in declaration order.
    pub variants: Vec<Schema>,
}

impl UnionSchema {
    /// Creates a union over the given alternatives.
    #[must_use]
    pub fn new(variants: Vec<Schema>) -> Self {
        Self { variants }
    }

    /// Returns `true` if one alternative is the null schema.
    #[must_use]
    pub fn has_null(&self) -> bool {
        self.variants
            .iter()
            .any(|v| matches!(v.kind(), SchemaKind::Null))
    }

    /// The first non-null alternative, if any.
    #[must_use]
    pub fn first_non_null(&self) -> Option<&Schema> {
        self.variants
            .iter()
            .find(|v| !matches!(v.kind(), SchemaKind::Null))
    }

    /// For the exactly-`{null, T}` shape, returns `T`.
    #[must_use]
    pub fn nullable_inner(&self) -> Option<&Schema> {
        if self.variants.len() == 2 && self.has_null() {
            self.first_non_null()
        } else {
            None
        }
    }
}

impl Schema {
    fn from_kind(kind: SchemaKind) -> Self {
        Self {
            kind,
            logical_type: None,
        }
    }

    /// The null schema.
    #[must_use]
    pub fn null() -> Self {
        Self::from_kind(SchemaKind::Null)
    }

    /// The boolean schema.
    #[must_use]
    pub fn boolean() -> Self {
        Self::from_kind(SchemaKind::Boolean)
    }

    /// The 32-bit integer schema.
    #[must_use]
    pub fn int() -> Self {
        Self::from_kind(SchemaKind::Int)
    }

    /// The 64-bit integer schema.
    #[must_use]
    pub fn long() -> Self {
        Self::from_kind(SchemaKind::Long)
    }

    /// The 32-bit float schema.
    #[must_use]
    pub fn float() -> Self {
        Self::from_kind(SchemaKind::Float)
    }

    /// The 64-bit float schema.
    #[must_use]
    pub fn double() -> Self {
        Self::from_kind(SchemaKind::Double)
    }

    /// The byte-sequence schema.
    #[must_use]
    pub fn bytes() -> Self {
        Self::from_kind(SchemaKind::Bytes)
    }

    /// The string schema.
    #[must_use]
    pub fn string() -> Self {
        Self::from_kind(SchemaKind::String)
    }

    /// A fixed-width byte array schema of exactly `size` bytes.
    #[must_use]
    pub fn fixed(name: impl Into<String>, size: usize) -> Self {
        Self::from_kind(SchemaKind::Fixed(FixedSchema {
            name: name.into(),
            size,
        }))
    }

    /// An enumeration schema over the given symbols.
    #[must_use]
    pub fn enumeration<S: Into<String>>(name: impl Into<String>, symbols: Vec<S>) -> Self {
        Self::from_kind(SchemaKind::Enum(EnumSchema {
            name: name.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }))
    }

    /// An array schema with the given item schema.
    #[must_use]
    pub fn array(items: Schema) -> Self {
        Self::from_kind(SchemaKind::Array(Box::new(items)))
    }

    /// A map schema with the given value schema. Keys are strings.
    #[must_use]
    pub fn map(values: Schema) -> Self {
        Self::from_kind(SchemaKind::Map(Box::new(values)))
    }

    /// A record schema.
    #[must_use]
    pub fn record(record: RecordSchema) -> Self {
        Self::from_kind(SchemaKind::Record(record))
    }

    /// A union schema over the given alternatives.
    #[must_use]
    pub fn union(variants: Vec<Schema>) -> Self {
        Self::from_kind(SchemaKind::Union(UnionSchema::new(variants)))
    }

    /// The nullable wrapping of `inner`: the union `{null, inner}`.
    #[must_use]
    pub fn nullable(inner: Schema) -> Self {
        Self::union(vec![Schema::null(), inner])
    }

    /// An `int` annotated as whole days since the Unix epoch.
    #[must_use]
    pub fn date() -> Self {
        Self::int().with_logical_type(logical_type_names::DATE)
    }

    /// A `long` annotated as epoch milliseconds.
    #[must_use]
    pub fn timestamp_millis() -> Self {
        Self::long().with_logical_type(logical_type_names::TIMESTAMP_MILLIS)
    }

    /// A `long` annotated as epoch microseconds.
    #[must_use]
    pub fn timestamp_micros() -> Self {
        Self::long().with_logical_type(logical_type_names::TIMESTAMP_MICROS)
    }

    /// An `int` annotated as milliseconds since midnight.
    #[must_use]
    pub fn time_millis() -> Self {
        Self::int().with_logical_type(logical_type_names::TIME_MILLIS)
    }

    /// A `long` annotated as microseconds since midnight.
    #[must_use]
    pub fn time_micros() -> Self {
        Self::long().with_logical_type(logical_type_names::TIME_MICROS)
    }

    /// A `string` annotated as a canonical textual UUID.
    #[must_use]
    pub fn uuid() -> Self {
        Self::string().with_logical_type(logical_type_names::UUID)
    }

    /// Annotates this schema with a logical-type name.
    #[must_use]
    pub fn with_logical_type(mut self, name: impl Into<String>) -> Self {
        self.logical_type = Some(name.into());
        self
    }

    /// The base kind.
    #[must_use]
    pub fn kind(&self) -> &SchemaKind {
        &self.kind
    }

    /// The logical-type annotation, if any.
    #[must_use]
    pub fn logical_type(&self) -> Option<&str> {
        self.logical_type.as_deref()
    }

    /// Returns `true` for the exactly-`{null, T}` union shape.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable_inner().is_some()
    }

    /// For the exactly-`{null, T}` union shape, returns `T`.
    #[must_use]
    pub fn nullable_inner(&self) -> Option<&Schema> {
        match &self.kind {
            SchemaKind::Union(union) => union.nullable_inner(),
            _ => None,
        }
    }

    /// A short name for the base kind, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            SchemaKind::Null => "null",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Int => "int",
            SchemaKind::Long => "long",
            SchemaKind::Float => "float",
            SchemaKind::Double => "double",
            SchemaKind::Bytes => "bytes",
            SchemaKind::String => "string",
            SchemaKind::Fixed(_) => "fixed",
            SchemaKind::Enum(_) => "enum",
            SchemaKind::Array(_) => "array",
            SchemaKind::Map(_) => "map",
            SchemaKind::Record(_) => "record",
            SchemaKind::Union(_) => "union",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_constructors() {
        assert_eq!(*Schema::long().kind(), SchemaKind::Long);
        assert_eq!(*Schema::string().kind(), SchemaKind::String);
        assert!(Schema::long().logical_type().is_none());
    }

    #[test]
    fn test_nullable_shape() {
        let schema = Schema::nullable(Schema::string());
        assert!(schema.is_nullable());
        assert_eq!(*schema.nullable_inner().unwrap().kind(), SchemaKind::String);
    }

    #[test]
    fn test_non_nullable_union() {
        let schema = Schema::union(vec![Schema::int(), Schema::string()]);
        assert!(!schema.is_nullable());
        assert!(schema.nullable_inner().is_none());
    }

    #[test]
    fn test_union_of_three_is_not_nullable_shape() {
        let schema = Schema::union(vec![Schema::null(), Schema::int(), Schema::string()]);
        assert!(!schema.is_nullable());
    }

    #[test]
    fn test_union_first_non_null() {
        let schema = Schema::union(vec![Schema::null(), Schema::int(), Schema::string()]);
        match schema.kind() {
            SchemaKind::Union(union) => {
                assert!(union.has_null());
                assert_eq!(*union.first_non_null().unwrap().kind(), SchemaKind::Int);
            }
            other => panic!("expected union, got {other:?}"),
        }
    }

    #[test]
    fn test_logical_shorthands() {
        assert_eq!(Schema::date().logical_type(), Some("date"));
        assert_eq!(*Schema::date().kind(), SchemaKind::Int);
        assert_eq!(
            Schema::timestamp_micros().logical_type(),
            Some("timestamp-micros")
        );
        assert_eq!(*Schema::timestamp_micros().kind(), SchemaKind::Long);
        assert_eq!(Schema::uuid().logical_type(), Some("uuid"));
        assert_eq!(*Schema::uuid().kind(), SchemaKind::String);
    }

    #[test]
    fn test_custom_logical_annotation() {
        let schema = Schema::bytes().with_logical_type("cql_varint");
        assert_eq!(schema.logical_type(), Some("cql_varint"));
        assert_eq!(*schema.kind(), SchemaKind::Bytes);
    }

    #[test]
    fn test_enum_symbols() {
        let schema = Schema::enumeration("color", vec!["red", "green"]);
        match schema.kind() {
            SchemaKind::Enum(en) => {
                assert!(en.has_symbol("red"));
                assert!(!en.has_symbol("blue"));
            }
            other => panic!("expected enum, got {other:?}"),
        }
    }

    #[test]
    fn test_record_field_lookup() {
        let record = RecordSchema::new(
            "point",
            vec![
                Field::new("x", Schema::int()),
                Field::new("y", Schema::int()).with_default(Value::Int(0)),
            ],
        );
        assert!(record.field("x").is_some());
        assert_eq!(record.field("y").unwrap().default, Some(Value::Int(0)));
        assert!(record.field("z").is_none());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Schema::fixed("fi", 3).kind_name(), "fixed");
        assert_eq!(Schema::array(Schema::string()).kind_name(), "array");
        assert_eq!(Schema::map(Schema::int()).kind_name(), "map");
        assert_eq!(Schema::nullable(Schema::int()).kind_name(), "union");
    }
}
