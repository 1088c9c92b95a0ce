//! Record instance values consumed by the converter.
//!
//! A [`Value`] is the runtime shape asserted to conform to some
//! [`Schema`](crate::schema::Schema). Values are built by the caller (or
//! mapped from a record-decoding library) and only read here; the converter
//! hands back an independent output tree.

use std::fmt;

/// An owned, always-valid-UTF-8 text wrapper.
///
/// Record decoders that keep text in a dedicated wrapper type (rather than a
/// plain string) surface map keys as [`MapKey::Text`]. The wrapper carries
/// no behavior beyond access to the underlying text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text(String);

impl Text {
    /// Wraps the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The wrapped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps into the owned text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A map entry key, as it arrives from the record decoder.
///
/// Keys come in two textual representations; both normalize to the same
/// string through [`MapKey::as_str`] before the recursive converter ever
/// sees the entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MapKey {
    /// A plain string key.
    String(String),
    /// A key in the wrapped text type.
    Text(Text),
}

impl MapKey {
    /// The normalized string form of the key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            MapKey::String(s) => s,
            MapKey::Text(t) => t.as_str(),
        }
    }
}

impl From<&str> for MapKey {
    fn from(key: &str) -> Self {
        MapKey::String(key.to_string())
    }
}

impl From<String> for MapKey {
    fn from(key: String) -> Self {
        MapKey::String(key)
    }
}

impl From<Text> for MapKey {
    fn from(key: Text) -> Self {
        MapKey::Text(key)
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value conforming to some schema.
///
/// Containers preserve insertion order: arrays keep element order, maps keep
/// entry order, records keep field order as built. Conversion of a record is
/// nevertheless driven by the schema's declared field order, with lookup by
/// name.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null value, also standing in for an absent field.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A 32-bit signed integer.
    Int(i32),
    /// A 64-bit signed integer.
    Long(i64),
    /// A 32-bit IEEE float.
    Float(f32),
    /// A 64-bit IEEE float.
    Double(f64),
    /// A variable-length byte sequence.
    Bytes(Vec<u8>),
    /// A UTF-8 string.
    String(String),
    /// A fixed-width byte array.
    Fixed(Vec<u8>),
    /// The active symbol of an enumeration, by name.
    Enum(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// Map entries in insertion order.
    Map(Vec<(MapKey, Value)>),
    /// Record fields in insertion order.
    Record(Vec<(String, Value)>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// For a [`Value::Record`], looks a field value up by name.
    ///
    /// Returns `None` for missing fields and for non-record values.
    #[must_use]
    pub fn record_field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// A short name for the value's runtime shape, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Bytes(_) => "bytes",
            Value::String(_) => "string",
            Value::Fixed(_) => "fixed",
            Value::Enum(_) => "enum",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Record(_) => "record",
        }
    }
}
