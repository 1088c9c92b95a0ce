//! Recursive, schema-driven conversion of record values into JSON trees.
//!
//! [`JsonConverter`] is the dispatch core: given a schema node and a value
//! asserted to conform to it, it produces exactly one [`JsonNode`],
//! recursing through containers. Logical annotations resolve through the
//! [`LOGICAL_TYPE_REGISTRY`] before the base-kind mapping; unrecognized
//! annotations fall to the configured policy.

pub mod logical;

pub use logical::{LogicalTypeConverter, LogicalTypeRegistry, LOGICAL_TYPE_REGISTRY};

use indexmap::IndexMap;
use tracing::debug;

use crate::config::ConverterConfig;
use crate::error::{ConvertError, ConvertResult};
use crate::json::{JsonNode, JsonNumber};
use crate::schema::{RecordSchema, Schema, SchemaKind};
use crate::value::Value;

/// Converts schema-conforming record values into JSON document trees.
///
/// An instance is bound to its [`ConverterConfig`] once and is otherwise
/// stateless: it holds no caches and never mutates or retains its inputs,
/// so one instance can convert any number of (schema, value) pairs
/// concurrently from any number of threads. Recursion depth mirrors schema
/// nesting depth; schemas are assumed acyclic.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter {
    config: ConverterConfig,
}

impl JsonConverter {
    /// Creates a converter bound to the given config.
    #[must_use]
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Creates a converter with the default (strict) config.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The bound configuration.
    #[must_use]
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts a top-level record into a JSON document node.
    ///
    /// One object entry per schema-declared field, in declaration order;
    /// a field with no value present maps to the null node, the key is
    /// never omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::TypeMismatch`] if `record` is not a record
    /// value, or propagates the first failure from a field's conversion.
    pub fn convert_record(&self, schema: &RecordSchema, record: &Value) -> ConvertResult<JsonNode> {
        let Value::Record(fields) = record else {
            return Err(ConvertError::mismatch(
                format!("record '{}'", schema.name),
                record.kind_name(),
            ));
        };

        let mut doc = IndexMap::with_capacity(schema.fields.len());
        for field in &schema.fields {
            let node = match fields.iter().find(|(name, _)| *name == field.name) {
                Some((_, value)) => self.convert(&field.schema, value)?,
                None => JsonNode::Null,
            };
            doc.insert(field.name.clone(), node);
        }
        Ok(JsonNode::Object(doc))
    }

    /// Converts any (schema, value) pair into a JSON node.
    ///
    /// Total over conforming inputs: a null value yields the null node for
    /// any schema, a recognized logical annotation reinterprets the raw
    /// underlying value, containers recurse in order.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedLogicalType`] for an unrecognized
    /// logical annotation under the strict policy, and
    /// [`ConvertError::TypeMismatch`] when the value's runtime shape does
    /// not conform to the schema kind.
    pub fn convert(&self, schema: &Schema, value: &Value) -> ConvertResult<JsonNode> {
        if value.is_null() {
            return Ok(JsonNode::Null);
        }

        if let Some(name) = schema.logical_type() {
            if let Some(converter) = LOGICAL_TYPE_REGISTRY.get(name) {
                return converter.convert(value);
            }
            if !self.config.ignore_unsupported_fields {
                return Err(ConvertError::unsupported(name));
            }
            debug!(
                logical_type = name,
                kind = schema.kind_name(),
                "ignoring unrecognized logical type annotation"
            );
        }

        match schema.kind() {
            SchemaKind::Null => Ok(JsonNode::Null),
            SchemaKind::Boolean => match value {
                Value::Boolean(b) => Ok(JsonNode::Boolean(*b)),
                other => Err(ConvertError::mismatch("boolean", other.kind_name())),
            },
            SchemaKind::Int => match value {
                Value::Int(i) => Ok(JsonNode::Number(JsonNumber::Int(i64::from(*i)))),
                other => Err(ConvertError::mismatch("int", other.kind_name())),
            },
            SchemaKind::Long => match value {
                Value::Long(l) => Ok(JsonNode::Number(JsonNumber::Int(*l))),
                other => Err(ConvertError::mismatch("long", other.kind_name())),
            },
            SchemaKind::Float => match value {
                Value::Float(f) => Ok(JsonNode::Number(JsonNumber::Float(f64::from(*f)))),
                other => Err(ConvertError::mismatch("float", other.kind_name())),
            },
            SchemaKind::Double => match value {
                Value::Double(d) => Ok(JsonNode::Number(JsonNumber::Float(*d))),
                other => Err(ConvertError::mismatch("double", other.kind_name())),
            },
            SchemaKind::Bytes => match value {
                Value::Bytes(bytes) => Ok(JsonNode::Binary(bytes.clone())),
                other => Err(ConvertError::mismatch("bytes", other.kind_name())),
            },
            SchemaKind::String => match value {
                Value::String(s) => Ok(JsonNode::String(s.clone())),
                other => Err(ConvertError::mismatch("string", other.kind_name())),
            },
            SchemaKind::Fixed(fixed) => match value {
                Value::Fixed(bytes) if bytes.len() == fixed.size => {
                    Ok(JsonNode::Binary(bytes.clone()))
                }
                Value::Fixed(bytes) => Err(ConvertError::mismatch(
                    format!("fixed '{}' of {} bytes", fixed.name, fixed.size),
                    format!("fixed of {} bytes", bytes.len()),
                )),
                other => Err(ConvertError::mismatch(
                    format!("fixed '{}'", fixed.name),
                    other.kind_name(),
                )),
            },
            SchemaKind::Enum(en) => match value {
                Value::Enum(symbol) if en.has_symbol(symbol) => {
                    Ok(JsonNode::String(symbol.clone()))
                }
                Value::Enum(symbol) => Err(ConvertError::mismatch(
                    format!("a symbol of enum '{}'", en.name),
                    format!("symbol '{symbol}'"),
                )),
                other => Err(ConvertError::mismatch(
                    format!("enum '{}'", en.name),
                    other.kind_name(),
                )),
            },
            SchemaKind::Array(items) => match value {
                Value::Array(elements) => {
                    let mut out = Vec::with_capacity(elements.len());
                    for element in elements {
                        out.push(self.convert(items, element)?);
                    }
                    Ok(JsonNode::Array(out))
                }
                other => Err(ConvertError::mismatch("array", other.kind_name())),
            },
            SchemaKind::Map(values) => match value {
                Value::Map(entries) => {
                    let mut doc = IndexMap::with_capacity(entries.len());
                    for (key, entry) in entries {
                        doc.insert(key.as_str().to_string(), self.convert(values, entry)?);
                    }
                    Ok(JsonNode::Object(doc))
                }
                other => Err(ConvertError::mismatch("map", other.kind_name())),
            },
            SchemaKind::Record(record) => self.convert_record(record, value),
            SchemaKind::Union(union) => match union.first_non_null() {
                Some(branch) => self.convert(branch, value),
                None => Err(ConvertError::mismatch("null", value.kind_name())),
            },
        }
    }
}
