//! Logical-type transforms and their registry.
//!
//! Each recognized logical annotation is a [`LogicalTypeConverter`]: a pure
//! transform from the raw underlying value to a JSON node, registered by
//! name. The dispatcher looks names up in [`LOGICAL_TYPE_REGISTRY`] at
//! conversion time, so extending the recognized set never touches dispatch
//! logic.
//!
//! All temporal transforms are UTC-relative integer arithmetic on the value
//! as stored; none applies a timezone adjustment.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use uuid::Uuid;

use crate::error::{ConvertError, ConvertResult};
use crate::json::{JsonNode, JsonNumber};
use crate::schema::logical_type_names as names;
use crate::value::Value;

/// Seconds per whole day, for the date transform.
const SECONDS_PER_DAY: i64 = 86_400;

/// A pure transform from a raw underlying value to a JSON node, keyed by
/// logical-type name.
pub trait LogicalTypeConverter: Send + Sync {
    /// The logical-type name this converter handles (e.g. `"date"`).
    fn logical_name(&self) -> &'static str;

    /// Transforms the raw underlying value.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::TypeMismatch`] if the value is not the
    /// expected underlying kind for this annotation.
    fn convert(&self, value: &Value) -> ConvertResult<JsonNode>;
}

/// Registry of logical-type converters.
///
/// Thread-safe map from logical-type name to [`LogicalTypeConverter`].
/// A global instance pre-populated with the built-ins is available via
/// [`LOGICAL_TYPE_REGISTRY`].
pub struct LogicalTypeRegistry {
    converters: RwLock<HashMap<String, Arc<dyn LogicalTypeConverter>>>,
}

impl LogicalTypeRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            converters: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a converter.
    ///
    /// If a converter for the same name already exists, it is replaced.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn register(&self, converter: Arc<dyn LogicalTypeConverter>) {
        let name = converter.logical_name().to_string();
        self.converters
            .write()
            .expect("logical type registry poisoned")
            .insert(name, converter);
    }

    /// Gets the converter for a logical-type name, if registered.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn LogicalTypeConverter>> {
        self.converters
            .read()
            .expect("logical type registry poisoned")
            .get(name)
            .cloned()
    }

    /// Returns the names of all registered logical types.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn registered_names(&self) -> Vec<String> {
        self.converters
            .read()
            .expect("logical type registry poisoned")
            .keys()
            .cloned()
            .collect()
    }
}

impl Default for LogicalTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global logical-type registry, pre-populated with the built-in transforms.
pub static LOGICAL_TYPE_REGISTRY: LazyLock<LogicalTypeRegistry> = LazyLock::new(|| {
    let registry = LogicalTypeRegistry::new();
    registry.register(Arc::new(DateConverter));
    registry.register(Arc::new(TimestampMillisConverter));
    registry.register(Arc::new(TimestampMicrosConverter));
    registry.register(Arc::new(TimeMillisConverter));
    registry.register(Arc::new(TimeMicrosConverter));
    registry.register(Arc::new(UuidConverter));
    registry
});

/// Whole days since epoch over an `int`, emitted as epoch seconds.
pub struct DateConverter;

impl LogicalTypeConverter for DateConverter {
    fn logical_name(&self) -> &'static str {
        names::DATE
    }

    fn convert(&self, value: &Value) -> ConvertResult<JsonNode> {
        match value {
            Value::Int(days) => Ok(JsonNode::Number(JsonNumber::Int(
                i64::from(*days) * SECONDS_PER_DAY,
            ))),
            other => Err(ConvertError::mismatch(
                "int (days since epoch)",
                other.kind_name(),
            )),
        }
    }
}

/// Epoch milliseconds over a `long`, emitted verbatim.
pub struct TimestampMillisConverter;

impl LogicalTypeConverter for TimestampMillisConverter {
    fn logical_name(&self) -> &'static str {
        names::TIMESTAMP_MILLIS
    }

    fn convert(&self, value: &Value) -> ConvertResult<JsonNode> {
        match value {
            Value::Long(millis) => Ok(JsonNode::Number(JsonNumber::Int(*millis))),
            other => Err(ConvertError::mismatch(
                "long (epoch milliseconds)",
                other.kind_name(),
            )),
        }
    }
}

/// Epoch microseconds over a `long`, emitted verbatim.
pub struct TimestampMicrosConverter;

impl LogicalTypeConverter for TimestampMicrosConverter {
    fn logical_name(&self) -> &'static str {
        names::TIMESTAMP_MICROS
    }

    fn convert(&self, value: &Value) -> ConvertResult<JsonNode> {
        match value {
            Value::Long(micros) => Ok(JsonNode::Number(JsonNumber::Int(*micros))),
            other => Err(ConvertError::mismatch(
                "long (epoch microseconds)",
                other.kind_name(),
            )),
        }
    }
}

/// Milliseconds since midnight over an `int`, emitted verbatim.
pub struct TimeMillisConverter;

impl LogicalTypeConverter for TimeMillisConverter {
    fn logical_name(&self) -> &'static str {
        names::TIME_MILLIS
    }

    fn convert(&self, value: &Value) -> ConvertResult<JsonNode> {
        match value {
            Value::Int(millis) => Ok(JsonNode::Number(JsonNumber::Int(i64::from(*millis)))),
            other => Err(ConvertError::mismatch(
                "int (milliseconds since midnight)",
                other.kind_name(),
            )),
        }
    }
}

/// Microseconds since midnight over a `long`, emitted verbatim.
pub struct TimeMicrosConverter;

impl LogicalTypeConverter for TimeMicrosConverter {
    fn logical_name(&self) -> &'static str {
        names::TIME_MICROS
    }

    fn convert(&self, value: &Value) -> ConvertResult<JsonNode> {
        match value {
            Value::Long(micros) => Ok(JsonNode::Number(JsonNumber::Int(*micros))),
            other => Err(ConvertError::mismatch(
                "long (microseconds since midnight)",
                other.kind_name(),
            )),
        }
    }
}

/// Canonical textual UUID over a `string`, validated and emitted verbatim.
pub struct UuidConverter;

impl LogicalTypeConverter for UuidConverter {
    fn logical_name(&self) -> &'static str {
        names::UUID
    }

    fn convert(&self, value: &Value) -> ConvertResult<JsonNode> {
        match value {
            Value::String(text) => {
                Uuid::parse_str(text).map_err(|e| {
                    ConvertError::mismatch("uuid text", format!("unparseable uuid '{text}': {e}"))
                })?;
                Ok(JsonNode::String(text.clone()))
            }
            other => Err(ConvertError::mismatch("uuid text", other.kind_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let mut registered = LOGICAL_TYPE_REGISTRY.registered_names();
        registered.sort();
        for name in [
            "date",
            "time-micros",
            "time-millis",
            "timestamp-micros",
            "timestamp-millis",
            "uuid",
        ] {
            assert!(registered.contains(&name.to_string()), "missing {name}");
        }
    }

    #[test]
    fn test_date_days_to_epoch_seconds() {
        let node = DateConverter.convert(&Value::Int(3)).unwrap();
        assert_eq!(node.as_i64(), Some(3 * 86_400));

        let node = DateConverter.convert(&Value::Int(-1)).unwrap();
        assert_eq!(node.as_i64(), Some(-86_400));
    }

    #[test]
    fn test_date_rejects_wrong_kind() {
        let err = DateConverter.convert(&Value::Long(3)).unwrap_err();
        assert!(matches!(err, ConvertError::TypeMismatch { .. }));
    }

    #[test]
    fn test_timestamps_pass_through() {
        let node = TimestampMillisConverter
            .convert(&Value::Long(1_695_000_123_456))
            .unwrap();
        assert_eq!(node.as_i64(), Some(1_695_000_123_456));

        let node = TimestampMicrosConverter
            .convert(&Value::Long(1_695_000_123_456_789))
            .unwrap();
        assert_eq!(node.as_i64(), Some(1_695_000_123_456_789));
    }

    #[test]
    fn test_times_pass_through() {
        let node = TimeMillisConverter.convert(&Value::Int(34_567)).unwrap();
        assert_eq!(node.as_i64(), Some(34_567));

        let node = TimeMicrosConverter
            .convert(&Value::Long(34_567_000))
            .unwrap();
        assert_eq!(node.as_i64(), Some(34_567_000));
    }

    #[test]
    fn test_uuid_verbatim() {
        let text = "f81d4fae-7dec-11d0-a765-00a0c91e6bf6";
        let node = UuidConverter
            .convert(&Value::String(text.to_string()))
            .unwrap();
        assert_eq!(node.as_str(), Some(text));
        assert_eq!(Uuid::parse_str(node.as_str().unwrap()).unwrap().to_string(), text);
    }

    #[test]
    fn test_uuid_rejects_garbage() {
        let err = UuidConverter
            .convert(&Value::String("not-a-uuid".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("not-a-uuid"));

        let err = UuidConverter.convert(&Value::Long(7)).unwrap_err();
        assert!(matches!(err, ConvertError::TypeMismatch { .. }));
    }

    #[test]
    fn test_register_replaces() {
        struct Shadow;
        impl LogicalTypeConverter for Shadow {
            fn logical_name(&self) -> &'static str {
                "shadow-test-name"
            }
            fn convert(&self, _value: &Value) -> ConvertResult<JsonNode> {
                Ok(JsonNode::Null)
            }
        }

        let registry = LogicalTypeRegistry::new();
        assert!(registry.get("shadow-test-name").is_none());
        registry.register(Arc::new(Shadow));
        assert!(registry.get("shadow-test-name").is_some());
        registry.register(Arc::new(Shadow));
        assert_eq!(registry.registered_names().len(), 1);
    }
}
