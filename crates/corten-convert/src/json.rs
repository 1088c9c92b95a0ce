//! The output JSON document tree.
//!
//! [`JsonNode`] is the unit the converter produces: a standalone tree with
//! no references back into the input schema or value. It distinguishes
//! integer from floating numbers and carries raw binary as a first-class
//! node; how binary reaches the wire is the sink's decision, with base64
//! text as the provided `serde` rendering.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A JSON number, with the integer/floating distinction preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    /// An integer number.
    Int(i64),
    /// A floating number.
    Float(f64),
}

/// One node of the output JSON document tree.
///
/// Object entries keep insertion order; inserting an existing key again
/// overwrites the value in place (last write wins).
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNode {
    /// The null node.
    Null,
    /// A boolean node.
    Boolean(bool),
    /// A number node.
    Number(JsonNumber),
    /// A string node.
    String(String),
    /// A raw byte-sequence node.
    Binary(Vec<u8>),
    /// An ordered array of nodes.
    Array(Vec<JsonNode>),
    /// An object node, insertion order preserved.
    Object(IndexMap<String, JsonNode>),
}

impl JsonNode {
    /// An empty object node.
    #[must_use]
    pub fn object() -> Self {
        JsonNode::Object(IndexMap::new())
    }

    /// For an object node, looks an entry up by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonNode> {
        match self {
            JsonNode::Object(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Returns `true` for the null node.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonNode::Null)
    }

    /// Returns `true` for array nodes.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, JsonNode::Array(_))
    }

    /// Returns `true` for object nodes.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, JsonNode::Object(_))
    }

    /// The boolean value, for boolean nodes.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonNode::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer value, for integer number nodes.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonNode::Number(JsonNumber::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// The numeric value widened to `f64`, for any number node.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonNode::Number(JsonNumber::Int(i)) => {
                #[allow(clippy::cast_precision_loss)]
                let widened = *i as f64;
                Some(widened)
            }
            JsonNode::Number(JsonNumber::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// The text value, for string nodes.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonNode::String(s) => Some(s),
            _ => None,
        }
    }

    /// The raw bytes, for binary nodes.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            JsonNode::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The elements, for array nodes.
    #[must_use]
    pub fn as_array(&self) -> Option<&[JsonNode]> {
        match self {
            JsonNode::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, for object nodes.
    #[must_use]
    pub fn as_object(&self) -> Option<&IndexMap<String, JsonNode>> {
        match self {
            JsonNode::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Bridges the tree into a [`serde_json::Value`].
    ///
    /// Binary nodes become base64 text. A non-finite floating number has no
    /// JSON representation and becomes null.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            JsonNode::Null => serde_json::Value::Null,
            JsonNode::Boolean(b) => serde_json::Value::Bool(*b),
            JsonNode::Number(JsonNumber::Int(i)) => serde_json::Value::Number((*i).into()),
            JsonNode::Number(JsonNumber::Float(f)) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            JsonNode::String(s) => serde_json::Value::String(s.clone()),
            JsonNode::Binary(bytes) => serde_json::Value::String(BASE64.encode(bytes)),
            JsonNode::Array(items) => {
                serde_json::Value::Array(items.iter().map(JsonNode::to_json_value).collect())
            }
            JsonNode::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for JsonNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonNode::Null => serializer.serialize_unit(),
            JsonNode::Boolean(b) => serializer.serialize_bool(*b),
            JsonNode::Number(JsonNumber::Int(i)) => serializer.serialize_i64(*i),
            JsonNode::Number(JsonNumber::Float(f)) => serializer.serialize_f64(*f),
            JsonNode::String(s) => serializer.serialize_str(s),
            JsonNode::Binary(bytes) => serializer.serialize_str(&BASE64.encode(bytes)),
            JsonNode::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonNode::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert!(JsonNode::Null.is_null());
        assert_eq!(JsonNode::Boolean(true).as_bool(), Some(true));
        assert_eq!(JsonNode::Number(JsonNumber::Int(42)).as_i64(), Some(42));
        assert_eq!(JsonNode::Number(JsonNumber::Int(42)).as_f64(), Some(42.0));
        assert_eq!(
            JsonNode::Number(JsonNumber::Float(10.5)).as_f64(),
            Some(10.5)
        );
        assert_eq!(JsonNode::Number(JsonNumber::Float(10.5)).as_i64(), None);
        assert_eq!(JsonNode::String("toto".into()).as_str(), Some("toto"));
        assert_eq!(
            JsonNode::Binary(vec![1, 2]).as_bytes(),
            Some([1u8, 2].as_slice())
        );
    }

    #[test]
    fn test_object_get_and_order() {
        let mut entries = IndexMap::new();
        entries.insert("b".to_string(), JsonNode::Null);
        entries.insert("a".to_string(), JsonNode::Boolean(true));
        let node = JsonNode::Object(entries);

        assert!(node.is_object());
        assert_eq!(node.get("a"), Some(&JsonNode::Boolean(true)));
        assert_eq!(node.get("missing"), None);
        let keys: Vec<_> = node.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_object_last_write_wins() {
        let mut entries = IndexMap::new();
        entries.insert("k".to_string(), JsonNode::Boolean(false));
        entries.insert("k".to_string(), JsonNode::Boolean(true));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["k"], JsonNode::Boolean(true));
    }

    #[test]
    fn test_serialize_scalars() {
        assert_eq!(serde_json::to_string(&JsonNode::Null).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&JsonNode::Number(JsonNumber::Int(1))).unwrap(),
            "1"
        );
        assert_eq!(
            serde_json::to_string(&JsonNode::Number(JsonNumber::Float(10.0))).unwrap(),
            "10.0"
        );
        assert_eq!(
            serde_json::to_string(&JsonNode::String("toto".into())).unwrap(),
            "\"toto\""
        );
    }

    #[test]
    fn test_serialize_binary_as_base64() {
        let node = JsonNode::Binary(b"10".to_vec());
        assert_eq!(serde_json::to_string(&node).unwrap(), "\"MTA=\"");
    }

    #[test]
    fn test_serialize_preserves_key_order() {
        let mut entries = IndexMap::new();
        entries.insert("z".to_string(), JsonNode::Number(JsonNumber::Int(1)));
        entries.insert("a".to_string(), JsonNode::Number(JsonNumber::Int(2)));
        let rendered = serde_json::to_string(&JsonNode::Object(entries)).unwrap();
        assert_eq!(rendered, r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn test_to_json_value() {
        let mut entries = IndexMap::new();
        entries.insert("bytes".to_string(), JsonNode::Binary(b"10".to_vec()));
        entries.insert(
            "items".to_string(),
            JsonNode::Array(vec![JsonNode::String("toto".into())]),
        );
        let value = JsonNode::Object(entries).to_json_value();
        assert_eq!(value["bytes"], serde_json::json!("MTA="));
        assert_eq!(value["items"], serde_json::json!(["toto"]));
    }

    #[test]
    fn test_to_json_value_non_finite_float() {
        let node = JsonNode::Number(JsonNumber::Float(f64::NAN));
        assert_eq!(node.to_json_value(), serde_json::Value::Null);
    }
}
