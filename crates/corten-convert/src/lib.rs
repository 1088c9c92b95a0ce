//! # Corten Convert
//!
//! Schema-driven conversion of strongly-typed records into generic JSON
//! document trees, ready for a document-store sink to serialize and index.
//!
//! The core is [`JsonConverter`]: a total, deterministic mapping from every
//! schema construct (nullable unions, logical date/time/timestamp/uuid
//! annotations, fixed-width byte arrays, enumerations, arrays, maps with
//! non-string key representations, nested records) onto the JSON type
//! system. Logical annotations the converter does not recognize fall to a
//! single configurable policy: fail fast, or drop the annotation and keep
//! the underlying primitive mapping.
//!
//! Conversion is purely functional. The converter holds no shared mutable
//! state, performs no I/O, and reads its inputs without retaining or
//! mutating them, so independent (schema, value) pairs can be converted
//! concurrently without synchronization. Callers parallelize across
//! records, not within one record's conversion.
//!
//! Schema parsing, record decoding from the wire, and delivery of the
//! resulting tree to a store belong to the surrounding pipeline, not to
//! this crate.
//!
//! ```
//! use corten_convert::{ConverterConfig, Field, JsonConverter, RecordSchema, Schema, Value};
//!
//! let schema = RecordSchema::new(
//!     "event",
//!     vec![
//!         Field::new("id", Schema::long()),
//!         Field::new("name", Schema::nullable(Schema::string())),
//!     ],
//! );
//! let record = Value::Record(vec![("id".to_string(), Value::Long(7))]);
//!
//! let converter = JsonConverter::new(ConverterConfig::new());
//! let doc = converter.convert_record(&schema, &record)?;
//! assert_eq!(doc.get("id").unwrap().as_i64(), Some(7));
//! assert!(doc.get("name").unwrap().is_null());
//! # Ok::<(), corten_convert::ConvertError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod convert;
pub mod error;
pub mod json;
pub mod schema;
pub mod value;

pub use config::{ConfigError, ConverterConfig};
pub use convert::{
    JsonConverter, LogicalTypeConverter, LogicalTypeRegistry, LOGICAL_TYPE_REGISTRY,
};
pub use error::{ConvertError, ConvertResult};
pub use json::{JsonNode, JsonNumber};
pub use schema::{
    logical_type_names, EnumSchema, Field, FixedSchema, RecordSchema, Schema, SchemaKind,
    UnionSchema,
};
pub use value::{MapKey, Text, Value};
