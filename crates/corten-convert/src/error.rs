//! Conversion error types.
//!
//! Provides [`ConvertError`] for record-to-JSON conversion failures, plus a
//! convenience [`ConvertResult`] alias.

use thiserror::Error;

/// Result alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur while converting a typed record to a JSON tree.
///
/// Conversion is all-or-nothing: a failure means no partial tree was
/// produced for the offending record. Nothing is retried internally; the
/// surrounding sink pipeline decides whether to skip, dead-letter, or abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A field carries a logical-type annotation the converter does not
    /// recognize, and the strict policy is in effect.
    ///
    /// Retrying with the same schema and policy fails identically.
    #[error("unsupported logical type '{logical_type}'")]
    UnsupportedLogicalType {
        /// The unrecognized logical-type name.
        logical_type: String,
    },

    /// A value's runtime shape does not conform to its declared schema kind.
    ///
    /// This indicates an upstream programming or schema-registry error; the
    /// converter never coerces silently.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// What the schema declared.
        expected: String,
        /// What the value actually was.
        actual: String,
    },
}

impl ConvertError {
    /// Builds a [`ConvertError::TypeMismatch`].
    pub(crate) fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        ConvertError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Builds a [`ConvertError::UnsupportedLogicalType`].
    pub(crate) fn unsupported(logical_type: impl Into<String>) -> Self {
        ConvertError::UnsupportedLogicalType {
            logical_type: logical_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_logical_type_display() {
        let err = ConvertError::unsupported("cql_varint");
        assert_eq!(err.to_string(), "unsupported logical type 'cql_varint'");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = ConvertError::mismatch("long", "string");
        assert_eq!(err.to_string(), "type mismatch: expected long, got string");
    }

    #[test]
    fn test_errors_compare_by_content() {
        assert_eq!(
            ConvertError::unsupported("x"),
            ConvertError::UnsupportedLogicalType {
                logical_type: "x".into()
            }
        );
        assert_ne!(
            ConvertError::mismatch("int", "long"),
            ConvertError::mismatch("int", "string")
        );
    }
}
