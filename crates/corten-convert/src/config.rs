//! Converter configuration.
//!
//! [`ConverterConfig`] carries the single policy knob the converter reads:
//! whether unrecognized logical-type annotations abort conversion or fall
//! back to the plain mapping of the underlying kind. It is parsed from a
//! string options map (the form sink option loaders hand over) or
//! deserialized directly from a settings document via `serde`.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Options-map key for the unsupported-field policy.
const IGNORE_UNSUPPORTED_FIELDS: &str = "ignore_unsupported_fields";

/// Errors raised while parsing converter options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A known configuration key has a value that cannot be parsed.
    #[error("invalid config key '{key}': {message}")]
    InvalidConfig {
        /// The configuration key.
        key: String,
        /// What was wrong with the value.
        message: String,
    },
}

/// Configuration for the record-to-JSON converter.
///
/// The default is the strict policy: an unrecognized logical type aborts
/// the record's conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Lenient unsupported-type policy. When `true`, an unrecognized
    /// logical-type annotation is dropped and the underlying primitive
    /// mapping applies; when `false`, it fails the record's conversion.
    pub ignore_unsupported_fields: bool,
}

impl ConverterConfig {
    /// Creates a config with defaults (strict policy).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unsupported-type policy.
    #[must_use]
    pub fn with_ignore_unsupported_fields(mut self, ignore: bool) -> Self {
        self.ignore_unsupported_fields = ignore;
        self
    }

    /// Parses a config from a string options map.
    ///
    /// Unknown keys are ignored so callers can pass a full sink options map
    /// through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] if a known key holds a value
    /// that does not parse.
    pub fn from_options(options: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(raw) = options.get(IGNORE_UNSUPPORTED_FIELDS) {
            cfg.ignore_unsupported_fields =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidConfig {
                        key: IGNORE_UNSUPPORTED_FIELDS.to_string(),
                        message: format!("expected a boolean, got '{raw}'"),
                    })?;
        }

        Ok(cfg)
    }
}
