//! Schema parsing errors.

use thiserror::Error;

/// Errors raised while parsing schema text into a descriptor.
///
/// Descriptor operations themselves never fail; these only cover
/// malformed external input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Text is not valid JSON
    #[error("Invalid schema JSON: {0}")]
    InvalidJson(String),

    /// Top-level JSON value is not an object
    #[error("Schema must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    /// Object has no "dtype" key
    #[error("Schema is missing the \"dtype\" key")]
    MissingDtype,

    /// A key holds a value of the wrong type
    #[error("Schema field '{field}' is invalid: {message}")]
    InvalidField { field: &'static str, message: String },

    /// Dtype name is not in the catalog (strict parsing only)
    #[error("Unknown dtype '{name}'")]
    UnknownDtype { name: String },
}

/// Result alias for schema parsing.
pub type Result<T> = std::result::Result<T, SchemaError>;
