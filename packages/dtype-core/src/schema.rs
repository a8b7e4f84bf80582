//! Schema text for descriptors.
//!
//! Emission follows a fixed layout:
//!
//! - empty kind: `{"dtype":"[empty]"}`
//! - scalar kinds: `{"dtype":"uint32", "length":10, "offset":0, "stride":4, "element_bytes":4}`
//! - everything else: `{"dtype":"[unknown]"}`
//!
//! Parsing accepts any JSON object with a `"dtype"` string; the geometry
//! keys are optional and default to 0.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::config::SchemaConfig;
use crate::error::{Result, SchemaError};
use crate::types::{type_name_to_id, TypeDescriptor, TypeKind, EMPTY_NAME};

/// Sentinel emitted for kinds whose layout the schema cannot express.
pub const UNKNOWN_NAME: &str = "[unknown]";

const DTYPE_KEY: &str = "dtype";
const LENGTH_KEY: &str = "length";
const OFFSET_KEY: &str = "offset";
const STRIDE_KEY: &str = "stride";
const ELEMENT_BYTES_KEY: &str = "element_bytes";

impl TypeDescriptor {
    /// Writes the schema text of this descriptor into `out`.
    pub fn write_schema<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("{\"dtype\":")?;
        match self.kind() {
            Some(TypeKind::Empty) => write!(out, "\"{}\"", EMPTY_NAME)?,
            Some(kind) if kind.is_scalar() => write!(
                out,
                "\"{}\", \"{}\":{}, \"{}\":{}, \"{}\":{}, \"{}\":{}",
                kind.name(),
                LENGTH_KEY,
                self.number_of_elements(),
                OFFSET_KEY,
                self.offset(),
                STRIDE_KEY,
                self.stride(),
                ELEMENT_BYTES_KEY,
                self.element_bytes(),
            )?,
            _ => write!(out, "\"{}\"", UNKNOWN_NAME)?,
        }
        out.write_str("}")
    }

    /// Returns the schema text of this descriptor.
    pub fn schema(&self) -> String {
        self.to_string()
    }

    /// Parses schema text with the default (lenient) config.
    pub fn from_schema(text: &str) -> Result<Self> {
        Self::from_schema_with(text, &SchemaConfig::default())
    }

    /// Parses schema text.
    ///
    /// # Arguments
    /// * `text` - JSON object with a `"dtype"` key
    /// * `config` - Parse options
    ///
    /// # Returns
    /// The described descriptor, or `Err(SchemaError)` for malformed text.
    /// Unknown dtype names map to the empty kind unless
    /// `config.strict_dtype` is set.
    pub fn from_schema_with(text: &str, config: &SchemaConfig) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;
        let object = match &value {
            Value::Object(object) => object,
            other => {
                return Err(SchemaError::NotAnObject {
                    found: json_type_name(other),
                })
            }
        };

        let dtype_name = match object.get(DTYPE_KEY) {
            Some(Value::String(name)) => name.as_str(),
            Some(other) => {
                return Err(SchemaError::InvalidField {
                    field: DTYPE_KEY,
                    message: format!("expected string, got {}", json_type_name(other)),
                })
            }
            None => return Err(SchemaError::MissingDtype),
        };

        if TypeKind::from_name(dtype_name).is_none() {
            if config.strict_dtype {
                return Err(SchemaError::UnknownDtype {
                    name: dtype_name.to_string(),
                });
            }
            tracing::debug!(
                "schema dtype {:?} is not in the catalog, reading as {}",
                dtype_name,
                EMPTY_NAME
            );
        }

        Ok(TypeDescriptor::new(
            type_name_to_id(dtype_name),
            read_u64(object, LENGTH_KEY)?,
            read_i64(object, OFFSET_KEY)?,
            read_i64(object, STRIDE_KEY)?,
            read_u64(object, ELEMENT_BYTES_KEY)?,
        ))
    }
}

/// Parses schema text leniently.
impl FromStr for TypeDescriptor {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        TypeDescriptor::from_schema(s)
    }
}

fn read_u64(object: &Map<String, Value>, field: &'static str) -> Result<u64> {
    match object.get(field) {
        None => Ok(0),
        Some(value) => value.as_u64().ok_or_else(|| SchemaError::InvalidField {
            field,
            message: format!("expected non-negative integer, got {}", value),
        }),
    }
}

fn read_i64(object: &Map<String, Value>, field: &'static str) -> Result<i64> {
    match object.get(field) {
        None => Ok(0),
        Some(value) => value.as_i64().ok_or_else(|| SchemaError::InvalidField {
            field,
            message: format!("expected integer, got {}", value),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
