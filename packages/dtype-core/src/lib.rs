//! Type descriptors for strided, zero-copy views over raw memory.
//!
//! A [`TypeDescriptor`](types::TypeDescriptor) records the kind, element
//! count, offset, stride, and element width needed to address typed data
//! inside a buffer owned elsewhere, and renders itself as schema text.

pub mod config;
pub mod error;
pub mod schema;
pub mod types;

pub use config::SchemaConfig;
pub use error::SchemaError;
pub use types::{TypeDescriptor, TypeKind};
