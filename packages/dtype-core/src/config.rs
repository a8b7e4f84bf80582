//! Schema parsing configuration.

/// Options for parsing schema text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Reject dtype names outside the catalog instead of mapping them to
    /// `[empty]` (default: false)
    pub strict_dtype: bool,
}

impl SchemaConfig {
    /// Returns a config that rejects unknown dtype names.
    pub fn strict() -> Self {
        Self { strict_dtype: true }
    }
}
