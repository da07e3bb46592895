//! Error types for schema assembly and validation
//!
//! Configuration defects (an unresolved forward type reference, a root
//! type that cannot be constructed) surface as `SchemaError` and abort
//! the build. Registration conflicts and lint findings never do; they
//! are handled through warnings and reports instead.

/// Errors raised while assembling a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A referenced type was never registered
    #[error("Type not found: {0}")]
    NotFound(String),

    /// A field definition is unusable as registered
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// A schema component carries data the build cannot accept
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl SchemaError {
    /// Create a not found error with context
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid field error with context
    pub fn invalid_field<S: Into<String>>(msg: S) -> Self {
        Self::InvalidField(msg.into())
    }

    /// Create an invalid data error with context
    pub fn invalid_data<S: Into<String>>(msg: S) -> Self {
        Self::InvalidData(msg.into())
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
