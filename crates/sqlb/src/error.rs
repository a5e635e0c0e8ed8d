//! Error types for sqlb

use thiserror::Error;

/// Result type alias for sqlb operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Error types for statement building
#[derive(Debug, Error)]
pub enum BuildError {
    /// A record field whose type has no SQL rendering
    #[error("unsupported field type: {kind}")]
    UnsupportedType { kind: String },

    /// A terminal call could not produce a usable statement
    #[error("sql build failed: {0}")]
    Build(String),
}

impl BuildError {
    /// Create an unsupported-type error naming the offending field kind
    pub fn unsupported_type(kind: impl Into<String>) -> Self {
        Self::UnsupportedType { kind: kind.into() }
    }

    /// Create a build failure error
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build(message.into())
    }

    /// Check if this is an unsupported-type error
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType { .. })
    }
}
