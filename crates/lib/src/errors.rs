//! Error types for container operations.
//!
//! Missing keys and paths are never errors in this crate: lookups signal
//! absence through `Option`/`bool` returns. The variants here cover the
//! remaining failure modes, which are caller-side precondition violations
//! (writing through an empty path, using a non-scalar value as a key) and
//! typed-conversion mismatches.

use thiserror::Error;

/// Structured error types for container operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum MapError {
    /// Type mismatch during a typed conversion
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A write was attempted through an empty path
    #[error("empty path: a write needs at least one segment")]
    EmptyPath,

    /// A value could not be used as an entry key
    #[error("invalid key: {reason}")]
    InvalidKey { reason: String },
}

impl MapError {
    /// Check if this error is a typed-conversion mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, MapError::TypeMismatch { .. })
    }

    /// Check if this error is a path precondition violation
    pub fn is_empty_path(&self) -> bool {
        matches!(self, MapError::EmptyPath)
    }

    /// Check if this error is a key conversion failure
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, MapError::InvalidKey { .. })
    }
}

// Conversion from MapError to the main Error type
impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
