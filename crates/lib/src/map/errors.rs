//! Error types for nested map operations.
//!
//! The default helpers are lenient and never fail. These errors are only
//! produced by the strict `try_*` variants and by the JSON conversions.

use thiserror::Error;

/// Structured error types for nested map operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapError {
    /// A key or path segment was not present
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// Descent along a dot path reached a value that is not a map
    #[error("Cannot descend into '{path}': found {actual}, expected map")]
    NotAMap { path: String, actual: String },

    /// A record field could not be turned into a map key
    #[error("Invalid key at entry {position}: {reason}")]
    InvalidKey { position: usize, reason: String },

    /// The path cannot address a value
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// Type mismatch while converting a value
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl MapError {
    /// Check if this error reports a missing key
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, MapError::KeyNotFound { .. })
    }

    /// Check if this error is related to type mismatches, including descent into a scalar
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            MapError::TypeMismatch { .. } | MapError::NotAMap { .. }
        )
    }

    /// Check if this error is related to key construction
    pub fn is_key_error(&self) -> bool {
        matches!(self, MapError::InvalidKey { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            MapError::NotAMap { path, .. } | MapError::InvalidPath { path } => Some(path),
            _ => None,
        }
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            MapError::KeyNotFound { key } => Some(key),
            _ => None,
        }
    }

    /// Get the offending entry position for reshaping errors
    pub fn position(&self) -> Option<usize> {
        match self {
            MapError::InvalidKey { position, .. } => Some(*position),
            _ => None,
        }
    }
}

impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
