//!
//! nestmap: convenience operations over nested, key-addressable maps.
//!
//! ## Core Concepts
//!
//! * **Maps (`map::NestedMap`)**: insertion-ordered maps from integer or text keys to values, nested to any depth.
//! * **Keys (`map::Key`)**: integer or text. Integer-like strings are coerced, so `"3"` and `3` are the same key.
//! * **Values (`map::Value`)**: a tagged union of scalars, lists and nested maps.
//! * **Dot paths (`map::DotPath`)**: a text key split on `.` to address nested levels. Whether a dotted key is a path is chosen per call with `map::PathMode`.
//! * **Helpers (`helpers`)**: stateless functions for dot-path access, filtering, merging and reshaping record lists.
//!     * **Access**: `get`, `set`, `exists`, `remove`.
//!     * **Filter**: key predicates with a default for empty input and an optional limit.
//!     * **Merge**: shallow or deep right-biased union.
//!     * **Reshape**: index records by a field, or map one field to another, optionally grouped.
//!
//! Every helper is lenient: missing keys and type mismatches degrade to a
//! default or an empty result. The `try_*` variants are the strict
//! counterparts and report a [`map::MapError`] instead.
//!
//! ```
//! use nestmap::{NestedMap, PathMode, Value, get, set};
//!
//! let config = set(&NestedMap::new(), "db.primary.host", "localhost", PathMode::Dotted);
//! assert_eq!(get(&config, "db.primary.host", Value::Null, true), "localhost");
//! assert_eq!(get(&config, "db.replica.host", "none", true), "none");
//! ```

pub mod helpers;
pub mod map;

pub use helpers::{
    Filtered, MergeMode, exists, filter, filter_entries, get, get_or_all, lookup, merge,
    merge_in_place, remove, remove_in_place, set, set_in_place, to_key_index, to_key_value,
    to_key_value_group, try_get, try_set, try_to_key_index, try_to_key_value,
    try_to_key_value_group,
};
pub use map::{DotPath, Key, MapError, NestedMap, PathMode, Value};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structured map errors from the map module
    #[error(transparent)]
    Map(map::MapError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Json(_) => "json",
            Error::Map(_) => "map",
        }
    }

    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_not_found_error(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error came from malformed JSON input.
    pub fn is_json_error(&self) -> bool {
        matches!(self, Error::Json(_))
    }
}
