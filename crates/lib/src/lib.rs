//!
//! Seqmap: an insertion-ordered, key-addressable container with path-based
//! access and a functional combinator suite.
//!
//! ## Core Concepts
//!
//! The crate is built around a handful of types:
//!
//! * **Containers (`SeqMap`)**: A mutable mapping from keys to values whose
//!   iteration order is insertion order. Containers built from sequences
//!   carry contiguous integer keys (the "list view"); containers built from
//!   mappings carry arbitrary keys. Both behave identically.
//! * **Keys (`Key`)**: Text or non-negative integers, one shared key space.
//! * **Values (`Value`)**: Scalars (null, bool, int, float, text) or nested
//!   containers. Nesting is strictly tree-shaped, enforced by ownership.
//! * **Paths (`Path`)**: Ordered key sequences descending through nested
//!   containers. Reads through missing or scalar intermediates resolve
//!   softly; writes create the missing structure (auto-vivification).
//! * **Combinators**: `map`, `filter`, `foldl`/`foldr`, `key_by`, `column`,
//!   `chunk`, `flatten`, `sort_by_fields`, and friends: pure operations
//!   over the ordered iteration contract, each returning a fresh container.
//!
//! ## Usage
//!
//! ```
//! use seqmap::{SeqMap, path};
//!
//! let mut inventory = SeqMap::new();
//! inventory.set(path!("widgets", "count"), 10);
//! inventory.set(path!("gadgets", "count"), 3);
//!
//! let counts = inventory.column("count");
//! assert_eq!(counts.sum(), seqmap::Value::Int(13));
//! ```

pub mod errors;
pub mod key;
pub mod map;
pub mod path;
pub mod value;

pub use errors::MapError;
pub use key::Key;
pub use map::{KeyValue, SeqMap, SortOrder};
pub use path::Path;
pub use value::Value;

/// Result type used throughout the seqmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the seqmap library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured container errors from the map module
    #[error(transparent)]
    Map(errors::MapError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Map(_) => "map",
        }
    }

    /// Check if this error is a typed-conversion mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is a caller-side precondition violation.
    pub fn is_precondition(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_empty_path() || map_err.is_invalid_key(),
            _ => false,
        }
    }
}
