//! Paths for hierarchical container access.
//!
//! A [`Path`] is an ordered sequence of [`Key`] segments describing a walk
//! from a root container through nested containers. A single key is a
//! one-segment path, so every container operation accepts plain keys, typed
//! paths, and dot-notation strings through the same `impl Into<Path>`
//! parameter.
//!
//! # Usage
//!
//! ```
//! use seqmap::{Path, path};
//!
//! // Parse from a string (automatically normalized)
//! let parsed: Path = "user.profile.name".into();
//!
//! // Build incrementally (infallible)
//! let built = Path::new().push("user").push("profile").push("name");
//! assert_eq!(parsed, built);
//!
//! // Or with the macro; integer segments stay integers
//! let indexed = path!("items", 0, "id");
//! assert_eq!(indexed.to_string(), "items.0.id");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::key::Key;

/// An ordered sequence of key segments for nested container access.
///
/// Dot-notation strings are normalized on parse: empty segments (leading,
/// trailing, or consecutive dots) are dropped, and canonical non-negative
/// integer segments become integer keys, matching the container's key
/// coercion at the construction boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<Key>,
}

impl Path {
    /// Creates a new empty path.
    ///
    /// An empty path resolves to nothing on reads and is a precondition
    /// violation for writes.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Adds a segment to the end of this path.
    pub fn push(mut self, segment: impl Into<Key>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Joins this path with another path (or anything convertible to one).
    ///
    /// ```
    /// # use seqmap::Path;
    /// let path = Path::new().join("user").join("profile.name");
    /// assert_eq!(path.to_string(), "user.profile.name");
    /// ```
    pub fn join(mut self, other: impl Into<Path>) -> Self {
        self.segments.extend(other.into().segments);
        self
    }

    /// Returns the path segments as a slice.
    pub fn segments(&self) -> &[Key] {
        &self.segments
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the parent path, or `None` if this path has at most one
    /// segment.
    pub fn parent(&self) -> Option<Path> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Path {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Returns the last segment of the path, or `None` if empty.
    pub fn last(&self) -> Option<&Key> {
        self.segments.last()
    }

    /// Creates a path by normalizing a dot-notation string.
    fn parse(input: &str) -> Self {
        Path {
            segments: input
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(Key::coerce_numeric)
                .collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "(empty path)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Path::parse(value)
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Path::parse(&value)
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        Path {
            segments: vec![key],
        }
    }
}

impl From<&Key> for Path {
    fn from(key: &Key) -> Self {
        Path {
            segments: vec![key.clone()],
        }
    }
}

impl From<u64> for Path {
    fn from(index: u64) -> Self {
        Path::from(Key::Int(index))
    }
}

impl From<usize> for Path {
    fn from(index: usize) -> Self {
        Path::from(Key::Int(index as u64))
    }
}

impl From<i32> for Path {
    fn from(index: i32) -> Self {
        Path::from(Key::from(index))
    }
}

impl From<Vec<Key>> for Path {
    fn from(segments: Vec<Key>) -> Self {
        Path { segments }
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

/// Constructs a [`Path`] from a sequence of segments.
///
/// String arguments are parsed as dot notation; integer arguments become
/// integer segments directly.
///
/// ```
/// # use seqmap::path;
/// let nested = path!("user", "profile", "name");
/// let same = path!("user.profile.name");
/// assert_eq!(nested, same);
///
/// let empty = path!();
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::new()
    };
    ($($segment:expr),+ $(,)?) => {{
        let mut path = $crate::Path::new();
        $(
            path = path.join($segment);
        )+
        path
    }};
}
