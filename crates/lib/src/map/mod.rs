//! Ordered container API.
//!
//! This module provides the main public interface of the crate. The
//! [`SeqMap`] type is a mutable, insertion-ordered mapping from [`Key`]s to
//! [`Value`]s, addressable either by single keys or by multi-segment
//! [`Path`]s descending through nested containers.
//!
//! # Design
//!
//! - **One key space**: containers built from sequences carry contiguous
//!   integer keys ("list view"), containers built from mappings carry
//!   arbitrary keys ("map view"). List-ness is a usage pattern, not a type;
//!   every operation treats both identically.
//! - **Reads are soft**: a missing key, a missing intermediate segment, or a
//!   scalar in the middle of a path all resolve to `None`/`false`, never an
//!   error.
//! - **Writes vivify**: [`SeqMap::set`] creates missing intermediate
//!   containers (and replaces scalar intermediates) so a deep write always
//!   succeeds.
//!
//! # Usage
//!
//! ```
//! use seqmap::{SeqMap, path};
//!
//! let mut map = SeqMap::new();
//! map.set("name", "Alice");
//! map.set(path!("user", "profile", "bio"), "Software developer");
//!
//! assert_eq!(map.get_as::<&str>("user.profile.bio"), Some("Software developer"));
//! assert!(map.has("user.profile"));
//! assert!(!map.has("user.settings"));
//! ```

use std::fmt;

use indexmap::IndexMap;
use tracing::trace;

use crate::errors::MapError;
use crate::key::Key;
use crate::path::Path;
use crate::value::Value;

pub mod ops;
mod serde;

pub use ops::{KeyValue, SortOrder};

/// A mutable, insertion-ordered mapping from keys to values.
///
/// Iteration order is insertion order and every read operation preserves it;
/// only the explicit reordering operations ([`sort`](SeqMap::sort),
/// [`reverse`](SeqMap::reverse) and friends) produce a different order, and
/// they do so in a fresh container.
///
/// Equality is order-sensitive: two containers are equal when they hold the
/// same entries in the same order.
///
/// # Examples
///
/// ```
/// # use seqmap::SeqMap;
/// let mut map = SeqMap::new();
/// map.set("name", "Alice");
/// map.set("age", 30);
///
/// assert_eq!(map.get_as::<&str>("name"), Some("Alice"));
/// assert_eq!(map.get_as::<i64>("age"), Some(30));
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeqMap {
    /// Entries in insertion order
    entries: IndexMap<Key, Value>,
    /// Next integer key handed out by a list-style append. Grows past the
    /// largest integer key ever inserted and never shrinks, so appends after
    /// a removal do not reuse keys.
    next_index: u64,
}

impl SeqMap {
    /// Creates a new empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty container with preallocated space for `capacity`
    /// entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Builds a list-view container from a sequence of values, keyed
    /// `0..n-1` in order.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut map = SeqMap::new();
        for value in values {
            map.push(value);
        }
        map
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the container has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the keys are exactly `0..n-1` in iteration order
    /// (the "list view" usage pattern)
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| key.as_int() == Some(i as u64))
    }

    /// Inserts an entry under a single key, returning the previous value if
    /// the key was present. An overwritten entry keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if let Key::Int(n) = key {
            self.next_index = self.next_index.max(n.saturating_add(1));
        }
        self.entries.insert(key, value.into())
    }

    /// Appends a value under the next integer key, list-style.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        let key = Key::Int(self.next_index);
        self.next_index += 1;
        self.entries.insert(key, value.into());
        self
    }

    /// Returns an iterator over entries in insertion order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over entries in insertion order
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = (&Key, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over keys in insertion order
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns an iterator over values in insertion order
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns a mutable iterator over values in insertion order
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Clones the values into a `Vec`, dropping the keys
    pub fn to_vec(&self) -> Vec<Value> {
        self.entries.values().cloned().collect()
    }
}

// Path accessor: resolve, create-on-write, test, delete.
impl SeqMap {
    /// Gets a value by key or path (immutable reference).
    ///
    /// Walks the path segment by segment; a missing segment or a
    /// non-container intermediate aborts the walk and yields `None`. Never
    /// panics, whatever the path shape.
    ///
    /// ```
    /// # use seqmap::{SeqMap, Value, path};
    /// let mut map = SeqMap::new();
    /// map.set(path!("name", "name2"), "name3");
    ///
    /// assert_eq!(map.get(path!("name", "name2")), Some(&Value::Text("name3".into())));
    /// // One segment past the structure's depth resolves to nothing
    /// assert_eq!(map.get(path!("name", "name2", "name3")), None);
    /// ```
    pub fn get(&self, path: impl Into<Path>) -> Option<&Value> {
        let path = path.into();
        self.get_segments(path.segments())
    }

    /// Segment-slice walk shared by `get` and the combinators that resolve
    /// paths per entry.
    pub(crate) fn get_segments(&self, segments: &[Key]) -> Option<&Value> {
        let (first, rest) = segments.split_first()?;
        let mut current = self.entries.get(first)?;
        for segment in rest {
            current = current.as_map()?.entries.get(segment)?;
        }
        Some(current)
    }

    /// Gets a value by key or path, or the supplied default when the path
    /// does not resolve.
    pub fn get_or<'a>(&'a self, path: impl Into<Path>, default: &'a Value) -> &'a Value {
        self.get(path).unwrap_or(default)
    }

    /// Resolves a path and feeds the value (or the default when the path
    /// does not resolve) through a transform.
    ///
    /// ```
    /// # use seqmap::{SeqMap, Value};
    /// let map = SeqMap::from_values([2.1, 1.1, 3.1]);
    /// let as_int = map.get_with(0usize, &Value::Null, |v| v.as_f64().map(|f| f as i64));
    /// assert_eq!(as_int, Some(2));
    /// ```
    pub fn get_with<R>(
        &self,
        path: impl Into<Path>,
        default: &Value,
        transform: impl FnOnce(&Value) -> R,
    ) -> R {
        transform(self.get(path).unwrap_or(default))
    }

    /// Gets a value by key or path with automatic type conversion.
    ///
    /// Returns `Some(T)` if the path resolves and the value converts to `T`,
    /// `None` otherwise.
    ///
    /// ```
    /// # use seqmap::SeqMap;
    /// let mut map = SeqMap::new();
    /// map.set("age", 30);
    ///
    /// assert_eq!(map.get_as::<i64>("age"), Some(30));
    /// assert_eq!(map.get_as::<String>("age"), None);
    /// assert_eq!(map.get_as::<i64>("missing"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl Into<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = MapError>,
    {
        let value = self.get(path)?;
        T::try_from(value).ok()
    }

    /// Gets a mutable reference to a value by key or path
    pub fn get_mut(&mut self, path: impl Into<Path>) -> Option<&mut Value> {
        let path = path.into();
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.entries.get_mut(first)?;
        for segment in rest {
            current = current.as_map_mut()?.entries.get_mut(segment)?;
        }
        Some(current)
    }

    /// Returns true if the path resolves to an entry: every intermediate
    /// segment must reach a nested container and the final segment must be
    /// present in it.
    pub fn has(&self, path: impl Into<Path>) -> bool {
        self.get(path).is_some()
    }

    /// Sets a value at a key or path, creating missing intermediate
    /// containers along the way, and returns `self` for chaining.
    ///
    /// A scalar sitting where the path needs to descend is replaced by an
    /// empty container, so a deep write always succeeds.
    ///
    /// # Panics
    ///
    /// Panics when given an empty path; writing needs at least one segment.
    /// Use [`try_set`](SeqMap::try_set) to handle that case as an error.
    pub fn set(&mut self, path: impl Into<Path>, value: impl Into<Value>) -> &mut Self {
        self.try_set(path, value)
            .expect("set requires a non-empty path");
        self
    }

    /// Sets a value at a key or path, returning the previous value at the
    /// final segment if one was present.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::EmptyPath`] when the path has no segments.
    pub fn try_set(
        &mut self,
        path: impl Into<Path>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, MapError> {
        let path = path.into();
        let Some((last, parents)) = path.segments().split_last() else {
            return Err(MapError::EmptyPath);
        };

        let mut current = self;
        for segment in parents {
            let slot = current.entries.entry(segment.clone()).or_insert_with(|| {
                trace!(segment = %segment, "creating intermediate container");
                Value::Map(SeqMap::new())
            });
            if !slot.is_map() {
                trace!(segment = %segment, "replacing scalar value during path write");
                *slot = Value::Map(SeqMap::new());
            }
            current = match slot {
                Value::Map(map) => map,
                _ => unreachable!(),
            };
        }

        Ok(current.insert(last.clone(), value))
    }

    /// Removes the entry at a key or path, returning its value if present.
    ///
    /// A missing or non-container intermediate makes this a no-op: removal
    /// never creates structure. Removing an absent entry is also a no-op,
    /// which makes `remove` idempotent.
    ///
    /// ```
    /// # use seqmap::{SeqMap, path};
    /// let mut map = SeqMap::new();
    /// map.set(path!("a0", "a1"), "a2");
    ///
    /// // Too-deep paths and missing prefixes change nothing
    /// assert!(map.remove(path!("a0", "a1", "a2")).is_none());
    /// assert!(map.remove(path!("b0", "a1")).is_none());
    ///
    /// assert!(map.remove(path!("a0", "a1")).is_some());
    /// assert!(map.get("a0").unwrap().as_map().unwrap().is_empty());
    /// ```
    pub fn remove(&mut self, path: impl Into<Path>) -> Option<Value> {
        let path = path.into();
        let (last, parents) = path.segments().split_last()?;

        let mut current = self;
        for segment in parents {
            current = current.entries.get_mut(segment)?.as_map_mut()?;
        }
        // shift_remove keeps the insertion order of the remaining entries
        current.entries.shift_remove(last)
    }
}

// Builder pattern methods
impl SeqMap {
    /// Builder method to set a value and return self
    pub fn with(mut self, path: impl Into<Path>, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }
}

impl PartialEq for SeqMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl fmt::Display for SeqMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for SeqMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = SeqMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<T: Into<Value>> From<Vec<T>> for SeqMap {
    fn from(values: Vec<T>) -> Self {
        SeqMap::from_values(values)
    }
}
