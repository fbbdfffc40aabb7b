//! Functional combinators over the ordered iteration contract.
//!
//! Every operation here walks the container exactly once in its current
//! order unless documented otherwise (`foldr`, `reverse`, and the sorts),
//! and returns a fresh container or a scalar, leaving the receiver
//! untouched. Callbacks take `(value, key)` and a typed result; the
//! dynamic-dispatch callables of loosely-typed container libraries become
//! plain closure parameters.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::errors::MapError;
use crate::key::Key;
use crate::path::Path;
use crate::value::Value;

use super::SeqMap;

/// An ephemeral key/value pair.
///
/// Returned by [`map_entries`](SeqMap::map_entries) callbacks to re-key the
/// produced entry, and by [`first_entry`](SeqMap::first_entry) to hand back
/// both halves of a match.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    pub key: Key,
    pub value: Value,
}

impl KeyValue {
    pub fn new(key: impl Into<Key>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Per-field direction for [`sort_by_fields`](SeqMap::sort_by_fields)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SeqMap {
    /// Invokes the callback per entry in order; `ControlFlow::Break` stops
    /// the iteration early.
    ///
    /// ```
    /// # use seqmap::SeqMap;
    /// # use std::ops::ControlFlow;
    /// let map = SeqMap::from_values([2, 4, 8]);
    /// let mut sum = 0;
    /// map.each(|value, _| {
    ///     let n = value.as_int_or(0);
    ///     if n >= 8 {
    ///         return ControlFlow::Break(());
    ///     }
    ///     sum += n;
    ///     ControlFlow::Continue(())
    /// });
    /// assert_eq!(sum, 6);
    /// ```
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&Value, &Key) -> ControlFlow<()>,
    {
        for (key, value) in self.iter() {
            if f(value, key).is_break() {
                break;
            }
        }
        self
    }

    /// New container with each value replaced by the callback result; keys
    /// are retained. Use [`map_entries`](SeqMap::map_entries) to re-key.
    pub fn map<F>(&self, mut f: F) -> SeqMap
    where
        F: FnMut(&Value, &Key) -> Value,
    {
        let mut out = SeqMap::with_capacity(self.len());
        for (key, value) in self.iter() {
            out.insert(key.clone(), f(value, key));
        }
        out
    }

    /// New container built from the key/value pairs the callback produces.
    /// Later pairs overwrite earlier ones on key collision.
    ///
    /// ```
    /// # use seqmap::{KeyValue, SeqMap};
    /// let map = SeqMap::from_values(["a", "b"]);
    /// let flipped = map.map_entries(|value, key| {
    ///     KeyValue::new(value.as_text_or_empty(), key.clone())
    /// });
    /// assert_eq!(flipped.get_as::<i64>("b"), Some(1));
    /// ```
    pub fn map_entries<F>(&self, mut f: F) -> SeqMap
    where
        F: FnMut(&Value, &Key) -> KeyValue,
    {
        let mut out = SeqMap::with_capacity(self.len());
        for (key, value) in self.iter() {
            let entry = f(value, key);
            out.insert(entry.key, entry.value);
        }
        out
    }

    /// New container keeping the entries the predicate accepts; keys and
    /// order are preserved.
    pub fn filter<F>(&self, mut f: F) -> SeqMap
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        let mut out = SeqMap::new();
        for (key, value) in self.iter() {
            if f(value, key) {
                out.insert(key.clone(), value.clone());
            }
        }
        out
    }

    /// Left-to-right accumulation over the entries
    pub fn foldl<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &Value, &Key) -> A,
    {
        let mut acc = initial;
        for (key, value) in self.iter() {
            acc = f(acc, value, key);
        }
        acc
    }

    /// Right-to-left accumulation over the entries
    pub fn foldr<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &Value, &Key) -> A,
    {
        let mut acc = initial;
        for (key, value) in self.iter().rev() {
            acc = f(acc, value, key);
        }
        acc
    }

    /// List-view container of the keys
    pub fn to_keys(&self) -> SeqMap {
        SeqMap::from_values(self.keys().cloned())
    }

    /// List-view container of the values
    pub fn to_values(&self) -> SeqMap {
        SeqMap::from_values(self.values().cloned())
    }

    /// New container re-keyed by the callback result; on collision the last
    /// entry wins (no error), keeping the position of the first occurrence.
    pub fn key_by<F>(&self, mut f: F) -> SeqMap
    where
        F: FnMut(&Value, &Key) -> Key,
    {
        let mut out = SeqMap::with_capacity(self.len());
        for (key, value) in self.iter() {
            out.insert(f(value, key), value.clone());
        }
        out
    }

    /// New container re-keyed by the named field of each entry's value.
    /// Entries whose field is missing or not usable as a key are skipped;
    /// collisions resolve like [`key_by`](SeqMap::key_by).
    ///
    /// ```
    /// # use seqmap::{SeqMap, path};
    /// let mut users = SeqMap::new();
    /// users.set(path!(0, "id"), "alice").set(path!(0, "age"), 30);
    /// users.set(path!(1, "id"), "bob").set(path!(1, "age"), 25);
    ///
    /// let by_id = users.key_by_field("id");
    /// assert_eq!(by_id.get_as::<i64>(path!("bob", "age")), Some(25));
    /// ```
    pub fn key_by_field(&self, field: impl Into<Key>) -> SeqMap {
        let field = field.into();
        let mut out = SeqMap::with_capacity(self.len());
        for (_, value) in self.iter() {
            let Some(new_key) = value
                .as_map()
                .and_then(|m| m.entries.get(&field))
                .and_then(|v| Key::try_from(v).ok())
            else {
                continue;
            };
            out.insert(new_key, value.clone());
        }
        out
    }

    /// New container with the same keys, each value replaced by the given
    /// field (or nested path) of the original value; `Null` where the
    /// lookup does not resolve.
    pub fn column(&self, path: impl Into<Path>) -> SeqMap {
        let path = path.into();
        let mut out = SeqMap::with_capacity(self.len());
        for (key, value) in self.iter() {
            let picked = value
                .as_map()
                .and_then(|m| m.get_segments(path.segments()))
                .cloned()
                .unwrap_or(Value::Null);
            out.insert(key.clone(), picked);
        }
        out
    }

    /// New container restricted to the given keys; unknown keys in the set
    /// are ignored, order is preserved.
    pub fn only<I>(&self, keys: I) -> SeqMap
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let wanted: HashSet<Key> = keys.into_iter().map(Into::into).collect();
        self.filter(|_, key| wanted.contains(key))
    }

    /// New container without the given keys; unknown keys in the set are
    /// ignored, order is preserved.
    pub fn except<I>(&self, keys: I) -> SeqMap
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let excluded: HashSet<Key> = keys.into_iter().map(Into::into).collect();
        self.filter(|_, key| !excluded.contains(key))
    }

    /// Splits the values into consecutive list-view chunks of at most
    /// `size` entries; the trailing chunk may be smaller. An empty source
    /// yields a single empty chunk.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero.
    ///
    /// ```
    /// # use seqmap::SeqMap;
    /// let chunks = SeqMap::from_values([1, 2, 3, 4, 5]).chunk(2);
    /// assert_eq!(chunks.len(), 3);
    /// assert_eq!(chunks.get_as::<i64>("2.0"), Some(5));
    /// ```
    pub fn chunk(&self, size: usize) -> SeqMap {
        assert!(size >= 1, "chunk size must be at least 1");
        let mut out = SeqMap::new();
        let mut current = SeqMap::new();
        for (_, value) in self.iter() {
            if current.len() >= size {
                out.push(std::mem::take(&mut current));
            }
            current.push(value.clone());
        }
        out.push(current);
        out
    }

    /// Expands container values one level, appending their elements in
    /// order; scalars are appended as-is. The result is re-indexed `0..`,
    /// original keys are discarded.
    pub fn flatten(&self) -> SeqMap {
        let mut out = SeqMap::new();
        for (_, value) in self.iter() {
            match value {
                Value::Map(nested) => {
                    for (_, inner) in nested.iter() {
                        out.push(inner.clone());
                    }
                }
                scalar => {
                    out.push(scalar.clone());
                }
            }
        }
        out
    }

    /// Pairs this container's values, used as keys, with `values`' entries
    /// in order, stopping at the shorter of the two.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] when one of the receiver's values is
    /// not usable as a key (anything but text or a non-negative integer).
    pub fn combine(&self, values: &SeqMap) -> Result<SeqMap, MapError> {
        let mut out = SeqMap::new();
        for (key_source, value) in self.values().zip(values.values()) {
            out.insert(Key::try_from(key_source)?, value.clone());
        }
        Ok(out)
    }

    /// Smallest value by natural ordering; `None` on an empty container.
    /// The first minimal value wins on ties.
    pub fn min(&self) -> Option<&Value> {
        let mut values = self.values();
        let mut best = values.next()?;
        for value in values {
            if value.cmp_natural(best) == Ordering::Less {
                best = value;
            }
        }
        Some(best)
    }

    /// Largest value by natural ordering; `None` on an empty container.
    /// The first maximal value wins on ties.
    pub fn max(&self) -> Option<&Value> {
        let mut values = self.values();
        let mut best = values.next()?;
        for value in values {
            if value.cmp_natural(best) == Ordering::Greater {
                best = value;
            }
        }
        Some(best)
    }

    /// Sum of the numeric values; `0` on an empty container. Integer
    /// accumulation promotes to float on overflow or when a float value
    /// appears; non-numeric values do not participate.
    pub fn sum(&self) -> Value {
        self.reduce_numeric(0, i64::checked_add, |a, b| a + b)
    }

    /// Product of the numeric values; `1` on an empty container. Promotion
    /// rules match [`sum`](SeqMap::sum).
    pub fn product(&self) -> Value {
        self.reduce_numeric(1, i64::checked_mul, |a, b| a * b)
    }

    fn reduce_numeric(
        &self,
        identity: i64,
        int_op: impl Fn(i64, i64) -> Option<i64>,
        float_op: impl Fn(f64, f64) -> f64,
    ) -> Value {
        let mut acc_int = identity;
        let mut acc_float = 0.0;
        let mut promoted = false;
        for value in self.values() {
            let as_float = match value {
                Value::Int(n) => {
                    if !promoted && let Some(next) = int_op(acc_int, *n) {
                        acc_int = next;
                        continue;
                    }
                    *n as f64
                }
                Value::Float(x) => *x,
                _ => continue,
            };
            if !promoted {
                promoted = true;
                acc_float = acc_int as f64;
            }
            acc_float = float_op(acc_float, as_float);
        }
        if promoted {
            Value::Float(acc_float)
        } else {
            Value::Int(acc_int)
        }
    }

    /// New container with the entries in reverse iteration order; each key
    /// stays paired with its value.
    pub fn reverse(&self) -> SeqMap {
        self.iter()
            .rev()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// New container of the values sorted by natural ordering and
    /// re-indexed `0..`.
    pub fn sort(&self) -> SeqMap {
        self.sort_by(Value::cmp_natural)
    }

    /// New container of the values stable-sorted by the comparator and
    /// re-indexed `0..`.
    pub fn sort_by<F>(&self, mut cmp: F) -> SeqMap
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let mut values = self.to_vec();
        values.sort_by(|a, b| cmp(a, b));
        SeqMap::from_values(values)
    }

    /// Lexicographic multi-field sort: the first field whose values differ
    /// between two entries decides their order, ascending or descending per
    /// field; ties cascade to the next field. A missing or falsy field
    /// value compares as `0`.
    ///
    /// ```
    /// # use seqmap::{SeqMap, SortOrder, path};
    /// let mut rows = SeqMap::new();
    /// rows.set(path!(0, "a"), 2).set(path!(0, "b"), 3);
    /// rows.set(path!(1, "a"), 1).set(path!(1, "b"), 2);
    /// rows.set(path!(2, "a"), 1).set(path!(2, "b"), 3);
    ///
    /// let sorted = rows.sort_by_fields([("a", SortOrder::Asc), ("b", SortOrder::Desc)]);
    /// assert_eq!(sorted.get_as::<i64>(path!(0, "b")), Some(3));
    /// assert_eq!(sorted.get_as::<i64>(path!(2, "a")), Some(2));
    /// ```
    pub fn sort_by_fields<I, K>(&self, fields: I) -> SeqMap
    where
        I: IntoIterator<Item = (K, SortOrder)>,
        K: Into<Key>,
    {
        let fields: Vec<(Key, SortOrder)> = fields
            .into_iter()
            .map(|(key, order)| (key.into(), order))
            .collect();
        let missing = Value::Int(0);

        self.sort_by(|left, right| {
            for (field, order) in &fields {
                let left_value = sort_field(left, field).unwrap_or(&missing);
                let right_value = sort_field(right, field).unwrap_or(&missing);
                let ordering = left_value.cmp_natural(right_value);
                if ordering != Ordering::Equal {
                    return match order {
                        SortOrder::Asc => ordering,
                        SortOrder::Desc => ordering.reverse(),
                    };
                }
            }
            Ordering::Equal
        })
    }

    /// True if the predicate accepts any entry; short-circuits.
    pub fn any<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.iter().any(|(key, value)| f(value, key))
    }

    /// True if the predicate accepts every entry; short-circuits.
    pub fn all<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.iter().all(|(key, value)| f(value, key))
    }

    /// True if any raw value is truthy
    pub fn any_truthy(&self) -> bool {
        self.any(|value, _| value.is_truthy())
    }

    /// True if every raw value is truthy
    pub fn all_truthy(&self) -> bool {
        self.all(|value, _| value.is_truthy())
    }

    /// First value the predicate accepts, or `None` when nothing matches
    pub fn first<F>(&self, mut f: F) -> Option<&Value>
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.iter()
            .find(|&(key, value)| f(value, key))
            .map(|(_, value)| value)
    }

    /// First matching entry as an owned [`KeyValue`], or `None` when
    /// nothing matches
    pub fn first_entry<F>(&self, mut f: F) -> Option<KeyValue>
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.iter()
            .find(|&(key, value)| f(value, key))
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
    }

    /// New container of the first `count` entries, keys preserved
    pub fn take(&self, count: usize) -> SeqMap {
        self.iter()
            .take(count)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// New container of the leading entries the predicate accepts, keys
    /// preserved
    pub fn take_while<F>(&self, mut f: F) -> SeqMap
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.iter()
            .take_while(|&(key, value)| f(value, key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// New container without the first `count` entries, keys preserved
    pub fn skip(&self, count: usize) -> SeqMap {
        self.iter()
            .skip(count)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// New container without the leading entries the predicate accepts,
    /// keys preserved
    pub fn skip_while<F>(&self, mut f: F) -> SeqMap
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.iter()
            .skip_while(|&(key, value)| f(value, key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// New container holding this container's entries followed by `other`'s.
    /// Text keys overwrite left-to-right (keeping the position of the first
    /// occurrence); integer-keyed entries are appended and re-indexed
    /// sequentially from zero.
    pub fn merge(&self, other: &SeqMap) -> SeqMap {
        let mut out = SeqMap::new();
        for (key, value) in self.iter().chain(other.iter()) {
            if key.is_int() {
                out.push(value.clone());
            } else {
                out.insert(key.clone(), value.clone());
            }
        }
        out
    }

    /// True if any entry's value equals the given one
    pub fn contains_value(&self, value: impl Into<Value>) -> bool {
        let value = value.into();
        self.values().any(|v| *v == value)
    }
}

/// Field lookup for the multi-field sort; falsy values count as missing.
fn sort_field<'a>(entry: &'a Value, field: &Key) -> Option<&'a Value> {
    entry
        .as_map()
        .and_then(|m| m.entries.get(field))
        .filter(|v| v.is_truthy())
}
