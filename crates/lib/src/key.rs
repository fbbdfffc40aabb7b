//! Entry keys for ordered containers.
//!
//! A [`Key`] is either text or a non-negative integer. Containers built from
//! plain sequences carry contiguous integer keys starting at zero (the "list
//! view"); containers built from mappings carry whatever keys the mapping had.
//! Both kinds live in the same key space and behave identically.

use std::fmt;

use crate::errors::MapError;
use crate::value::Value;

/// A key addressing one entry in a [`SeqMap`](crate::SeqMap).
///
/// Keys are ordered only for the purpose of giving nested containers a total
/// natural order; integer keys sort before text keys.
///
/// # Examples
///
/// ```
/// use seqmap::Key;
///
/// let name: Key = "name".into();
/// let index: Key = 3u64.into();
/// assert_ne!(name, index);
/// assert_eq!(index.as_int(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Integer key, as produced by list-style appends
    Int(u64),
    /// Text key
    Str(String),
}

impl Key {
    /// Returns the text form of the key, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    /// Returns the integer form of the key, if it is one
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    /// Returns true for integer keys
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Coerces a canonical non-negative integer string into an integer key.
    ///
    /// Mirrors the key coercion of loosely-typed host mappings: `"3"` becomes
    /// `Key::Int(3)`, while `"03"`, `"-1"`, and anything non-numeric stay
    /// text keys. Used by path parsing and by the deserialization boundary.
    pub(crate) fn coerce_numeric(s: &str) -> Key {
        let canonical = s == "0" || (!s.starts_with('0') && s.bytes().all(|b| b.is_ascii_digit()));
        if canonical && !s.is_empty()
            && let Ok(n) = s.parse::<u64>()
        {
            return Key::Int(n);
        }
        Key::Str(s.to_string())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Key::Int(value)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as u64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as u64)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        debug_assert!(value >= 0, "container keys are non-negative");
        Key::Int(value.max(0) as u64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

/// Keys convert into values so `to_keys()` can expose them as entries.
impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(n) => Value::Int(n as i64),
            Key::Str(s) => Value::Text(s),
        }
    }
}

/// Scalar values convert back into keys; used by `key_by_field` and
/// `combine`, where a container's values become the keys of a new one.
impl TryFrom<&Value> for Key {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) if *n >= 0 => Ok(Key::Int(*n as u64)),
            Value::Text(s) => Ok(Key::Str(s.clone())),
            other => Err(MapError::InvalidKey {
                reason: format!("{} cannot address an entry", other.type_name()),
            }),
        }
    }
}
