//! Serialization boundary for ordered containers.
//!
//! The container hands exactly one interface to the JSON collaborator: an
//! order-preserving conversion to a plain mapping or sequence. List-view
//! containers (contiguous `0..n-1` integer keys) serialize as sequences,
//! everything else as maps with stringified keys, mirroring how the loosely
//! typed host encoders treat the two usage patterns. Deserialization applies
//! the same canonical numeric-key coercion as path parsing, so round trips
//! preserve key types.

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::key::Key;
use crate::value::Value;

use super::SeqMap;

impl SeqMap {
    /// Encodes the container as JSON text; a thin pass-through to
    /// `serde_json` over the container's `Serialize` impl.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes JSON text into a container; the top level must be an array
    /// or an object.
    pub fn from_json(input: &str) -> crate::Result<SeqMap> {
        Ok(serde_json::from_str(input)?)
    }
}

impl Serialize for SeqMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for (_, value) in self.iter() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Map(m) => m.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SeqMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeqMapVisitor;

        impl<'de> Visitor<'de> for SeqMapVisitor {
            type Value = SeqMap;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a sequence or a map")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut map = SeqMap::new();
                while let Some(value) = seq.next_element::<Value>()? {
                    map.push(value);
                }
                Ok(map)
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = SeqMap::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    map.insert(Key::coerce_numeric(&key), value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_any(SeqMapVisitor)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a scalar, a sequence, or a map")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Value::Int(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Value::from(v))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Value::Text(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
                Ok(Value::Text(v))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                Value::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut map = SeqMap::new();
                while let Some(value) = seq.next_element::<Value>()? {
                    map.push(value);
                }
                Ok(Value::Map(map))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = SeqMap::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    map.insert(Key::coerce_numeric(&key), value);
                }
                Ok(Value::Map(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// Conversions to and from the JSON collaborator's tree
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Map(SeqMap::from_values(items.into_iter().map(Value::from)))
            }
            serde_json::Value::Object(fields) => {
                let mut map = SeqMap::new();
                for (key, value) in fields {
                    map.insert(Key::coerce_numeric(&key), Value::from(value));
                }
                Value::Map(map)
            }
        }
    }
}

impl From<serde_json::Value> for SeqMap {
    fn from(value: serde_json::Value) -> Self {
        match Value::from(value) {
            Value::Map(map) => map,
            scalar => SeqMap::from_values([scalar]),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => (*b).into(),
            Value::Int(n) => (*n).into(),
            // Non-finite floats have no JSON form and encode as null
            Value::Float(x) => serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => s.clone().into(),
            Value::Map(m) => m.into(),
        }
    }
}

impl From<&SeqMap> for serde_json::Value {
    fn from(map: &SeqMap) -> Self {
        if map.is_list() {
            serde_json::Value::Array(map.values().map(serde_json::Value::from).collect())
        } else {
            serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.to_string(), serde_json::Value::from(value)))
                    .collect(),
            )
        }
    }
}
