use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Ordered string-keyed mapping used throughout payload assembly.
///
/// Insertion order is what the serializer emits, so the JSON shape of a
/// generated payload is reproducible byte-for-byte.
pub type PayloadMap = IndexMap<String, PayloadValue>;

/// A tagged payload value: the closed set of shapes the gateway accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    String(String),
    Integer(i64),
    Bool(bool),
    Object(PayloadMap),
}

impl Serialize for PayloadValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PayloadValue::String(value) => serializer.serialize_str(value),
            PayloadValue::Integer(value) => serializer.serialize_i64(*value),
            PayloadValue::Bool(value) => serializer.serialize_bool(*value),
            PayloadValue::Object(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
        }
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        PayloadValue::String(value.to_string())
    }
}

impl From<String> for PayloadValue {
    fn from(value: String) -> Self {
        PayloadValue::String(value)
    }
}

impl From<i64> for PayloadValue {
    fn from(value: i64) -> Self {
        PayloadValue::Integer(value)
    }
}

impl From<i32> for PayloadValue {
    fn from(value: i32) -> Self {
        PayloadValue::Integer(value as i64)
    }
}

impl From<bool> for PayloadValue {
    fn from(value: bool) -> Self {
        PayloadValue::Bool(value)
    }
}

impl From<PayloadMap> for PayloadValue {
    fn from(value: PayloadMap) -> Self {
        PayloadValue::Object(value)
    }
}
