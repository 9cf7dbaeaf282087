//! JSON boundary for `Value`.
//!
//! JSON has no date type; dates leave as RFC 3339 text and come back as
//! `Value::Text`. Callers that need `Value::Date` build it explicitly.

use crate::{types::Number, value::Value};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};
use thiserror::Error as ThisError;

///
/// JsonValueError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum JsonValueError {
    #[error("number {value} has no JSON representation")]
    NonFiniteNumber { value: String },
}

impl Value {
    /// Convert a JSON document into a `Value`.
    ///
    /// serde_json never yields NaN, so every JSON number is representable.
    #[must_use]
    pub fn from_json(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => n
                .as_f64()
                .and_then(Number::try_new)
                .map_or(Self::Null, Self::Number),
            JsonValue::String(s) => Self::Text(s),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Self::from_json).collect()),
            JsonValue::Object(fields) => Self::Record(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert a borrowed JSON document into a `Value`, copying only what the
    /// result needs.
    #[must_use]
    pub fn from_json_ref(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(*b),
            JsonValue::Number(n) => n
                .as_f64()
                .and_then(Number::try_new)
                .map_or(Self::Null, Self::Number),
            JsonValue::String(s) => Self::Text(s.clone()),
            JsonValue::Array(items) => Self::List(items.iter().map(Self::from_json_ref).collect()),
            JsonValue::Object(fields) => Self::Record(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from_json_ref(v)))
                    .collect(),
            ),
        }
    }

    /// Convert this value into a JSON document.
    pub fn to_json(&self) -> Result<JsonValue, JsonValueError> {
        let json = match self {
            Self::Null => JsonValue::Null,
            Self::Number(n) => JsonNumber::from_f64(n.get())
                .map(JsonValue::Number)
                .ok_or_else(|| JsonValueError::NonFiniteNumber {
                    value: n.to_string(),
                })?,
            Self::Text(s) => JsonValue::String(s.clone()),
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Date(ts) => JsonValue::String(ts.to_string()),
            Self::List(items) => JsonValue::Array(
                items
                    .iter()
                    .map(Self::to_json)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Self::Record(fields) => {
                let mut map = JsonMap::with_capacity(fields.len());
                for (k, v) in fields {
                    map.insert(k.clone(), v.to_json()?);
                }
                JsonValue::Object(map)
            }
        };

        Ok(json)
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        Self::from_json(json)
    }
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        Self::from_json_ref(json)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Number(n) => serializer.serialize_f64(n.get()),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Date(ts) => ts.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Self::from_json)
    }
}
