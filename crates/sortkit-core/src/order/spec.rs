use crate::{
    order::SortDirection,
    path::{FieldPath, FieldPathError},
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// SortSpecError
///
/// Construction-time errors. These are caller mistakes and surface when the
/// spec is built, never while rows are being compared.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SortSpecError {
    #[error("invalid sort direction '{direction}' for field '{field}'; expected 1 or -1")]
    InvalidDirection { field: String, direction: String },

    #[error(transparent)]
    Path(#[from] FieldPathError),

    #[error("invalid sort spec: {message}")]
    InvalidShape { message: String },
}

impl SortSpecError {
    fn shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }
}

///
/// SortKey
/// One `(path, direction)` entry of a sort spec.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SortKey {
    #[serde(rename = "field")]
    pub path: FieldPath,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortKey {
    #[must_use]
    pub const fn new(path: FieldPath, direction: SortDirection) -> Self {
        Self { path, direction }
    }

    pub fn asc(path: &str) -> Result<Self, SortSpecError> {
        Ok(Self::new(FieldPath::parse(path)?, SortDirection::Asc))
    }

    pub fn desc(path: &str) -> Result<Self, SortSpecError> {
        Ok(Self::new(FieldPath::parse(path)?, SortDirection::Desc))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Asc => write!(f, "{}", self.path),
            SortDirection::Desc => write!(f, "-{}", self.path),
        }
    }
}

///
/// SortSpec
///
/// Ordered list of sort keys. Entry order is key precedence; duplicates are
/// kept as written.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    #[must_use]
    pub const fn from_keys(keys: Vec<SortKey>) -> Self {
        Self { keys }
    }

    /// Append one key; later keys only break ties left by earlier ones.
    #[must_use]
    pub fn then(mut self, key: SortKey) -> Self {
        self.keys.push(key);
        self
    }

    pub fn then_asc(self, path: &str) -> Result<Self, SortSpecError> {
        Ok(self.then(SortKey::asc(path)?))
    }

    pub fn then_desc(self, path: &str) -> Result<Self, SortSpecError> {
        Ok(self.then(SortKey::desc(path)?))
    }

    /// Build from `$sort`-style `(dotted key, 1 | -1)` pairs, in order.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, SortSpecError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let keys = pairs
            .into_iter()
            .map(|(field, sign)| {
                let field = field.as_ref();
                let direction = SortDirection::from_sign(field, sign)?;

                Ok(SortKey::new(FieldPath::parse(field)?, direction))
            })
            .collect::<Result<Vec<_>, SortSpecError>>()?;

        Ok(Self { keys })
    }

    /// Parse a compact comma-separated list such as `age,-name,+address.city`.
    ///
    /// A leading `-` selects `Desc`; a leading `+` or nothing selects `Asc`.
    /// Whitespace around entries is ignored; an empty input is an empty spec.
    pub fn parse(input: &str) -> Result<Self, SortSpecError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Self::new());
        }

        let keys = input
            .split(',')
            .map(|entry| {
                let entry = entry.trim();
                let (direction, field) = if let Some(rest) = entry.strip_prefix('-') {
                    (SortDirection::Desc, rest)
                } else if let Some(rest) = entry.strip_prefix('+') {
                    (SortDirection::Asc, rest)
                } else {
                    (SortDirection::Asc, entry)
                };

                Ok(SortKey::new(FieldPath::parse(field)?, direction))
            })
            .collect::<Result<Vec<_>, SortSpecError>>()?;

        Ok(Self { keys })
    }

    /// Build from a JSON document.
    ///
    /// Accepted shapes:
    /// - an object `{"age": 1, "name": -1}` (key order is precedence)
    /// - an array of `{"field": "age", "direction": "asc" | "desc" | 1 | -1}`
    pub fn from_json(json: &JsonValue) -> Result<Self, SortSpecError> {
        match json {
            JsonValue::Object(fields) => {
                let keys = fields
                    .iter()
                    .map(|(field, raw)| {
                        let direction = direction_from_json(field, raw)?;

                        Ok(SortKey::new(FieldPath::parse(field)?, direction))
                    })
                    .collect::<Result<Vec<_>, SortSpecError>>()?;

                Ok(Self { keys })
            }
            JsonValue::Array(entries) => {
                let keys = entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| sort_key_from_json(index, entry))
                    .collect::<Result<Vec<_>, SortSpecError>>()?;

                Ok(Self { keys })
            }
            other => Err(SortSpecError::shape(format!(
                "expected an object or an array, found {}",
                json_kind(other)
            ))),
        }
    }

    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Same keys with every direction flipped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            keys: self
                .keys
                .iter()
                .map(|key| SortKey::new(key.path.clone(), key.direction.reverse()))
                .collect(),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}")?;
        }

        Ok(())
    }
}

impl FromStr for SortSpec {
    type Err = SortSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<SortKey> for SortSpec {
    fn from_iter<T: IntoIterator<Item = SortKey>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a SortKey;
    type IntoIter = std::slice::Iter<'a, SortKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

// Read one direction out of a JSON scalar.
fn direction_from_json(field: &str, raw: &JsonValue) -> Result<SortDirection, SortSpecError> {
    match raw {
        JsonValue::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(sign), _) => SortDirection::from_sign(field, sign),
            (None, Some(sign)) => SortDirection::from_float(field, sign),
            (None, None) => Err(SortSpecError::InvalidDirection {
                field: field.to_string(),
                direction: n.to_string(),
            }),
        },
        JsonValue::String(s) => SortDirection::parse_for(field, s),
        other => Err(SortSpecError::InvalidDirection {
            field: field.to_string(),
            direction: other.to_string(),
        }),
    }
}

// Read one `{"field": ..., "direction": ...}` array entry.
fn sort_key_from_json(index: usize, entry: &JsonValue) -> Result<SortKey, SortSpecError> {
    let JsonValue::Object(fields) = entry else {
        return Err(SortSpecError::shape(format!(
            "entry {index} must be an object, found {}",
            json_kind(entry)
        )));
    };

    let field = fields
        .get("field")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| SortSpecError::shape(format!("entry {index} is missing a string 'field'")))?;

    let direction = match fields.get("direction") {
        Some(raw) => direction_from_json(field, raw)?,
        None => SortDirection::Asc,
    };

    Ok(SortKey::new(FieldPath::parse(field)?, direction))
}

const fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
