//! Dotted field paths and the record resolver used by sort keys.


use crate::value::Value;
use derive_more::Deref;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

/// Sentinel returned for any path that does not resolve.
static NULL: Value = Value::Null;

///
/// FieldPathError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FieldPathError {
    #[error("field path must not be empty")]
    Empty,

    #[error("field path '{path}' contains an empty segment")]
    EmptySegment { path: String },
}

///
/// FieldPath
///
/// Non-empty sequence of non-empty field names, parsed from a dotted key
/// such as `address.city`.
///

#[derive(Clone, Debug, Deref, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn parse(path: &str) -> Result<Self, FieldPathError> {
        if path.is_empty() {
            return Err(FieldPathError::Empty);
        }

        let segments: Vec<String> = path.split('.').map(ToString::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(FieldPathError::EmptySegment {
                path: path.to_string(),
            });
        }

        Ok(Self(segments))
    }

    /// Build from pre-split segments.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, FieldPathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(FieldPathError::Empty);
        }
        if segments.iter().any(String::is_empty) {
            return Err(FieldPathError::EmptySegment {
                path: segments.join("."),
            });
        }

        Ok(Self(segments))
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// True for single-segment paths.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.0.len() == 1
    }

    /// Resolve this path against `root`.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Value) -> &'a Value {
        resolve_path(root, self)
    }
}

/// Walk `path` from `root`, returning `Value::Null` when a segment is missing
/// or an intermediate value is not a record. Never fails.
#[must_use]
pub fn resolve_path<'a>(root: &'a Value, path: &FieldPath) -> &'a Value {
    let mut current = root;

    for segment in path.segments() {
        match current.field(segment) {
            Some(next) => current = next,
            None => return &NULL,
        }
    }

    current
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
