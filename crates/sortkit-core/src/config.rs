//! Sort configuration loaded from TOML.
//!
//! ```toml
//! collation = "case_insensitive"
//! max_depth = 64
//! default_limit = 100
//! ```

use crate::{DEFAULT_MAX_DEPTH, text::Collation};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("failed to read sort config '{path}': {message}")]
    Io { path: String, message: String },

    #[error("failed to parse sort config: {message}")]
    Parse { message: String },

    #[error("invalid sort config field '{field}': {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

///
/// SortConfig
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    /// Text comparator applied to `Value::Text` pairs.
    pub collation: Collation,

    /// Rows nested deeper than this are rejected before sorting.
    pub max_depth: usize,

    /// Page size applied when a query does not set one.
    pub default_limit: Option<u32>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            collation: Collation::Binary,
            max_depth: DEFAULT_MAX_DEPTH,
            default_limit: None,
        }
    }
}

impl SortConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|err| ConfigError::Parse {
            message: err.to_string(),
        })?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        Self::from_toml_str(&input)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid {
                field: "max_depth",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

///
/// TESTS
///
