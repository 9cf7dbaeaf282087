use crate::{
    config::ConfigError,
    order::SortSpecError,
    path::FieldPathError,
    value::JsonValueError,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// SortError
///
/// Structured runtime error for everything that can fail before or around a
/// sort. Comparison itself never fails.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SortError {
    #[error(transparent)]
    Spec(#[from] SortSpecError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Json(#[from] JsonValueError),

    #[error("row {index} nests {depth} levels deep; the limit is {max}")]
    DepthLimitExceeded {
        index: usize,
        depth: usize,
        max: usize,
    },
}

impl SortError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Spec(_) | Self::Config(_) => ErrorClass::InvalidInput,
            Self::Json(_) => ErrorClass::Unsupported,
            Self::DepthLimitExceeded { .. } => ErrorClass::LimitExceeded,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::Spec(SortSpecError::Path(_)) => ErrorOrigin::Path,
            Self::Spec(_) => ErrorOrigin::Spec,
            Self::Config(_) => ErrorOrigin::Config,
            Self::Json(_) => ErrorOrigin::Value,
            Self::DepthLimitExceeded { .. } => ErrorOrigin::Sort,
        }
    }
}

impl From<FieldPathError> for SortError {
    fn from(err: FieldPathError) -> Self {
        Self::Spec(SortSpecError::from(err))
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    LimitExceeded,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid_input",
            Self::LimitExceeded => "limit_exceeded",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Config,
    Path,
    Sort,
    Spec,
    Value,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::Path => "path",
            Self::Sort => "sort",
            Self::Spec => "spec",
            Self::Value => "value",
        };
        write!(f, "{label}")
    }
}
