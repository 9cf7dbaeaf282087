use derive_more::Display;
use serde::{Deserialize, Serialize};
use sortkit_core::{
    config::ConfigError,
    error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, SortError},
    order::SortSpecError,
    path::FieldPathError,
    value::JsonValueError,
};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<SortError> for Error {
    fn from(err: SortError) -> Self {
        let kind = match (&err, err.class()) {
            (SortError::Spec(_), _) => ErrorKind::InvalidSpec,
            (SortError::Config(_), _) => ErrorKind::InvalidConfig,
            (_, ErrorClass::LimitExceeded) => ErrorKind::LimitExceeded,
            (_, ErrorClass::InvalidInput | ErrorClass::Unsupported) => ErrorKind::InvalidValue,
        };

        Self::new(kind, err.origin().into(), err.to_string())
    }
}

impl From<SortSpecError> for Error {
    fn from(err: SortSpecError) -> Self {
        SortError::from(err).into()
    }
}

impl From<FieldPathError> for Error {
    fn from(err: FieldPathError) -> Self {
        SortError::from(err).into()
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        SortError::from(err).into()
    }
}

impl From<JsonValueError> for Error {
    fn from(err: JsonValueError) -> Self {
        SortError::from(err).into()
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Sort keys are malformed (bad path, bad direction, bad shape).
    InvalidSpec,

    /// Configuration could not be read or failed validation.
    InvalidConfig,

    /// Input data cannot be represented as a sortable value.
    InvalidValue,

    /// Input exceeded a configured limit.
    LimitExceeded,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Path,
    Sort,
    Spec,
    Value,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Config => Self::Config,
            CoreErrorOrigin::Path => Self::Path,
            CoreErrorOrigin::Sort => Self::Sort,
            CoreErrorOrigin::Spec => Self::Spec,
            CoreErrorOrigin::Value => Self::Value,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_errors_map_to_invalid_spec() {
        let err: Error = SortSpecError::InvalidDirection {
            field: "age".to_string(),
            direction: "2".to_string(),
        }
        .into();

        assert_eq!(err.kind, ErrorKind::InvalidSpec);
        assert_eq!(err.origin, ErrorOrigin::Spec);
        assert!(err.message.contains("age"));
    }

    #[test]
    fn path_errors_keep_path_origin() {
        let err: Error = FieldPathError::Empty.into();

        assert_eq!(err.kind, ErrorKind::InvalidSpec);
        assert_eq!(err.origin, ErrorOrigin::Path);
    }

    #[test]
    fn depth_errors_map_to_limit_exceeded() {
        let err: Error = SortError::DepthLimitExceeded {
            index: 3,
            depth: 9,
            max: 8,
        }
        .into();

        assert_eq!(err.kind, ErrorKind::LimitExceeded);
        assert_eq!(err.origin, ErrorOrigin::Sort);
        assert_eq!(err.to_string(), "row 3 nests 9 levels deep; the limit is 8");
    }

    #[test]
    fn config_errors_map_to_invalid_config() {
        let err: Error = ConfigError::Parse {
            message: "bad".to_string(),
        }
        .into();

        assert_eq!(err.kind, ErrorKind::InvalidConfig);
        assert_eq!(err.origin, ErrorOrigin::Config);
    }
}
