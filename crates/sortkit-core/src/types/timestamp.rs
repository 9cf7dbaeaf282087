use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Timestamp
/// (UTC instant, nanosecond precision)
///
/// Ordering is the ordering of the epoch instant.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Timestamp(DateTime<Utc>);

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TimestampParseError {
    #[error("timestamp parse error: {0}")]
    Rfc3339(String),

    #[error("epoch milliseconds out of range: {0}")]
    OutOfRange(i64),
}

impl Timestamp {
    pub const EPOCH: Self = Self(DateTime::<Utc>::UNIX_EPOCH);

    #[must_use]
    pub const fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Construct from signed epoch milliseconds.
    pub fn from_millis(ms: i64) -> Result<Self, TimestampParseError> {
        DateTime::from_timestamp_millis(ms)
            .map(Self)
            .ok_or(TimestampParseError::OutOfRange(ms))
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, TimestampParseError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| TimestampParseError::Rfc3339(e.to_string()))?;

        Ok(Self(dt.with_timezone(&Utc)))
    }

    /// Epoch milliseconds (truncated), the numeric representation used by
    /// JSON-facing callers.
    #[must_use]
    pub fn as_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    #[must_use]
    pub const fn get(self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        Self::parse_rfc3339(&raw).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rfc3339_normalizes_offsets() {
        let a = Timestamp::parse_rfc3339("2024-01-02T10:00:00+02:00").unwrap();
        let b = Timestamp::parse_rfc3339("2024-01-02T08:00:00Z").unwrap();

        assert_eq!(a, b);
        assert_eq!(a.to_string(), "2024-01-02T08:00:00Z");
    }

    #[test]
    fn ordering_follows_epoch_instant() {
        let early = Timestamp::from_millis(-1).unwrap();
        let late = Timestamp::from_millis(1_700_000_000_000).unwrap();

        assert!(early < Timestamp::EPOCH);
        assert!(Timestamp::EPOCH < late);
        assert_eq!(late.as_millis(), 1_700_000_000_000);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Timestamp::parse_rfc3339("yesterday"),
            Err(TimestampParseError::Rfc3339(_))
        ));
    }
}
