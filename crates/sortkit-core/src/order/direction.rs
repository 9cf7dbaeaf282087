use crate::order::SortSpecError;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::{cmp::Ordering, fmt, str::FromStr};

///
/// SortDirection
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Multiplier applied to the base ordering (`Asc` = +1, `Desc` = -1).
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Asc => 1,
            Self::Desc => -1,
        }
    }

    // Apply configured order direction to one base ordering.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Parse a `$sort`-style numeric direction (`1` or `-1`).
    pub fn from_sign(field: &str, sign: i64) -> Result<Self, SortSpecError> {
        match sign {
            1 => Ok(Self::Asc),
            -1 => Ok(Self::Desc),
            other => Err(SortSpecError::InvalidDirection {
                field: field.to_string(),
                direction: other.to_string(),
            }),
        }
    }

    /// Parse a float direction; only `1.0` and `-1.0` are accepted.
    #[allow(clippy::float_cmp)]
    pub fn from_float(field: &str, sign: f64) -> Result<Self, SortSpecError> {
        if sign == 1.0 {
            Ok(Self::Asc)
        } else if sign == -1.0 {
            Ok(Self::Desc)
        } else {
            Err(SortSpecError::InvalidDirection {
                field: field.to_string(),
                direction: sign.to_string(),
            })
        }
    }

    /// Parse a textual direction for `field`.
    pub fn parse_for(field: &str, raw: &str) -> Result<Self, SortSpecError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "1" => Ok(Self::Asc),
            "desc" | "descending" | "-1" => Ok(Self::Desc),
            _ => Err(SortSpecError::InvalidDirection {
                field: field.to_string(),
                direction: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

impl FromStr for SortDirection {
    type Err = SortSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_for("", s)
    }
}

impl TryFrom<i64> for SortDirection {
    type Error = SortSpecError;

    fn try_from(sign: i64) -> Result<Self, Self::Error> {
        Self::from_sign("", sign)
    }
}

// Accepts "asc"/"desc" (any case, long forms too) or the numbers 1 / -1.
impl<'de> Deserialize<'de> for SortDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DirectionVisitor;

        impl de::Visitor<'_> for DirectionVisitor {
            type Value = SortDirection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"asc\", \"desc\", 1, or -1")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                SortDirection::try_from(v).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                match i64::try_from(v) {
                    Ok(v) => self.visit_i64(v),
                    Err(_) => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
                }
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                SortDirection::from_float("", v).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(DirectionVisitor)
    }
}
