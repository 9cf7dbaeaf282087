use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use thiserror::Error as ThisError;

///
/// Number
///
/// Non-NaN f64; -0.0 canonically stored as 0.0.
///
/// NaN has no place in a total order, so it is rejected at construction
/// instead of being classified as "equal" to everything. Infinities are
/// ordinary members of the order.
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display, Serialize)]
pub struct Number(f64);

impl Number {
    pub const ZERO: Self = Self(0.0);
    pub const MIN: Self = Self(f64::NEG_INFINITY);
    pub const MAX: Self = Self(f64::INFINITY);

    #[must_use]
    /// Fallible constructor that rejects NaN and normalizes -0.0.
    pub fn try_new(v: f64) -> Option<Self> {
        if v.is_nan() {
            return None;
        }

        // canonicalize -0.0 to 0.0 so Eq/Hash/Ord are consistent
        Some(Self(if v == 0.0 { 0.0 } else { v }))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum NumberError {
    #[error("NaN is not an orderable number")]
    NaN,
}

impl Eq for Number {}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.to_bits());
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        // no NaN and -0 normalized, so total_cmp agrees with numeric order
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<f64> for Number {
    type Error = NumberError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::try_new(v).ok_or(NumberError::NaN)
    }
}

impl From<Number> for f64 {
    fn from(n: Number) -> Self {
        n.0
    }
}

macro_rules! impl_number_from_lossless {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<$type> for Number {
                fn from(n: $type) -> Self {
                    Self(f64::from(n))
                }
            }
        )*
    };
}

impl_number_from_lossless!(i8, i16, i32, u8, u16, u32);

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;

        Self::try_new(raw).ok_or_else(|| serde::de::Error::custom(NumberError::NaN))
    }
}

///
/// TESTS
///
