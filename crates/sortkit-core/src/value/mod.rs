mod compare;
mod json;
mod rank;
mod tag;


use crate::{
    text::TextComparator,
    types::{Number, Timestamp},
};
use std::{cmp::Ordering, collections::BTreeMap};

// re-exports
pub use compare::{
    compare_list, compare_list_with, compare_scalar, compare_value, compare_value_with,
};
pub use json::JsonValueError;
pub use tag::ValueTag;

///
/// Value
/// dynamically typed record field
///
/// Null    → null or undefined; sorts before every other variant.
/// Record  → keyed record; BTreeMap iteration is the canonical sorted key
///           order, so construction order never affects comparison.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Number(Number),
    Text(String),
    Bool(bool),
    Date(Timestamp),
    /// Ordered list of values.
    List(Vec<Self>),
    Record(BTreeMap<String, Self>),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a `Value::Record` from key/value entries.
    ///
    /// Later duplicates replace earlier ones.
    pub fn record<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Record(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a `Value::Number`, mapping NaN to `None`.
    #[must_use]
    pub fn number(n: f64) -> Option<Self> {
        Number::try_new(n).map(Self::Number)
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Record(_))
    }

    /// Stable canonical variant tag.
    #[must_use]
    pub const fn canonical_tag(&self) -> ValueTag {
        tag::canonical_tag(self)
    }

    /// Stable canonical rank used by all cross-variant ordering.
    #[must_use]
    pub const fn canonical_rank(&self) -> u8 {
        rank::canonical_rank(self)
    }

    ///
    /// COMPARISON
    ///

    /// Total canonical comparator (binary text collation).
    #[must_use]
    pub fn canonical_cmp(left: &Self, right: &Self) -> Ordering {
        compare::compare_value(left, right)
    }

    /// Total canonical comparator with an injected text comparator.
    #[must_use]
    pub fn canonical_cmp_with(left: &Self, right: &Self, text: &dyn TextComparator) -> Ordering {
        compare::compare_value_with(left, right, text)
    }

    ///
    /// ACCESS
    ///

    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        if let Self::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&BTreeMap<String, Self>> {
        if let Self::Record(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    /// Field lookup on a record; `None` for missing keys and non-records.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Self> {
        self.as_record().and_then(|fields| fields.get(name))
    }

    ///
    /// DEPTH
    ///

    /// Nesting depth: scalars are 1, each list/record level adds one.
    ///
    /// Walks with an explicit stack so measuring a pathologically deep value
    /// cannot itself exhaust the call stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];

        while let Some((value, depth)) = stack.pop() {
            max = max.max(depth);
            match value {
                Self::List(items) => stack.extend(items.iter().map(|v| (v, depth + 1))),
                Self::Record(fields) => stack.extend(fields.values().map(|v| (v, depth + 1))),
                Self::Null | Self::Number(_) | Self::Text(_) | Self::Bool(_) | Self::Date(_) => {}
            }
        }

        max
    }
}

macro_rules! impl_value_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from_for! {
    Number    => Number,
    i8        => Number,
    i16       => Number,
    i32       => Number,
    u8        => Number,
    u16       => Number,
    u32       => Number,
    bool      => Bool,
    &str      => Text,
    String    => Text,
    Timestamp => Date,
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(fields: BTreeMap<String, Self>) -> Self {
        Self::Record(fields)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}
