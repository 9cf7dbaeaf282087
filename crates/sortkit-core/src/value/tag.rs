use crate::value::Value;

///
/// ValueTag
///
/// Stable canonical value-variant tag used by ordering and diagnostics.
///
/// IMPORTANT:
/// Tag order IS the cross-variant sort order. Reordering tags changes the
/// result of every mixed-type sort.
///
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ValueTag {
    Null = 1,
    Number = 2,
    Text = 3,
    Bool = 4,
    Date = 5,
    List = 6,
    Record = 7,
}

impl ValueTag {
    /// Stable byte tag for this variant.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Number => "Number",
            Self::Text => "Text",
            Self::Bool => "Bool",
            Self::Date => "Date",
            Self::List => "List",
            Self::Record => "Record",
        }
    }
}

/// Stable canonical variant tag.
#[must_use]
pub(super) const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Null => ValueTag::Null,
        Value::Number(_) => ValueTag::Number,
        Value::Text(_) => ValueTag::Text,
        Value::Bool(_) => ValueTag::Bool,
        Value::Date(_) => ValueTag::Date,
        Value::List(_) => ValueTag::List,
        Value::Record(_) => ValueTag::Record,
    }
}
