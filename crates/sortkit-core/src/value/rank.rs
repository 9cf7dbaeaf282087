use crate::value::{Value, tag};

///
/// Canonical Value Rank
///
/// Stable rank used for cross-variant ordering:
/// `Null < Number < Text < Bool < Date < List < Record`.
///
#[must_use]
pub(super) const fn canonical_rank(value: &Value) -> u8 {
    // Tags are 1-based for diagnostics stability; rank is 0-based.
    tag::canonical_tag(value).to_u8() - 1
}
