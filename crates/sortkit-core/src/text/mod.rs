//! Injectable string comparators.
//!
//! The canonical comparator never performs locale-aware collation itself.
//! Callers that need it plug their own [`TextComparator`] in; the built-in
//! [`Collation`] presets cover the binary and case-insensitive cases.

use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

///
/// TextComparator
///
/// Total order over strings used for `Value::Text` pairs.
///
/// Implementations MUST be a total order (reflexive, antisymmetric,
/// transitive); the composite comparator inherits whatever they return.
///
pub trait TextComparator: Send + Sync {
    fn compare(&self, left: &str, right: &str) -> Ordering;
}

impl<F> TextComparator for F
where
    F: Fn(&str, &str) -> Ordering + Send + Sync,
{
    fn compare(&self, left: &str, right: &str) -> Ordering {
        self(left, right)
    }
}

impl fmt::Debug for dyn TextComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn TextComparator")
    }
}

///
/// Collation
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collation {
    /// Lexicographic code point order.
    #[default]
    Binary,

    /// Lowercase-folded order with a binary tie-break, so `"a"` and `"A"`
    /// stay distinct but adjacent.
    CaseInsensitive,
}

impl Collation {
    fn fold(s: &str) -> String {
        if s.is_ascii() {
            return s.to_ascii_lowercase();
        }

        s.to_lowercase()
    }
}

impl TextComparator for Collation {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        match self {
            Self::Binary => left.cmp(right),
            Self::CaseInsensitive => Self::fold(left)
                .cmp(&Self::fold(right))
                .then_with(|| left.cmp(right)),
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
    fn binary_uses_code_point_order() {
        assert_eq!(Collation::Binary.compare("B", "a"), Ordering::Less);
        assert_eq!(Collation::Binary.compare("a", "a"), Ordering::Equal);
        assert_eq!(Collation::Binary.compare("é", "z"), Ordering::Greater);
    }

    #[test]
    fn case_insensitive_groups_case_variants() {
        let c = Collation::CaseInsensitive;

        assert_eq!(c.compare("B", "a"), Ordering::Greater);
        assert_eq!(c.compare("apple", "Banana"), Ordering::Less);

        // tie-break keeps the order antisymmetric
        assert_eq!(c.compare("A", "a"), Ordering::Less);
        assert_eq!(c.compare("a", "A"), Ordering::Greater);
    }

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &str, b: &str| a.len().cmp(&b.len());

        assert_eq!(by_len.compare("zz", "aaa"), Ordering::Less);
    }
}
