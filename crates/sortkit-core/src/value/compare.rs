use crate::{
    text::{Collation, TextComparator},
    value::Value,
};
use std::cmp::Ordering;

/// Scalar comparator for two values of the same primitive variant.
///
/// `Number` compares by magnitude, `Text` by code point, `Bool` with
/// `false < true`. Mismatched or non-primitive pairs are outside the contract
/// and fall back to canonical rank order so the result stays deterministic.
#[must_use]
pub fn compare_scalar(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.as_str().cmp(b.as_str()),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (
            Value::Null
            | Value::Number(_)
            | Value::Text(_)
            | Value::Bool(_)
            | Value::Date(_)
            | Value::List(_)
            | Value::Record(_),
            _,
        ) => left.canonical_rank().cmp(&right.canonical_rank()),
    }
}

/// Total canonical comparator using binary text collation.
#[must_use]
pub fn compare_value(left: &Value, right: &Value) -> Ordering {
    compare_value_with(left, right, &Collation::Binary)
}

/// Total canonical comparator with an injected text comparator.
///
/// Ordering rules:
/// 1. Identity fast path
/// 2. `Null` sorts before everything
/// 3. Canonical variant rank
/// 4. Variant-specific comparison for same-ranked values
///
/// The text comparator is threaded through list and record recursion.
/// Nested values are walked with an explicit work stack, so nesting depth
/// never grows the call stack.
#[must_use]
pub fn compare_value_with(left: &Value, right: &Value, text: &dyn TextComparator) -> Ordering {
    compare_pending(vec![Pending::Pair(left, right)], text)
}

/// Lexicographic list comparator using binary text collation.
#[must_use]
pub fn compare_list(left: &[Value], right: &[Value]) -> Ordering {
    compare_list_with(left, right, &Collation::Binary)
}

/// Lexicographic list comparator: first non-equal element decides, then the
/// shorter list sorts first.
#[must_use]
pub fn compare_list_with(left: &[Value], right: &[Value], text: &dyn TextComparator) -> Ordering {
    let mut pending = Vec::new();
    push_children(&mut pending, left.iter(), right.iter());

    compare_pending(pending, text)
}

///
/// Pending
/// One outstanding step of a lexicographic walk.
///

enum Pending<'a> {
    Pair(&'a Value, &'a Value),
    Len(usize, usize),
}

// Drain the work stack; the first non-equal step decides.
fn compare_pending(mut pending: Vec<Pending<'_>>, text: &dyn TextComparator) -> Ordering {
    while let Some(step) = pending.pop() {
        let ordering = match step {
            Pending::Pair(left, right) => compare_node(left, right, text, &mut pending),
            Pending::Len(left, right) => left.cmp(&right),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

// Compare one pair. Containers report `Equal` and queue their children.
fn compare_node<'a>(
    left: &'a Value,
    right: &'a Value,
    text: &dyn TextComparator,
    pending: &mut Vec<Pending<'a>>,
) -> Ordering {
    if std::ptr::eq(left, right) {
        return Ordering::Equal;
    }

    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Number(_), Value::Number(_)) | (Value::Bool(_), Value::Bool(_)) => {
            compare_scalar(left, right)
        }
        (Value::Text(a), Value::Text(b)) => text.compare(a, b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::List(a), Value::List(b)) => {
            push_children(pending, a.iter(), b.iter());
            Ordering::Equal
        }

        // Record entries iterate in sorted key order. Values at matching
        // sorted-key positions are compared; key names do not participate.
        (Value::Record(a), Value::Record(b)) => {
            push_children(pending, a.values(), b.values());
            Ordering::Equal
        }

        // Different variants always differ in rank.
        (
            Value::Null
            | Value::Number(_)
            | Value::Text(_)
            | Value::Bool(_)
            | Value::Date(_)
            | Value::List(_)
            | Value::Record(_),
            _,
        ) => left.canonical_rank().cmp(&right.canonical_rank()),
    }
}

// Queue the length tie-break below the element pairs, first pair on top.
fn push_children<'a, L, R>(pending: &mut Vec<Pending<'a>>, left: L, right: R)
where
    L: DoubleEndedIterator<Item = &'a Value> + ExactSizeIterator,
    R: DoubleEndedIterator<Item = &'a Value> + ExactSizeIterator,
{
    pending.push(Pending::Len(left.len(), right.len()));
    pending.extend(
        left.zip(right)
            .rev()
            .map(|(left, right)| Pending::Pair(left, right)),
    );
}
