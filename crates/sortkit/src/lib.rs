//! SortKit: deterministic total-order comparison and multi-key sorting for
//! dynamically typed records.
//!
//! This is the public meta-crate. Downstream users depend on **sortkit** only.
//!
//! ## Crate layout
//! - `core`: values, the canonical comparator, paths, sort specs, and
//!   observability.
//! - `error`: the public error type with a stable kind + origin taxonomy.
//!
//! The `prelude` module carries the vocabulary needed to build and apply a
//! comparator.

pub use sortkit_core as core;

pub mod error;

pub use error::Error;

use serde_json::Value as JsonValue;
use sortkit_core::{
    config::SortConfig,
    order::{SortComparator, SortQuery, SortSpec, project_json},
    value::Value,
};
use std::cmp::Ordering;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        config::SortConfig,
        order::{Page, SortComparator, SortDirection, SortKey, SortQuery, SortSpec, sort_rows},
        path::FieldPath,
        text::{Collation, TextComparator},
        types::{Number, Timestamp},
        value::Value,
    };
    pub use crate::error::Error;
}

/// Build a record comparator from `$sort`-style `(dotted key, 1 | -1)` pairs.
///
/// ```ignore
/// let cmp = sortkit::sorter([("age", 1), ("name", -1)])?;
/// rows.sort_by(cmp);
/// ```
pub fn sorter<I, K>(pairs: I) -> Result<impl Fn(&Value, &Value) -> Ordering, Error>
where
    I: IntoIterator<Item = (K, i64)>,
    K: AsRef<str>,
{
    let comparator = SortComparator::build(pairs)?;

    Ok(move |left: &Value, right: &Value| comparator.compare(left, right))
}

/// Stable-sort JSON documents in place by a JSON sort spec
/// (`{"age": 1, "name": -1}` or `[{"field": "age", "direction": "desc"}]`).
///
/// Only the fields the spec reads are copied out of each document. Rows whose
/// sort fields nest deeper than `DEFAULT_MAX_DEPTH` fail the call and leave
/// `rows` in their input order.
pub fn sort_json(rows: &mut Vec<JsonValue>, sort: &JsonValue) -> Result<(), Error> {
    let spec = SortSpec::from_json(sort)?;
    let query = SortQuery::new(SortComparator::new(spec));

    apply_keyed(rows, &query)
}

/// [`sort_json`] under a config: collation, depth limit and default page size.
///
/// Leaves `rows` untouched when any document exceeds the depth limit.
pub fn sort_json_with(
    rows: &mut Vec<JsonValue>,
    sort: &JsonValue,
    config: &SortConfig,
) -> Result<(), Error> {
    let query = SortQuery::from_config(SortSpec::from_json(sort)?, config);

    apply_keyed(rows, &query)
}

// Pair each document with its projected sort fields, run the query, and put
// the documents back in whatever order the query left them.
fn apply_keyed(rows: &mut Vec<JsonValue>, query: &SortQuery) -> Result<(), Error> {
    let spec = query.comparator().spec();
    let mut keyed: Vec<(JsonValue, Value)> = rows
        .drain(..)
        .map(|json| {
            let key = project_json(&json, spec);
            (json, key)
        })
        .collect();

    let result = query.apply(&mut keyed);
    rows.extend(keyed.into_iter().map(|(json, _)| json));

    result.map_err(Error::from)
}
