use crate::{
    DEFAULT_MAX_DEPTH,
    config::SortConfig,
    error::SortError,
    obs::{SortEvent, SortKind, sink::record},
    order::{SortComparator, SortSpec},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, sync::Arc};

///
/// SortRow
///
/// Anything that exposes one record to sort by.
///

pub trait SortRow {
    fn sort_value(&self) -> &Value;
}

impl SortRow for Value {
    fn sort_value(&self) -> &Value {
        self
    }
}

impl SortRow for &Value {
    fn sort_value(&self) -> &Value {
        self
    }
}

impl<K> SortRow for (K, Value) {
    fn sort_value(&self) -> &Value {
        &self.1
    }
}

///
/// Page
/// Offset/limit window applied after ordering.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Page {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl Page {
    #[must_use]
    pub const fn new(offset: u32, limit: Option<u32>) -> Self {
        Self { offset, limit }
    }

    /// Number of leading ordered rows the page can ever touch.
    #[must_use]
    pub const fn keep_count(self) -> Option<usize> {
        match self.limit {
            Some(limit) => Some(self.offset as usize + limit as usize),
            None => None,
        }
    }
}

/// Stable sort by the comparator; tied rows keep their input order.
pub fn sort_rows<R: SortRow>(rows: &mut [R], comparator: &SortComparator) {
    rows.sort_by(|left, right| comparator.compare(left.sort_value(), right.sort_value()));
}

// Bounded ordering for first-page loads.
// We select the smallest `keep_count` rows under the comparator and then sort
// only that prefix. Rows are tagged with their input position so ties resolve
// exactly as the full stable sort would.
pub fn sort_rows_bounded<R: SortRow>(
    rows: &mut Vec<R>,
    comparator: &SortComparator,
    keep_count: usize,
) {
    if keep_count == 0 {
        rows.clear();
        return;
    }

    if rows.len() <= keep_count {
        sort_rows(rows, comparator);
        return;
    }

    // Phase 1: tag rows with their original position.
    let mut indexed: Vec<(usize, R)> = rows.drain(..).enumerate().collect();
    let cmp = |(left_idx, left): &(usize, R), (right_idx, right): &(usize, R)| -> Ordering {
        comparator
            .compare(left.sort_value(), right.sort_value())
            .then_with(|| left_idx.cmp(right_idx))
    };

    // Phase 2: partition around the last kept row, then order the prefix.
    indexed.select_nth_unstable_by(keep_count - 1, cmp);
    indexed.truncate(keep_count);
    indexed.sort_unstable_by(cmp);

    // Phase 3: restore the ordered rows.
    rows.extend(indexed.into_iter().map(|(_, row)| row));
}

/// Apply offset/limit pagination to an in-memory vector, in-place.
///
/// - `offset` and `limit` are logical (u32) pagination parameters
/// - Conversion to `usize` happens only at the indexing boundary
pub fn apply_page<T>(rows: &mut Vec<T>, page: Page) {
    let total = rows.len();
    let start = page.offset as usize;

    // If offset is past the end, clear everything
    if start >= total {
        rows.clear();
        return;
    }

    let end = match page.limit {
        Some(limit) => start.saturating_add(limit as usize).min(total),
        None => total,
    };

    // Drop leading rows, then truncate to window size
    rows.drain(..start);
    rows.truncate(end - start);
}

/// Reject the first row nested deeper than `max`.
pub fn check_depth<R: SortRow>(rows: &[R], max: usize) -> Result<(), SortError> {
    let mut deepest = 0;

    for (index, row) in rows.iter().enumerate() {
        let depth = row.sort_value().depth();
        if depth > max {
            tracing::warn!(index, depth, max, "row exceeds sort depth limit");
            record(SortEvent::DepthRejected {
                depth: depth as u64,
                max: max as u64,
            });

            return Err(SortError::DepthLimitExceeded { index, depth, max });
        }
        deepest = deepest.max(depth);
    }

    record(SortEvent::DepthObserved {
        depth: deepest as u64,
    });

    Ok(())
}

///
/// SortQuery
///
/// Depth check, ordering, and pagination as one call.
///

#[derive(Clone, Debug)]
pub struct SortQuery {
    comparator: SortComparator,
    page: Page,
    max_depth: usize,
}

impl SortQuery {
    #[must_use]
    pub const fn new(comparator: SortComparator) -> Self {
        Self {
            comparator,
            page: Page::new(0, None),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Build from a spec using configured collation, depth limit and default
    /// page size.
    #[must_use]
    pub fn from_config(spec: SortSpec, config: &SortConfig) -> Self {
        let comparator = SortComparator::with_text(spec, Arc::new(config.collation));

        Self {
            comparator,
            page: Page::new(0, config.default_limit),
            max_depth: config.max_depth,
        }
    }

    #[must_use]
    pub const fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn comparator(&self) -> &SortComparator {
        &self.comparator
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Order and page `rows` in place.
    ///
    /// Fails before touching `rows` when any row exceeds the depth limit.
    pub fn apply<R: SortRow>(&self, rows: &mut Vec<R>) -> Result<(), SortError> {
        check_depth(rows, self.max_depth)?;

        let rows_in = rows.len() as u64;
        let kind = match self.page.keep_count() {
            Some(keep) => {
                sort_rows_bounded(rows, &self.comparator, keep);
                SortKind::Bounded
            }
            None => {
                sort_rows(rows, &self.comparator);
                SortKind::Full
            }
        };
        apply_page(rows, self.page);

        record(SortEvent::RowsSorted {
            kind,
            rows_in,
            rows_out: rows.len() as u64,
        });

        Ok(())
    }
}
