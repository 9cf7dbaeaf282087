use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// SortCounters
/// Ephemeral, in-memory counters for comparator and sort activity.
///
/// State is per thread; comparisons themselves never touch it.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortCounters {
    // Builder
    pub comparators_built: u64,
    pub sort_keys_built: u64,
    pub specs_rejected: u64,

    // Sorting
    pub sorts_full: u64,
    pub sorts_bounded: u64,
    pub rows_sorted: u64,
    pub rows_returned: u64,

    // Limits
    pub depth_rejections: u64,
    pub max_depth_seen: u64,
}

thread_local! {
    static SORT_COUNTERS: RefCell<SortCounters> = RefCell::new(SortCounters::default());
}

/// Borrow counters immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&SortCounters) -> R) -> R {
    SORT_COUNTERS.with(|m| f(&m.borrow()))
}

/// Borrow counters mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut SortCounters) -> R) -> R {
    SORT_COUNTERS.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset() {
    with_state_mut(|m| *m = SortCounters::default());
}

/// Snapshot of the current thread's counters.
pub(crate) fn snapshot() -> SortCounters {
    with_state(Clone::clone)
}
