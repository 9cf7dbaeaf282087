//! Metrics sink boundary.
//!
//! Sort logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through SortEvent and SortSink.
//!
//! This module is the only allowed bridge between sorting logic and the
//! per-thread metrics state.
use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn SortSink>>> = RefCell::new(None);
}

///
/// SortKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortKind {
    Full,
    Bounded,
}

///
/// SortEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortEvent {
    ComparatorBuilt {
        keys: u64,
    },
    SpecRejected,
    RowsSorted {
        kind: SortKind,
        rows_in: u64,
        rows_out: u64,
    },
    DepthRejected {
        depth: u64,
        max: u64,
    },
    DepthObserved {
        depth: u64,
    },
}

///
/// SortSink
///

pub trait SortSink {
    fn record(&self, event: SortEvent);
}

/// GlobalSortSink
/// Default sink that writes into the per-thread counters.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalSortSink;

impl SortSink for GlobalSortSink {
    fn record(&self, event: SortEvent) {
        match event {
            SortEvent::ComparatorBuilt { keys } => {
                metrics::with_state_mut(|m| {
                    m.comparators_built = m.comparators_built.saturating_add(1);
                    m.sort_keys_built = m.sort_keys_built.saturating_add(keys);
                });
            }

            SortEvent::SpecRejected => {
                metrics::with_state_mut(|m| {
                    m.specs_rejected = m.specs_rejected.saturating_add(1);
                });
            }

            SortEvent::RowsSorted {
                kind,
                rows_in,
                rows_out,
            } => {
                metrics::with_state_mut(|m| {
                    match kind {
                        SortKind::Full => m.sorts_full = m.sorts_full.saturating_add(1),
                        SortKind::Bounded => m.sorts_bounded = m.sorts_bounded.saturating_add(1),
                    }
                    m.rows_sorted = m.rows_sorted.saturating_add(rows_in);
                    m.rows_returned = m.rows_returned.saturating_add(rows_out);
                });
            }

            SortEvent::DepthRejected { depth, max: _ } => {
                metrics::with_state_mut(|m| {
                    m.depth_rejections = m.depth_rejections.saturating_add(1);
                    m.max_depth_seen = m.max_depth_seen.max(depth);
                });
            }

            SortEvent::DepthObserved { depth } => {
                metrics::with_state_mut(|m| {
                    m.max_depth_seen = m.max_depth_seen.max(depth);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_SORT_SINK: GlobalSortSink = GlobalSortSink;

pub(crate) fn record(event: SortEvent) {
    let override_sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match override_sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_SORT_SINK.record(event),
    }
}

/// Snapshot the current thread's sort counters.
#[must_use]
pub fn metrics_report() -> metrics::SortCounters {
    metrics::snapshot()
}

/// Reset the current thread's sort counters.
pub fn metrics_reset() {
    metrics::reset();
}

/// Run a closure with a temporary sink override on this thread.
pub fn with_sort_sink<T>(sink: Rc<dyn SortSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn SortSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
