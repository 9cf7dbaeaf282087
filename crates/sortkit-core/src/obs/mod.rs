//! Observability: per-thread sort counters and sink abstractions.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::SortCounters;
pub use sink::{SortEvent, SortKind, SortSink, metrics_report, metrics_reset, with_sort_sink};
