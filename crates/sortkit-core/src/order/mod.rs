//! Multi-key ORDER BY: sort specs, the composite comparator, and helpers
//! that apply it to in-memory rows.

mod apply;
mod comparator;
mod direction;
mod project;
mod spec;


// re-exports
pub use apply::{
    Page, SortQuery, SortRow, apply_page, check_depth, sort_rows, sort_rows_bounded,
};
pub use comparator::SortComparator;
pub use direction::SortDirection;
pub use project::project_json;
pub use spec::{SortKey, SortSpec, SortSpecError};
