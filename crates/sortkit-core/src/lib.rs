//! Core runtime for SortKit: dynamic values, the canonical total-order
//! comparator, field path resolution, and the multi-key sort comparator.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod error;
pub mod obs;
pub mod order;
pub mod path;
pub mod text;
pub mod types;
pub mod value;

///
/// CONSTANTS
///

/// Default maximum nesting depth accepted by depth-checked sort entrypoints.
///
/// Values own their children, so cycles cannot be expressed; this bound only
/// guards recursion against pathologically deep input.
pub const DEFAULT_MAX_DEPTH: usize = 128;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        order::{SortComparator, SortDirection, SortKey, SortSpec},
        path::FieldPath,
        types::{Number, Timestamp},
        value::Value,
    };
}
