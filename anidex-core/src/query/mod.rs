//! Ordering of a fetched catalog page
//!
//! Only one page (a few dozen entries at most) is ever sorted, in memory,
//! on the calling thread.

pub mod sorting;
pub mod types;

pub use sorting::{ascending_exchange_sort, partition_sort};
pub use types::{SortAlgorithm, SortField, SortOrder, SortState};
