//! Sorting module for catalog pages
//!
//! This module provides:
//! - Core traits for sortable entities
//! - Field marker types for compile-time safe sorting
//! - A single null-aware sort key shared by every field
//! - The exchange sort and the partition sort
//! - Strategy pattern for picking an algorithm and direction at runtime

pub mod exchange;
pub mod fields;
pub mod impls;
pub mod keys;
pub mod partition;
pub mod strategy;
pub mod traits;
pub mod utils;


pub use exchange::*;
pub use fields::*;
pub use keys::*;
pub use partition::*;
pub use strategy::*;
pub use traits::*;

use super::types::SortField;

/// Sort `items` ascending by `field` with the stable exchange sort.
///
/// Entries missing the field end up last, in their original relative
/// order. The slice is reordered in place.
pub fn ascending_exchange_sort<T: CatalogEntity>(
    items: &mut [T],
    field: SortField,
) {
    let swaps = match field {
        SortField::Year => exchange_sort_by(items, YearField),
        SortField::Score => exchange_sort_by(items, ScoreField),
    };
    tracing::trace!(%field, len = items.len(), swaps, "exchange sort done");
}

/// Sort `items` ascending by `field` with the partition sort.
///
/// Entries missing the field end up last. Ties are not kept in input
/// order.
pub fn partition_sort<T: CatalogEntity>(
    items: Vec<T>,
    field: SortField,
) -> Vec<T> {
    match field {
        SortField::Year => partition_sort_by(items, YearField),
        SortField::Score => partition_sort_by(items, ScoreField),
    }
}
