//! Utility functions for sorting operations

use std::cmp::Ordering;

use super::traits::{SortFieldMarker, SortableEntity};

/// Check if a slice is already sorted according to a comparison function
///
/// Returns true if every adjacent pair compares `Less` or `Equal`.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.windows(2).all(|w| {
        matches!(compare(&w[0], &w[1]), Ordering::Less | Ordering::Equal)
    })
}

/// Check if `items` are ascending by `field`, missing keys last.
pub fn is_ascending_by<T, F>(items: &[T], field: F) -> bool
where
    T: SortableEntity<F>,
    F: SortFieldMarker,
{
    is_sorted_by(items, |a, b| a.extract_key(field).cmp(&b.extract_key(field)))
}

/// Count entries whose key for `field` is missing.
pub fn count_missing<T, F>(items: &[T], field: F) -> usize
where
    T: SortableEntity<F>,
    F: SortFieldMarker,
{
    use super::traits::SortKey;

    items
        .iter()
        .filter(|item| item.extract_key(field).is_missing())
        .count()
}
