//! Adjacent-exchange (bubble) sort
//!
//! Quadratic, and only ever run on one fetched page. Equal keys keep
//! their input order.

use super::traits::{SortFieldMarker, SortableEntity};

/// Sort `items` ascending by the key `key` returns, in place.
///
/// Each pass swaps adjacent pairs whose left key is strictly greater than
/// the right key. Sorting stops after a pass without swaps or after
/// `len - 1` passes. Returns the number of swaps performed.
pub fn exchange_sort_by_key<T, K, F>(items: &mut [T], mut key: F) -> usize
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let n = items.len();
    let mut swaps = 0;
    if n < 2 {
        return swaps;
    }

    for pass in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            // Strict comparison: equal neighbours never move past each other
            if key(&items[j]) > key(&items[j + 1]) {
                items.swap(j, j + 1);
                swapped = true;
                swaps += 1;
            }
        }
        if !swapped {
            break;
        }
    }

    swaps
}

/// Sort `items` ascending by `field`, in place, keeping ties in input order.
pub fn exchange_sort_by<T, F>(items: &mut [T], field: F) -> usize
where
    T: SortableEntity<F>,
    F: SortFieldMarker,
{
    exchange_sort_by_key(items, |item| item.extract_key(field))
}
