//! Partition (quick) sort with a median-index pivot
//!
//! Not in place: every level moves the items into three new groups.

use super::traits::{SortFieldMarker, SortableEntity};
use std::cmp::Ordering;

/// Sort `items` ascending by the key `key` returns.
///
/// The pivot is the element at index `len / 2`. Items are split into
/// less / equal / greater groups (each keeping input order), the outer
/// groups are sorted recursively, and the three are concatenated. The
/// equal group always holds the pivot, so both recursive calls shrink.
pub fn partition_sort_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    partition_recursive(items, &mut key)
}

fn partition_recursive<T, K, F>(items: Vec<T>, key: &mut F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    if items.len() <= 1 {
        return items;
    }

    let pivot = key(&items[items.len() / 2]);

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for item in items {
        match key(&item).cmp(&pivot) {
            Ordering::Less => less.push(item),
            Ordering::Equal => equal.push(item),
            Ordering::Greater => greater.push(item),
        }
    }

    let mut sorted = partition_recursive(less, key);
    sorted.append(&mut equal);
    sorted.append(&mut partition_recursive(greater, key));
    sorted
}

/// Sort `items` ascending by `field`. Ties may be reordered.
pub fn partition_sort_by<T, F>(items: Vec<T>, field: F) -> Vec<T>
where
    T: SortableEntity<F>,
    F: SortFieldMarker,
{
    partition_sort_by_key(items, |item| item.extract_key(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_plain_keys() {
        let sorted = partition_sort_by_key(vec![5, 1, 4, 2, 3], |v| *v);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn handles_duplicates() {
        let sorted = partition_sort_by_key(vec![3, 1, 3, 1, 2, 3], |v| *v);
        assert_eq!(sorted, vec![1, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn base_cases_are_returned_unchanged() {
        assert!(partition_sort_by_key(Vec::<i32>::new(), |v| *v).is_empty());
        assert_eq!(partition_sort_by_key(vec![7], |v| *v), vec![7]);
    }

    #[test]
    fn all_equal_keys_keep_arrangement() {
        let pairs = vec![(1, 'a'), (1, 'b'), (1, 'c')];
        let sorted = partition_sort_by_key(pairs.clone(), |(k, _)| *k);
        assert_eq!(sorted, pairs);
    }

    #[test]
    fn pivot_is_the_middle_element() {
        // Each level reads its pivot key first, then every item's key
        let mut extracted = Vec::new();
        let sorted = partition_sort_by_key(vec![50, 40, 30, 20, 10], |v| {
            extracted.push(*v);
            *v
        });

        assert_eq!(sorted, vec![10, 20, 30, 40, 50]);
        assert_eq!(
            extracted,
            vec![
                30, 50, 40, 30, 20, 10, // top level, pivot index 2
                10, 20, 10, // less group [20, 10], pivot index 1
                40, 50, 40, // greater group [50, 40], pivot index 1
            ]
        );
    }

    #[test]
    fn equal_group_keeps_input_order_around_pivot() {
        // Pivot is index 2 (key 1); the two key-1 entries stay in input order
        let pairs = vec![(2, 'a'), (1, 'b'), (1, 'c'), (0, 'd')];
        let sorted = partition_sort_by_key(pairs, |(k, _)| *k);
        assert_eq!(sorted, vec![(0, 'd'), (1, 'b'), (1, 'c'), (2, 'a')]);
    }
}
