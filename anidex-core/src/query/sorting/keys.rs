//! Sort key types for comparing catalog entries
//!
//! Every sortable field wraps its value in [`NullableKey`], whose `Ord`
//! is the one comparator both sorting algorithms use.

use super::traits::SortKey;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Compare two possibly-missing values.
///
/// Missing equals missing, and a missing value sorts after any present
/// one. Present values use their natural order.
#[inline]
pub fn compare_nullable<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less, // Items with values come first
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Optional value ordered with missing data last
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NullableKey<T>(Option<T>);

impl<T> NullableKey<T> {
    pub fn new(value: Option<T>) -> Self {
        NullableKey(value)
    }

    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T: Ord> Ord for NullableKey<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_nullable(self.0.as_ref(), other.0.as_ref())
    }
}

impl<T: Ord> PartialOrd for NullableKey<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord + Clone + Send + Sync> SortKey for NullableKey<T> {
    fn missing() -> Self {
        NullableKey(None)
    }

    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

/// Release year key
pub type YearKey = NullableKey<u16>;

/// Rating key; NaN is treated as a missing score
pub type ScoreKey = NullableKey<OrderedFloat<f32>>;

impl NullableKey<OrderedFloat<f32>> {
    pub fn from_score(score: Option<f32>) -> Self {
        NullableKey(score.filter(|s| !s.is_nan()).map(OrderedFloat))
    }
}
