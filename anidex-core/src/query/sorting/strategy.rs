//! Strategy pattern for runtime sorting
//!
//! This module provides the trait and implementations the browse session
//! uses to pick an algorithm for a field and apply a direction.

use super::exchange::exchange_sort_by;
use super::fields::{ScoreField, YearField};
use super::partition::partition_sort_by;
use super::traits::{CatalogEntity, SortFieldMarker, SortableEntity};
use crate::query::types::{SortAlgorithm, SortField, SortOrder};
use std::fmt;
use std::marker::PhantomData;

/// A sorting strategy that can be composed
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut Vec<T>);

    /// Whether equal keys keep their input order
    fn is_stable(&self) -> bool;

    /// Estimate the computational cost of this sorting strategy
    fn cost_estimate(&self) -> SortCost;
}

/// Estimated cost of a sorting operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortCost {
    /// O(1) - already sorted or no-op
    Trivial,
    /// O(n) - single pass operation
    Cheap,
    /// O(n log n) on average
    Moderate,
    /// O(n²)
    Expensive,
}

/// Stable adjacent-exchange sort on one field
pub struct ExchangeSort<T, F> {
    pub field: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F: SortFieldMarker> ExchangeSort<T, F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            _phantom: PhantomData,
        }
    }
}

impl<T, F: SortFieldMarker> fmt::Debug for ExchangeSort<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeSort").field("field", &F::ID).finish()
    }
}

impl<T, F> SortStrategy<T> for ExchangeSort<T, F>
where
    T: SortableEntity<F>,
    F: SortFieldMarker,
{
    fn sort(&self, items: &mut Vec<T>) {
        exchange_sort_by(items, self.field);
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn cost_estimate(&self) -> SortCost {
        SortCost::Expensive
    }
}

/// Median-index partition sort on one field
pub struct PartitionSort<T, F> {
    pub field: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T, F: SortFieldMarker> PartitionSort<T, F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            _phantom: PhantomData,
        }
    }
}

impl<T, F: SortFieldMarker> fmt::Debug for PartitionSort<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartitionSort").field("field", &F::ID).finish()
    }
}

impl<T, F> SortStrategy<T> for PartitionSort<T, F>
where
    T: SortableEntity<F>,
    F: SortFieldMarker,
{
    fn sort(&self, items: &mut Vec<T>) {
        let taken = std::mem::take(items);
        *items = partition_sort_by(taken, self.field);
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn cost_estimate(&self) -> SortCost {
        SortCost::Moderate
    }
}

/// Ascending strategy followed by the caller-side direction flip
pub struct DirectedSort<T> {
    inner: Box<dyn SortStrategy<T>>,
    order: SortOrder,
}

impl<T> fmt::Debug for DirectedSort<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy_type = std::any::type_name_of_val(&*self.inner);

        f.debug_struct("DirectedSort")
            .field("strategy", &strategy_type)
            .field("order", &self.order)
            .finish()
    }
}

impl<T> DirectedSort<T> {
    pub fn new(
        inner: impl SortStrategy<T> + 'static,
        order: SortOrder,
    ) -> Self {
        Self {
            inner: Box::new(inner),
            order,
        }
    }

    pub fn from_boxed(
        inner: Box<dyn SortStrategy<T>>,
        order: SortOrder,
    ) -> Self {
        Self { inner, order }
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

impl<T: Send + Sync> SortStrategy<T> for DirectedSort<T> {
    fn sort(&self, items: &mut Vec<T>) {
        self.inner.sort(items);
        self.order.apply(items);
    }

    fn is_stable(&self) -> bool {
        // A reversal turns first-seen ties into last-seen ties
        self.inner.is_stable() && self.order == SortOrder::Ascending
    }

    fn cost_estimate(&self) -> SortCost {
        self.inner.cost_estimate()
    }
}

/// Build the ascending strategy for `field` using `algorithm`.
pub fn strategy_for<T: CatalogEntity + 'static>(
    field: SortField,
    algorithm: SortAlgorithm,
) -> Box<dyn SortStrategy<T>> {
    match (field, algorithm) {
        (SortField::Year, SortAlgorithm::Exchange) => {
            Box::new(ExchangeSort::<T, _>::new(YearField))
        }
        (SortField::Year, SortAlgorithm::Partition) => {
            Box::new(PartitionSort::<T, _>::new(YearField))
        }
        (SortField::Score, SortAlgorithm::Exchange) => {
            Box::new(ExchangeSort::<T, _>::new(ScoreField))
        }
        (SortField::Score, SortAlgorithm::Partition) => {
            Box::new(PartitionSort::<T, _>::new(ScoreField))
        }
    }
}

/// Strategy the listing view uses for `field` in `order`.
pub fn listing_strategy<T: CatalogEntity + 'static>(
    field: SortField,
    order: SortOrder,
) -> DirectedSort<T> {
    DirectedSort::from_boxed(
        strategy_for(field, field.preferred_algorithm()),
        order,
    )
}
