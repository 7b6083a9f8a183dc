//! Core traits for sortable catalog entities
//!
//! A field is a zero-sized marker type; an entity opts into a field by
//! implementing [`SortableEntity`] for it, so asking for a field an entity
//! does not carry is a compile error rather than a runtime surprise.

use super::fields::{ScoreField, YearField};

/// Individual sort field with associated key type
pub trait SortFieldMarker: Copy + Clone + Send + Sync + 'static {
    /// The type of key extracted for this field
    type Key: SortKey;

    /// Unique identifier for this field
    const ID: &'static str;
}

/// Keys that can be compared for sorting
///
/// All sort keys must be totally ordered and place missing data after
/// present data.
pub trait SortKey: Ord + Clone + Send + Sync {
    /// Create a key representing missing/null data
    fn missing() -> Self;

    /// Check if this key represents missing data
    fn is_missing(&self) -> bool;
}

/// Entity that can produce a sort key for field `F`
pub trait SortableEntity<F: SortFieldMarker>: Send + Sync {
    /// Extract the sort key for the given field
    fn extract_key(&self, field: F) -> F::Key;
}

/// Entity sortable by every field a catalog page can be ordered on
pub trait CatalogEntity:
    SortableEntity<YearField> + SortableEntity<ScoreField>
{
}

impl<T> CatalogEntity for T where
    T: SortableEntity<YearField> + SortableEntity<ScoreField>
{
}
