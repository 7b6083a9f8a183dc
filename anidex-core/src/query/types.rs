use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Fields available for sorting a catalog page
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Year,
    Score,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Year => "year",
            SortField::Score => "score",
        }
    }

    /// Algorithm the listing view uses for this field
    pub fn preferred_algorithm(&self) -> SortAlgorithm {
        match self {
            SortField::Year => SortAlgorithm::Exchange,
            SortField::Score => SortAlgorithm::Partition,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(SortField::Year),
            "score" | "rating" => Ok(SortField::Score),
            _ => Err(CatalogError::InvalidField(s.to_string())),
        }
    }
}

/// Sort order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Turn an ascending arrangement into this order.
    ///
    /// Descending is a plain reversal, so entries with a missing key end up
    /// first rather than last.
    pub fn apply<T>(self, ascending: &mut [T]) {
        if self == SortOrder::Descending {
            ascending.reverse();
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(CatalogError::InvalidOrder(s.to_string())),
        }
    }
}

/// Active sort of a listing view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// State after the user picks `field` again.
    ///
    /// Re-selecting the field that is currently ascending flips it to
    /// descending; anything else starts over ascending.
    pub fn next(current: Option<SortState>, field: SortField) -> SortState {
        let order = match current {
            Some(state)
                if state.field == field
                    && state.order == SortOrder::Ascending =>
            {
                state.order.toggled()
            }
            _ => SortOrder::Ascending,
        };
        SortState { field, order }
    }
}

/// Sorting algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    /// Adjacent-exchange (bubble) sort, stable
    Exchange,
    /// Median-index partition (quick) sort, not stable
    Partition,
}

impl SortAlgorithm {
    /// Field the algorithm sorts by when the caller does not choose one
    pub fn default_field(&self) -> SortField {
        match self {
            SortAlgorithm::Exchange => SortField::Year,
            SortAlgorithm::Partition => SortField::Score,
        }
    }
}
