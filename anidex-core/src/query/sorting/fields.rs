//! Field marker types for compile-time safe sorting
//!
//! These zero-sized types represent the fields a catalog page can be
//! sorted on.

use super::keys::{ScoreKey, YearKey};
use super::traits::SortFieldMarker;
use crate::query::types::SortField;

/// Sort by release year
#[derive(Copy, Clone, Debug, Default)]
pub struct YearField;

impl SortFieldMarker for YearField {
    type Key = YearKey;
    const ID: &'static str = "year";
}

/// Sort by rating (0-10 score)
#[derive(Copy, Clone, Debug, Default)]
pub struct ScoreField;

impl SortFieldMarker for ScoreField {
    type Key = ScoreKey;
    const ID: &'static str = "score";
}

impl From<YearField> for SortField {
    fn from(_: YearField) -> Self {
        SortField::Year
    }
}

impl From<ScoreField> for SortField {
    fn from(_: ScoreField) -> Self {
        SortField::Score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_ids_match_runtime_fields() {
        assert_eq!(YearField::ID, SortField::from(YearField).as_str());
        assert_eq!(ScoreField::ID, SortField::from(ScoreField).as_str());
    }
}
