//! SortableEntity implementations for catalog entries

use super::{ScoreField, ScoreKey, SortableEntity, YearField, YearKey};
use anidex_model::AnimeItem;

impl SortableEntity<YearField> for AnimeItem {
    fn extract_key(&self, _field: YearField) -> YearKey {
        YearKey::new(self.year)
    }
}

impl SortableEntity<ScoreField> for AnimeItem {
    fn extract_key(&self, _field: ScoreField) -> ScoreKey {
        ScoreKey::from_score(self.score)
    }
}
