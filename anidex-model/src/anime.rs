use crate::ids::MalId;
use crate::image::{AnimeImages, ImageSize};

/// One catalog entry as published by the remote listing API
///
/// Only `year` and `score` take part in ordering; everything else is
/// payload carried through unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimeItem {
    pub mal_id: MalId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub year: Option<u16>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub score: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: AnimeImages,
}

impl AnimeItem {
    pub fn new(mal_id: impl Into<MalId>, title: impl Into<String>) -> Self {
        Self {
            mal_id: mal_id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_year(mut self, year: Option<u16>) -> Self {
        self.year = year;
        self
    }

    pub fn with_score(mut self, score: Option<f32>) -> Self {
        self.score = score;
        self
    }

    /// Case-insensitive substring match against the title
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }

    pub fn poster_url(&self) -> Option<&str> {
        self.images.jpg_url(ImageSize::Default)
    }

    pub fn page_url(&self) -> String {
        self.mal_id.page_url()
    }
}
