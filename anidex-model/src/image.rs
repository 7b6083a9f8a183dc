use std::fmt::{Display, Formatter};

/// Image size variants published for every catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageSize {
    Small, // Grid thumbnails
    #[default]
    Default,
    Large,
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSize::Small => write!(f, "small"),
            ImageSize::Default => write!(f, "default"),
            ImageSize::Large => write!(f, "large"),
        }
    }
}

/// URLs of one image encoding (the API publishes `jpg` and `webp`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImageUrls {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

impl ImageUrls {
    /// URL for the requested size, falling back to the default image.
    pub fn url(&self, size: ImageSize) -> Option<&str> {
        let sized = match size {
            ImageSize::Small => self.small_image_url.as_deref(),
            ImageSize::Default => None,
            ImageSize::Large => self.large_image_url.as_deref(),
        };
        sized
            .or(self.image_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Image references attached to a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimeImages {
    pub jpg: ImageUrls,
}

impl AnimeImages {
    pub fn jpg_url(&self, size: ImageSize) -> Option<&str> {
        self.jpg.url(size)
    }
}
