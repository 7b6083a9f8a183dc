pub use crate::anime::AnimeItem;
pub use crate::ids::MalId;
pub use crate::image::{AnimeImages, ImageSize, ImageUrls};
pub use crate::page::{CatalogPage, PageInfo};
