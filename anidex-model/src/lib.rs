//! Core data model definitions shared across anidex crates.
#![allow(missing_docs)]

pub mod anime;
pub mod ids;
pub mod image;
pub mod page;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use anime::AnimeItem;
pub use ids::MalId;
pub use image::{AnimeImages, ImageSize, ImageUrls};
pub use page::{CatalogPage, PageInfo};
