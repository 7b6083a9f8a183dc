pub mod jikan_provider;
pub mod jikan_types;
pub mod traits;

pub use jikan_provider::{JikanProvider, ProviderError};
pub use jikan_types::{ListingPagination, ListingQuery, ListingResponse};
pub use traits::CatalogProvider;

#[cfg(test)]
pub use traits::MockCatalogProvider;
