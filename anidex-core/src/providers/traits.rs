use anidex_model::CatalogPage;
use async_trait::async_trait;

use super::ProviderError;

/// Source of catalog listings
///
/// Page numbers are 1-based. Implementations clamp anything below 1.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// One page of the top-ranked listing
    async fn top_anime(&self, page: u32) -> Result<CatalogPage, ProviderError>;

    /// One page of entries whose titles match `query`
    async fn search_anime(
        &self,
        query: &str,
        page: u32,
    ) -> Result<CatalogPage, ProviderError>;
}
