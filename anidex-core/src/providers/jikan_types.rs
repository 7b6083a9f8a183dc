use anidex_model::{AnimeItem, CatalogPage, PageInfo};
use serde::{Deserialize, Serialize};

/// Envelope of every Jikan listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub data: Vec<AnimeItem>,
    #[serde(default)]
    pub pagination: Option<ListingPagination>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingPagination {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub last_visible_page: Option<u32>,
    #[serde(default)]
    pub current_page: Option<u32>,
}

impl ListingResponse {
    /// Convert into a catalog page, filling the page number from the
    /// request when the response leaves it out.
    pub fn into_page(self, requested_page: u32) -> CatalogPage {
        let pagination = self.pagination.unwrap_or_default();
        let page_info = PageInfo {
            current_page: pagination.current_page.unwrap_or(requested_page),
            has_next_page: pagination.has_next_page,
            last_visible_page: pagination.last_visible_page,
        };

        CatalogPage::new(self.data, page_info)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<&'a str>,
    pub page: u32,
    pub limit: u32,
}
