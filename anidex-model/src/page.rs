use crate::anime::AnimeItem;

/// Pagination flags returned alongside a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageInfo {
    pub current_page: u32,
    pub has_next_page: bool,
    pub last_visible_page: Option<u32>,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            has_next_page: false,
            last_visible_page: None,
        }
    }
}

impl PageInfo {
    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }
}

/// One fetched page of catalog entries
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogPage {
    pub items: Vec<AnimeItem>,
    pub page_info: PageInfo,
}

impl CatalogPage {
    pub fn new(items: Vec<AnimeItem>, page_info: PageInfo) -> Self {
        Self { items, page_info }
    }

    /// Placeholder used when a listing could not be fetched
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
