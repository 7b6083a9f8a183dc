//! Browsing state behind a single listing view
//!
//! A session holds one fetched page, an optional title search over it and
//! an optional sort. Every transition rebuilds `displayed` from those
//! inputs.

use anidex_model::{AnimeItem, CatalogPage, PageInfo};
use tracing::{debug, info, warn};

use crate::error::{CatalogError, Result};
use crate::providers::CatalogProvider;
use crate::query::sorting::{SortStrategy, listing_strategy};
use crate::query::{SortField, SortOrder, SortState};

/// Result of [`BrowseSession::load_page`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    /// The page was fetched and holds this many entries
    Fetched(usize),
    /// The provider failed; the session fell back to an empty first page
    Unavailable,
}

/// Result of [`BrowseSession::search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank term; the loaded page is shown again
    Cleared,
    /// Titles on the loaded page matched
    Local { matches: usize },
    /// Nothing on the loaded page matched; results came from the provider
    Remote { results: usize },
    /// Remote search failed; nothing is shown
    Failed { reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct BrowseSession {
    current_page: u32,
    page_info: PageInfo,
    initial: Vec<AnimeItem>,
    search_results: Vec<AnimeItem>,
    displayed: Vec<AnimeItem>,
    search_term: String,
    sort: Option<SortState>,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            ..Default::default()
        }
    }

    /// Start from a page that was fetched elsewhere.
    pub fn from_page(page: CatalogPage) -> Self {
        let mut session = Self::new();
        session.install_page(page);
        session
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    pub fn initial(&self) -> &[AnimeItem] {
        &self.initial
    }

    pub fn search_results(&self) -> &[AnimeItem] {
        &self.search_results
    }

    /// Entries the view shows right now
    pub fn displayed(&self) -> &[AnimeItem] {
        &self.displayed
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Fetch `page` of the top listing and make it the session's page.
    ///
    /// A provider failure is not an error here: it is logged and the
    /// session shows an empty first page with no next page.
    pub async fn load_page<P>(
        &mut self,
        provider: &P,
        page: u32,
    ) -> Result<PageLoad>
    where
        P: CatalogProvider + ?Sized,
    {
        if page == 0 {
            return Err(CatalogError::InvalidPage(page));
        }

        debug!(page, "Loading catalog page");
        match provider.top_anime(page).await {
            Ok(fetched) => {
                let count = fetched.len();
                self.install_page(fetched);
                info!(
                    page = self.current_page,
                    items = count,
                    has_next_page = self.page_info.has_next_page,
                    "Catalog page loaded"
                );
                Ok(PageLoad::Fetched(count))
            }
            Err(e) => {
                warn!(
                    page,
                    error = %e,
                    "Failed to load catalog page, showing empty page"
                );
                self.install_page(CatalogPage::empty());
                Ok(PageLoad::Unavailable)
            }
        }
    }

    fn install_page(&mut self, page: CatalogPage) {
        self.current_page = page.page_info.current_page.max(1);
        self.page_info = page.page_info;
        self.page_info.current_page = self.current_page;
        self.displayed = page.items.clone();
        self.initial = page.items;
        self.search_results.clear();
        self.search_term.clear();
        self.sort = None;
    }

    /// Filter the loaded page by title, falling back to a remote search.
    ///
    /// The current sort indicator is left as is; the new listing is shown
    /// in the order it was found.
    pub async fn search<P>(
        &mut self,
        provider: &P,
        term: &str,
    ) -> SearchOutcome
    where
        P: CatalogProvider + ?Sized,
    {
        let term = term.trim();
        if term.is_empty() {
            self.clear_search();
            return SearchOutcome::Cleared;
        }
        self.search_term = term.to_string();

        let matches: Vec<AnimeItem> = self
            .initial
            .iter()
            .filter(|item| item.title_contains(term))
            .cloned()
            .collect();

        if !matches.is_empty() {
            debug!(
                term,
                matches = matches.len(),
                "Search matched loaded page"
            );
            let count = matches.len();
            self.search_results.clear();
            self.displayed = matches;
            return SearchOutcome::Local { matches: count };
        }

        debug!(term, "No local matches, searching remotely");
        match provider.search_anime(term, 1).await {
            Ok(found) => {
                let count = found.len();
                info!(term, results = count, "Remote search finished");
                self.displayed = found.items.clone();
                self.search_results = found.items;
                SearchOutcome::Remote { results: count }
            }
            Err(e) => {
                warn!(term, error = %e, "Remote search failed");
                self.search_results.clear();
                self.displayed.clear();
                SearchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.search_results.clear();
        self.displayed = self.initial.clone();
    }

    /// Sort by `field`, flipping to descending when `field` is already
    /// the ascending sort. Returns the new state.
    pub fn toggle_sort(&mut self, field: SortField) -> SortState {
        let next = SortState::next(self.sort, field);
        self.apply_sort(next);
        next
    }

    /// Sort by `field` in an explicit `order`.
    pub fn sort_by(
        &mut self,
        field: SortField,
        order: SortOrder,
    ) -> SortState {
        let state = SortState::new(field, order);
        self.apply_sort(state);
        state
    }

    fn apply_sort(&mut self, state: SortState) {
        let strategy =
            listing_strategy::<AnimeItem>(state.field, state.order);
        let mut sorted = self.displayed.clone();
        strategy.sort(&mut sorted);

        debug!(
            field = %state.field,
            order = %state.order,
            items = sorted.len(),
            cost = ?strategy.cost_estimate(),
            "Sorted listing"
        );
        self.displayed = sorted;
        self.sort = Some(state);
    }

    /// Drop the sort and show the unsorted listing again.
    pub fn clear_sorting(&mut self) {
        self.sort = None;
        self.displayed = if self.search_results.is_empty() {
            self.initial.clone()
        } else {
            self.search_results.clone()
        };
    }

    /// Page to load for "next", if there is one
    pub fn next_page(&self) -> Option<u32> {
        self.page_info
            .has_next_page
            .then(|| self.current_page.saturating_add(1))
    }

    /// Page to load for "previous", if there is one
    pub fn prev_page(&self) -> Option<u32> {
        self.page_info
            .has_prev_page()
            .then(|| self.current_page - 1)
    }
}
