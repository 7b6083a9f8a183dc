//! # anidex core
//!
//! Core library for the anidex catalog browser: ordering of fetched
//! catalog pages, the browsing state behind a listing view, and the client
//! for the public Jikan listing API.
//!
//! ## Architecture
//!
//! - [`query`]: sort fields, sort order and the two sorting algorithms
//!   (a stable exchange sort and a median-index partition sort) sharing one
//!   null-aware comparator
//! - [`catalog`]: the browse session (page loading, title search with
//!   remote fallback, sort toggling, pagination)
//! - [`providers`]: the remote catalog provider trait and its Jikan
//!   implementation
//! - [`config`]: client configuration loaded from the environment
//! - [`error`]: error types shared by the modules above
//!
//! ## Examples
//!
//! ```
//! use anidex_core::query::{
//!     SortField, ascending_exchange_sort, partition_sort,
//! };
//! use anidex_model::AnimeItem;
//!
//! let mut items = vec![
//!     AnimeItem::new(1u32, "Later").with_year(Some(2020)),
//!     AnimeItem::new(2u32, "Unknown").with_year(None),
//!     AnimeItem::new(3u32, "Earlier").with_year(Some(1999)),
//! ];
//!
//! ascending_exchange_sort(&mut items, SortField::Year);
//! let years: Vec<_> = items.iter().map(|item| item.year).collect();
//! assert_eq!(years, vec![Some(1999), Some(2020), None]);
//!
//! let by_score = partition_sort(items, SortField::Score);
//! assert_eq!(by_score.len(), 3);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Browse session state for a listing view
pub mod catalog;

/// Client configuration
pub mod config;

/// Error types and error handling utilities
pub mod error;

/// Remote catalog providers (Jikan integration)
pub mod providers;

/// Sort fields, sort order and the sorting algorithms
pub mod query;

pub use anidex_model as model;
pub use catalog::{BrowseSession, PageLoad, SearchOutcome};
pub use config::ClientConfig;
pub use error::{CatalogError, Result};
pub use providers::{CatalogProvider, JikanProvider, ProviderError};
pub use query::{SortField, SortOrder, SortState};
