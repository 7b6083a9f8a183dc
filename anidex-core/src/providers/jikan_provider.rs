use std::fmt;

use anidex_model::CatalogPage;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::jikan_types::{ListingQuery, ListingResponse};
use super::traits::CatalogProvider;
use crate::config::ClientConfig;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Client for the public Jikan v4 listing endpoints
pub struct JikanProvider {
    http: reqwest::Client,
    api_base: String,
    page_limit: u32,
}

impl fmt::Debug for JikanProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JikanProvider")
            .field("api_base", &self.api_base)
            .field("page_limit", &self.page_limit)
            .finish()
    }
}

impl JikanProvider {
    pub fn new(config: &ClientConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            page_limit: config.page_limit,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn get_jikan_json<Q, T>(
        &self,
        url: &str,
        query: &Q,
    ) -> Result<T, ProviderError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice::<T>(&body)
                .map_err(|e| ProviderError::ParseError(e.to_string()));
        }

        #[derive(Debug, Deserialize)]
        struct JikanErrorBody {
            #[serde(default)]
            message: Option<String>,
        }

        let message = response
            .json::<JikanErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                format!("Jikan request failed with status {}", status)
            });

        warn!(%url, status = status.as_u16(), %message, "Jikan request failed");

        match status.as_u16() {
            404 => Err(ProviderError::NotFound),
            429 => Err(ProviderError::RateLimited),
            _ => Err(ProviderError::ApiError(message)),
        }
    }

    async fn fetch_listing(
        &self,
        path: &str,
        q: Option<&str>,
        page: u32,
    ) -> Result<CatalogPage, ProviderError> {
        let page = page.max(1);
        let query = ListingQuery {
            q,
            page,
            limit: self.page_limit,
        };
        let url = format!("{}/{}", self.api_base, path);

        debug!(%url, page, limit = self.page_limit, "Fetching listing");
        let response: ListingResponse =
            self.get_jikan_json(&url, &query).await?;
        let listing = response.into_page(page);
        debug!(
            %url,
            page,
            items = listing.len(),
            has_next_page = listing.page_info.has_next_page,
            "Fetched listing"
        );

        Ok(listing)
    }
}

#[async_trait]
impl CatalogProvider for JikanProvider {
    async fn top_anime(&self, page: u32) -> Result<CatalogPage, ProviderError> {
        self.fetch_listing("top/anime", None, page).await
    }

    async fn search_anime(
        &self,
        query: &str,
        page: u32,
    ) -> Result<CatalogPage, ProviderError> {
        self.fetch_listing("anime", Some(query), page).await
    }
}
