use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{CatalogError, Result};

pub const DEFAULT_API_BASE: &str = "https://api.jikan.moe/v4";
/// Jikan rejects listing limits above this
pub const MAX_PAGE_LIMIT: u32 = 25;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_BASE: &str = "ANIDEX_API_BASE";
pub const ENV_PAGE_LIMIT: &str = "ANIDEX_PAGE_LIMIT";
pub const ENV_TIMEOUT_SECS: &str = "ANIDEX_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "ANIDEX_USER_AGENT";

/// Settings for the remote listing client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub page_limit: u32,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_limit: MAX_PAGE_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("anidex/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|_| None)
    }

    /// Like [`ClientConfig::from_env`], but keys `overrides` answers for
    /// never reach the environment. Validation runs once, on the merged
    /// result.
    pub fn from_env_with<F>(overrides: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        dotenvy::dotenv().ok();

        Self::from_layers(overrides, |key| env::var(key).ok())
    }

    /// Load from two lookups, asking `overrides` before `base` for every
    /// key. A bad value in `base` is ignored when `overrides` has the key.
    pub fn from_layers<O, B>(overrides: O, base: B) -> Result<Self>
    where
        O: Fn(&str) -> Option<String>,
        B: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|key| overrides(key).or_else(|| base(key)))
    }

    /// Load from an arbitrary key lookup. Unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_base) = lookup(ENV_API_BASE) {
            config.api_base = api_base.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_PAGE_LIMIT) {
            config.page_limit = raw.trim().parse().map_err(|_| {
                CatalogError::Config(format!(
                    "{ENV_PAGE_LIMIT} must be a whole number, got {raw:?}"
                ))
            })?;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                CatalogError::Config(format!(
                    "{ENV_TIMEOUT_SECS} must be whole seconds, got {raw:?}"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(user_agent) = lookup(ENV_USER_AGENT)
            && !user_agent.trim().is_empty()
        {
            config.user_agent = user_agent.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base).map_err(|e| {
            CatalogError::Config(format!(
                "invalid API base URL {:?}: {}",
                self.api_base, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::Config(format!(
                "API base URL must use http or https, got {}",
                url.scheme()
            )));
        }

        if !(1..=MAX_PAGE_LIMIT).contains(&self.page_limit) {
            return Err(CatalogError::Config(format!(
                "page limit must be between 1 and {MAX_PAGE_LIMIT}, got {}",
                self.page_limit
            )));
        }

        if self.timeout.is_zero() {
            return Err(CatalogError::Config(
                "timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}
