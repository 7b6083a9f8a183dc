use thiserror::Error;

use crate::providers::ProviderError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid sort field: {0} (expected one of: year, score)")]
    InvalidField(String),

    #[error("Invalid sort order: {0} (expected asc or desc)")]
    InvalidOrder(String),

    #[error("Invalid page number: {0} (pages start at 1)")]
    InvalidPage(u32),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
