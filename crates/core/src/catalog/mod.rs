//! Item catalog: domain types, remote source and the solver pre-filter.
//!
//! The catalog itself lives upstream (tarkov.dev); this module fetches it
//! into memory and narrows it down to the items the solver is allowed to
//! consider. Nothing here persists between runs.

mod client;
mod filter;
mod types;

pub use client::TarkovDevClient;
pub use filter::filter_for_solver;
pub use types::{Item, ItemCategory};

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching the item catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("failed to parse catalog response: {0}")]
    ParseError(String),
}

/// Trait for item catalog sources.
///
/// The core never performs network I/O outside of an implementation of
/// this trait; tests substitute a canned source.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Name of this source for logging.
    fn name(&self) -> &str;

    /// Fetch the full item catalog.
    async fn fetch_items(&self) -> Result<Vec<Item>, CatalogError>;
}
