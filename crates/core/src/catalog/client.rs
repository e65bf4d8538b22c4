//! tarkov.dev catalog client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::CatalogConfig;

use super::{CatalogError, CatalogSource, Item};

/// GraphQL query for the item fields the solver and the UI need.
const ITEMS_QUERY: &str = "{
    items {
        id
        name
        normalizedName
        basePrice
        iconLink
        types
        lastLowPrice
    }
}";

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<ItemsData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct ItemsData {
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// Catalog source backed by the tarkov.dev GraphQL API.
pub struct TarkovDevClient {
    client: Client,
    config: CatalogConfig,
}

impl TarkovDevClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

#[async_trait]
impl CatalogSource for TarkovDevClient {
    fn name(&self) -> &str {
        "tarkov.dev"
    }

    async fn fetch_items(&self) -> Result<Vec<Item>, CatalogError> {
        let started = Instant::now();

        let response = self
            .client
            .post(&self.config.url)
            .json(&serde_json::json!({ "query": ITEMS_QUERY }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: GraphqlResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        if let Some(error) = body.errors.first() {
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message: error.message.clone(),
            });
        }

        let items = body
            .data
            .ok_or_else(|| CatalogError::ParseError("response has no data field".to_string()))?
            .items;

        debug!(
            items = items.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "item catalog fetched"
        );

        Ok(items)
    }
}
