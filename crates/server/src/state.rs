use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;

use basketeer_core::{BasketPlanner, CatalogError, CatalogSource, Config, Item};

/// In-memory item catalog snapshot.
#[derive(Default)]
pub struct CatalogCache {
    items: Vec<Item>,
    fetched_at: Option<DateTime<Utc>>,
}

/// Shared application state
pub struct AppState {
    config: Config,
    source: Arc<dyn CatalogSource>,
    planner: BasketPlanner,
    catalog: RwLock<CatalogCache>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn CatalogSource>, planner: BasketPlanner) -> Self {
        Self {
            config,
            source,
            planner,
            catalog: RwLock::new(CatalogCache::default()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn planner(&self) -> &BasketPlanner {
        &self.planner
    }

    /// Snapshot of the cached catalog.
    pub async fn items(&self) -> Vec<Item> {
        self.catalog.read().await.items.clone()
    }

    /// When the cached catalog was last fetched.
    pub async fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.catalog.read().await.fetched_at
    }

    /// Number of cached items.
    pub async fn item_count(&self) -> usize {
        self.catalog.read().await.items.len()
    }

    /// Re-fetch the catalog from the source and replace the cache.
    pub async fn refresh_catalog(&self) -> Result<usize, CatalogError> {
        let items = self.source.fetch_items().await?;
        let count = items.len();

        let mut cache = self.catalog.write().await;
        cache.items = items;
        cache.fetched_at = Some(Utc::now());

        info!(source = self.source.name(), items = count, "catalog refreshed");
        Ok(count)
    }
}
