//! Canned catalog source for testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, CatalogSource, Item};

/// Catalog source returning a fixed item list.
///
/// Clones share state; flipping [`set_failing`](Self::set_failing) makes
/// subsequent fetches fail, for exercising error paths.
#[derive(Clone, Default)]
pub struct StaticCatalogSource {
    items: Arc<RwLock<Vec<Item>>>,
    failing: Arc<RwLock<bool>>,
}

impl StaticCatalogSource {
    /// Create a source serving the given items.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            failing: Arc::new(RwLock::new(false)),
        }
    }

    /// Replace the served items.
    pub async fn set_items(&self, items: Vec<Item>) {
        *self.items.write().await = items;
    }

    /// Make every subsequent fetch fail (or succeed again).
    pub async fn set_failing(&self, failing: bool) {
        *self.failing.write().await = failing;
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_items(&self) -> Result<Vec<Item>, CatalogError> {
        if *self.failing.read().await {
            return Err(CatalogError::ApiError {
                status: 503,
                message: "static source configured to fail".to_string(),
            });
        }
        Ok(self.items.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            normalized_name: id.to_string(),
            icon_link: None,
            categories: vec![],
            base_price: 100,
            flea_price: Some(50),
        }
    }

    #[tokio::test]
    async fn test_serves_items() {
        let source = StaticCatalogSource::new(vec![make_item("a"), make_item("b")]);
        let items = source.fetch_items().await.unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_toggle() {
        let source = StaticCatalogSource::new(vec![make_item("a")]);
        source.set_failing(true).await;
        assert!(source.fetch_items().await.is_err());

        source.set_failing(false).await;
        assert!(source.fetch_items().await.is_ok());
    }
}
