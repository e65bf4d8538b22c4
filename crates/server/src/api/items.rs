use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use basketeer_core::{format_price, rank, Item};

use super::ErrorResponse;
use crate::state::AppState;

/// One catalog row with the derived display columns the UI shows.
#[derive(Debug, Serialize)]
pub struct ItemRow {
    #[serde(flatten)]
    pub item: Item,
    /// Base price minus flea price.
    pub diff: i64,
    pub base_display: String,
    pub flea_display: String,
    pub diff_display: String,
}

impl ItemRow {
    fn from_item(item: Item) -> Self {
        let diff = item.value_diff();
        Self {
            diff,
            base_display: format_price(item.base_price as i64),
            flea_display: format_price(item.flea_price.unwrap_or(0) as i64),
            diff_display: format_price(diff),
            item,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    pub count: usize,
    pub fetched_at: Option<DateTime<Utc>>,
    pub items: Vec<ItemRow>,
}

pub async fn list_items(State(state): State<Arc<AppState>>) -> Json<ItemListResponse> {
    let items = state.items().await;

    Json(ItemListResponse {
        count: items.len(),
        fetched_at: state.fetched_at().await,
        items: items.into_iter().map(ItemRow::from_item).collect(),
    })
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub count: usize,
    pub fetched_at: Option<DateTime<Utc>>,
}

pub async fn refresh_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RefreshResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.refresh_catalog().await {
        Ok(count) => Ok(Json(RefreshResponse {
            count,
            fetched_at: state.fetched_at().await,
        })),
        Err(e) => {
            warn!(error = %e, "catalog refresh failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(format!("catalog refresh failed: {}", e))),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// One search hit: the item plus the matched character ranges in its name.
#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub item: Item,
    /// Closed-open `[start, end)` character offsets into the item name.
    pub ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub hits: Vec<SearchHit>,
}

pub async fn search_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let items = state.items().await;
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();

    let hits = rank(&names, &params.q)
        .into_iter()
        .map(|m| SearchHit {
            item: items[m.index].clone(),
            ranges: m.ranges,
        })
        .collect();

    Json(SearchResponse {
        query: params.q,
        hits,
    })
}
