use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::info;

use basketeer_core::{filter_for_solver, PlanReport, PlanRequest};

use super::ErrorResponse;
use crate::state::AppState;

/// Run a plan over the cached catalog.
///
/// The catalog is filtered down to solver candidates first; the report may
/// hold fewer baskets than requested, which is a normal outcome.
pub async fn plan_baskets(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanReport>, (StatusCode, Json<ErrorResponse>)> {
    let items = state.items().await;
    if items.is_empty() {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new(
                "item catalog is empty, refresh it before planning",
            )),
        ));
    }

    let candidates = filter_for_solver(&items, &state.config().filter);
    info!(
        catalog = items.len(),
        candidates = candidates.len(),
        "planning baskets"
    );

    if candidates.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(
                "no catalog item passes the candidate filter",
            )),
        ));
    }

    let report = state.planner().plan_with(&candidates, &request).await;
    Ok(Json(report))
}
