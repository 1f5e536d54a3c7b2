//! Achievement routes

use axum::{extract::State, Json};
use chrono::Local;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::state::AppState;
use common::models::AchievementStatus;

/// The evaluated achievement catalog for the current ledger
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<AchievementStatus>>> {
    let records = state.ledger.snapshot().await;
    let stats = engine::analytics::ledger_stats(&records, &Local::now());
    let achievements = engine::achievements::evaluate(&records, &stats);
    Ok(Json(achievements))
}
