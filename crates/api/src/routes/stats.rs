//! Ledger statistics route

use axum::{extract::State, Json};
use chrono::Local;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::state::AppState;
use common::models::LedgerStats;

/// Aggregates derived from the full ledger, recomputed per request
pub async fn get(State(state): State<Arc<AppState>>) -> ApiResult<Json<LedgerStats>> {
    let records = state.ledger.snapshot().await;
    let stats = engine::analytics::ledger_stats(&records, &Local::now());
    Ok(Json(stats))
}
