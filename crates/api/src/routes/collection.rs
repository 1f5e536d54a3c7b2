//! Plant collection route

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::ApiResult;
use crate::state::AppState;
use common::models::PlantCollectionEntry;

/// One entry per distinct disease seen, newest activity first
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PlantCollectionEntry>>> {
    let records = state.ledger.snapshot().await;
    Ok(Json(engine::collection::plant_collection(&records)))
}
