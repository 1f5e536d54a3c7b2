//! Diagnosis routes: run a diagnosis, read the history

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{ApiResult, OptionExt};
use crate::state::AppState;
use common::models::DiagnosisRecord;

#[derive(Deserialize)]
pub struct DiagnoseRequest {
    /// Decoded image reference (data URL); intake validation happens
    /// before it reaches this endpoint
    pub image: String,
}

/// Run one end-to-end diagnosis and return the new record
pub async fn diagnose(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DiagnoseRequest>,
) -> ApiResult<Json<DiagnosisRecord>> {
    let record = state.workflow.diagnose(&state.ledger, req.image).await?;
    Ok(Json(record))
}

/// Full diagnosis history, newest first
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<DiagnosisRecord>>> {
    Ok(Json(state.ledger.snapshot().await))
}

/// A single diagnosis record by id
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DiagnosisRecord>> {
    let record = state
        .ledger
        .snapshot()
        .await
        .into_iter()
        .find(|r| r.id == id)
        .not_found(format!("Diagnosis '{}' not found", id))?;

    Ok(Json(record))
}
