//! Observation route handlers.

use axum::{extract::State, http::StatusCode, Json};
use graphmem_core::graph::model::{ObservationAddition, ObservationDeletion, ObservationRequest};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::Acknowledgment;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AddObservationsRequest {
    pub observations: Vec<ObservationRequest>,
}

#[derive(Deserialize)]
pub struct DeleteObservationsRequest {
    pub deletions: Vec<ObservationDeletion>,
}

pub async fn add_observations(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AddObservationsRequest>,
) -> Result<(StatusCode, Json<Vec<ObservationAddition>>), ApiError> {
    let results = state.store.add_observations(req.observations).await?;
    Ok((StatusCode::CREATED, Json(results)))
}

pub async fn delete_observations(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DeleteObservationsRequest>,
) -> Result<Json<Acknowledgment>, ApiError> {
    state.store.delete_observations(req.deletions).await?;
    Ok(Json(Acknowledgment {
        message: "Observations deleted successfully",
    }))
}
