//! Entity route handlers.

use axum::{extract::State, http::StatusCode, Json};
use graphmem_core::graph::model::Entity;
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::Acknowledgment;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateEntitiesRequest {
    pub entities: Vec<Entity>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEntitiesRequest {
    pub entity_names: Vec<String>,
}

pub async fn create_entities(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateEntitiesRequest>,
) -> Result<(StatusCode, Json<Vec<Entity>>), ApiError> {
    let added = state.store.create_entities(req.entities).await?;
    Ok((StatusCode::CREATED, Json(added)))
}

pub async fn delete_entities(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DeleteEntitiesRequest>,
) -> Result<Json<Acknowledgment>, ApiError> {
    state.store.delete_entities(req.entity_names).await?;
    Ok(Json(Acknowledgment {
        message: "Entities deleted successfully",
    }))
}
