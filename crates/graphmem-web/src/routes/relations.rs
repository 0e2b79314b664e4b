//! Relation route handlers.

use axum::{extract::State, http::StatusCode, Json};
use graphmem_core::graph::model::Relation;
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::Acknowledgment;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RelationsRequest {
    pub relations: Vec<Relation>,
}

pub async fn create_relations(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RelationsRequest>,
) -> Result<(StatusCode, Json<Vec<Relation>>), ApiError> {
    let added = state.store.create_relations(req.relations).await?;
    Ok((StatusCode::CREATED, Json(added)))
}

pub async fn delete_relations(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RelationsRequest>,
) -> Result<Json<Acknowledgment>, ApiError> {
    state.store.delete_relations(req.relations).await?;
    Ok(Json(Acknowledgment {
        message: "Relations deleted successfully",
    }))
}
