//! Graph read and query route handlers.

use axum::{extract::State, Json};
use graphmem_core::graph::model::KnowledgeGraph;
use graphmem_core::GraphError;
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: String,
}

#[derive(Deserialize)]
pub struct NodesParams {
    pub names: String,
}

pub async fn read_graph(
    State(state): State<AppState>,
) -> Result<Json<KnowledgeGraph>, ApiError> {
    let graph = state.store.read_graph().await?;
    Ok(Json(graph))
}

pub async fn search_nodes(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<KnowledgeGraph>, ApiError> {
    if params.query.is_empty() {
        return Err(GraphError::validation("Search query is required").into());
    }

    let results = state.store.search_nodes(&params.query).await?;
    Ok(Json(results))
}

pub async fn open_nodes(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<NodesParams>,
) -> Result<Json<KnowledgeGraph>, ApiError> {
    // Names arrive comma-separated: /api/nodes?names=a,b,c
    let names: Vec<String> = params
        .names
        .split(',')
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();

    if names.is_empty() {
        return Err(GraphError::validation("Node names are required").into());
    }

    let results = state.store.open_nodes(&names).await?;
    Ok(Json(results))
}
