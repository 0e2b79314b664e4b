//! GraphMem Web Server
//!
//! Axum-based HTTP API over the knowledge graph store. Each handler decodes
//! its payload, calls exactly one store operation, and serializes the result.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use axum::{
    routing::{delete, get, post},
    Router,
};
use graphmem_core::GraphStore;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Reads
        .route("/graph", get(routes::graph::read_graph))
        .route("/search", get(routes::graph::search_nodes))
        .route("/nodes", get(routes::graph::open_nodes))
        // Entities
        .route("/entities", post(routes::entities::create_entities))
        .route("/entities", delete(routes::entities::delete_entities))
        // Relations
        .route("/relations", post(routes::relations::create_relations))
        .route("/relations", delete(routes::relations::delete_relations))
        // Observations
        .route("/observations", post(routes::observations::add_observations))
        .route("/observations", delete(routes::observations::delete_observations))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::index::index))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(store: Arc<GraphStore>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(store);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("API server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
