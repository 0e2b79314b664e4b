//! API index route.

use axum::Json;
use serde_json::{json, Value};

/// Describe the available endpoints.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "GraphMem Knowledge Graph API",
        "endpoints": [
            { "method": "GET", "path": "/api/graph", "description": "Get the entire knowledge graph" },
            { "method": "POST", "path": "/api/entities", "description": "Create new entities" },
            { "method": "POST", "path": "/api/relations", "description": "Create new relations" },
            { "method": "POST", "path": "/api/observations", "description": "Add observations to entities" },
            { "method": "DELETE", "path": "/api/entities", "description": "Delete entities" },
            { "method": "DELETE", "path": "/api/observations", "description": "Delete observations" },
            { "method": "DELETE", "path": "/api/relations", "description": "Delete relations" },
            { "method": "GET", "path": "/api/search", "description": "Search the knowledge graph" },
            { "method": "GET", "path": "/api/nodes", "description": "Get specific nodes by name" }
        ]
    }))
}
