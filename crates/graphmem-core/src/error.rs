//! Centralized error types for GraphMem.

use thiserror::Error;

/// Main error type for graph store operations.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Entity with name {0} not found")]
    EntityNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for graph store operations.
pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
