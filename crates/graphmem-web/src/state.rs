//! Application state.

use graphmem_core::GraphStore;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<GraphStore>,
}

impl AppState {
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}
