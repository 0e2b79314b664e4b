//! GraphMem Core Library
//!
//! Domain models and persistence for the knowledge graph store.

pub mod error;
pub mod graph;

pub use error::{GraphError, GraphResult};
pub use graph::GraphStore;
