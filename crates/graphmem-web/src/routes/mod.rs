//! Route handlers.

pub mod entities;
pub mod graph;
pub mod index;
pub mod observations;
pub mod relations;

use serde::Serialize;

/// Constant acknowledgment body for the delete endpoints.
#[derive(Serialize)]
pub struct Acknowledgment {
    pub message: &'static str,
}
