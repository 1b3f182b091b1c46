//! Web layer for the metro query engine.
//!
//! Exposes every planner and fare query as a JSON endpoint.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
