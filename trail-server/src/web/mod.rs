//! Web layer for the trail planner.
//!
//! JSON endpoints for planning routes, requesting alternatives and
//! re-planning under new constraints.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
