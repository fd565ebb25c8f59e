//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::TrailPlanner;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Route planner over the loaded catalog
    pub planner: Arc<TrailPlanner>,
}

impl AppState {
    pub fn new(planner: TrailPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}
