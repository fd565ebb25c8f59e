//! Route assembly: derive totals, validate, persist.

use std::sync::Arc;

use tracing::info;

use crate::domain::{PlannedRoute, RouteId, RouteParts};

use super::error::PlanError;
use super::store::RouteStore;

/// Build a `PlannedRoute` from resolved parts and append it to `store`.
///
/// A fresh id is generated for every call; existing records are never
/// touched.
///
/// # Errors
///
/// Returns `Validation` if the parts break a route invariant (no hiking,
/// over budget) and `Conflict` if the generated id is somehow taken.
pub fn assemble(store: &RouteStore, parts: RouteParts) -> Result<Arc<PlannedRoute>, PlanError> {
    let route = PlannedRoute::new(RouteId::generate(), parts)?;
    let route = store.insert(route)?;

    info!(
        route_id = %route.id(),
        trailhead = %route.destination(),
        criterion = %route.criterion(),
        total_mins = route.total_mins(),
        transit_mins = route.transit_mins(),
        hiking_mins = route.hiking_mins(),
        derived_from = ?route.derived_from(),
        "planned route created"
    );

    Ok(route)
}
