//! Domain types for the trail planner.
//!
//! This module contains the core domain model: validated coordinates and
//! identifiers, reference entities (stops, trailheads, trails) and the
//! immutable planned-route record. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod accessibility;
mod criterion;
mod error;
mod geo;
mod ids;
mod route;
mod stop;
mod trail;

pub use accessibility::AccessibilityTags;
pub use criterion::{Criterion, InvalidCriterion};
pub use error::DomainError;
pub use geo::{EARTH_RADIUS_KM, GeoPoint, InvalidCoordinates};
pub use ids::{InvalidId, MAX_ID_LEN, RouteId, StopId, TrailId, TrailheadId};
pub use route::{
    Constraints, HikingSegment, PlannedRoute, RouteParts, RouteSummary, TransitSegment,
    parse_departure,
};
pub use stop::TransitStop;
pub use trail::{Trail, Trailhead};
