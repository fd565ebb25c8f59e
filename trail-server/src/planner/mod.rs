//! Transit-to-trail route planner.
//!
//! Answers: "Starting here, with this much time, which trail near that
//! trailhead can I get to, hike, and get back from?"
//!
//! Transit time is a distance heuristic between the nearest stops; the
//! remaining budget is spent on a trail chosen by the route's criterion.
//! Planned routes are immutable and kept in an append-only store.

mod assembler;
mod config;
mod error;
mod estimator;
mod selector;
mod service;
mod store;


pub use assembler::assemble;
pub use config::{InvalidPlannerConfig, MIN_SPEED_KMH, PlannerConfig, SpeedProfile};
pub use error::PlanError;
pub use estimator::TransitEstimator;
pub use selector::{KeywordClassifier, ScenicClassifier, SelectionContext, select, speed_profile};
pub use service::{ConstraintUpdate, PlanRequest, TrailPlanner};
pub use store::RouteStore;
