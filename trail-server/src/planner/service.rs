//! Planning operations: plan, alternatives, re-plan, and reads.
//!
//! Every operation runs the same pipeline:
//!
//! `Received → TransitResolved → BudgetComputed → TrailSelected | Infeasible
//!  → Assembled | Rejected`
//!
//! Initial planning reports infeasibility as a validation error. Re-planning
//! and alternative generation report it as an empty result, since changing
//! constraints legitimately rules routes out.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::{
    AccessibilityTags, Constraints, Criterion, GeoPoint, HikingSegment, PlannedRoute, RouteId,
    RouteParts, RouteSummary, Trail, Trailhead, TrailheadId, TransitSegment, parse_departure,
};

use super::assembler::assemble;
use super::config::PlannerConfig;
use super::error::PlanError;
use super::estimator::TransitEstimator;
use super::selector::{ScenicClassifier, SelectionContext, select, speed_profile};
use super::store::RouteStore;

/// Request to plan a new route, in primitive form.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub destination_trailhead_id: String,
    pub max_travel_minutes: i64,
    /// RFC 3339 timestamp.
    pub preferred_departure: Option<String>,
    pub accessibility: Vec<String>,
}

impl PlanRequest {
    /// A request with no departure preference or accessibility needs.
    pub fn new(
        origin_lat: f64,
        origin_lon: f64,
        destination_trailhead_id: impl Into<String>,
        max_travel_minutes: i64,
    ) -> Self {
        Self {
            origin_lat,
            origin_lon,
            destination_trailhead_id: destination_trailhead_id.into(),
            max_travel_minutes,
            preferred_departure: None,
            accessibility: Vec::new(),
        }
    }
}

/// New constraints for re-planning an existing route.
///
/// Fields left as `None` keep the value from the referenced route.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstraintUpdate {
    pub max_travel_minutes: i64,
    /// RFC 3339 timestamp.
    pub preferred_departure: Option<String>,
    pub accessibility: Option<Vec<String>>,
}

impl ConstraintUpdate {
    /// An update that only changes the budget.
    pub fn budget(max_travel_minutes: i64) -> Self {
        Self {
            max_travel_minutes,
            ..Self::default()
        }
    }
}

/// Pipeline states, for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlanState {
    Received,
    TransitResolved,
    BudgetComputed,
    TrailSelected,
    Infeasible,
    Assembled,
    Rejected,
}

impl fmt::Display for PlanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanState::Received => "received",
            PlanState::TransitResolved => "transit_resolved",
            PlanState::BudgetComputed => "budget_computed",
            PlanState::TrailSelected => "trail_selected",
            PlanState::Infeasible => "infeasible",
            PlanState::Assembled => "assembled",
            PlanState::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Inputs to one pipeline run.
struct PipelineRun<'a> {
    origin: GeoPoint,
    trailhead: &'a Trailhead,
    constraints: Constraints,
    criterion: Criterion,
    /// Route being compared against or re-planned.
    reference: Option<&'a PlannedRoute>,
}

/// Outcome of a pipeline run before assembly.
enum Resolution {
    Selected(RouteParts),
    Infeasible(String),
}

/// The transit-to-trail route planner.
///
/// Cheap to share: the catalog is read-only and the route store is
/// append-only, so every operation takes `&self` and may run concurrently.
pub struct TrailPlanner {
    catalog: Arc<Catalog>,
    store: RouteStore,
    estimator: TransitEstimator,
    classifier: Option<Arc<dyn ScenicClassifier>>,
}

impl TrailPlanner {
    /// Create a planner over a catalog with no scenic classifier.
    pub fn new(catalog: Arc<Catalog>, config: PlannerConfig) -> Self {
        Self {
            catalog,
            store: RouteStore::new(),
            estimator: TransitEstimator::new(config),
            classifier: None,
        }
    }

    /// Install a scenic classifier for the `scenic` criterion.
    pub fn with_classifier(mut self, classifier: Arc<dyn ScenicClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &RouteStore {
        &self.store
    }

    /// Plan a route from an origin to a trailhead within a time budget.
    ///
    /// # Errors
    ///
    /// - `Validation` for bad coordinates, non-positive budget, malformed
    ///   trailhead id, bad departure timestamp, or no time left for hiking
    /// - `NotFound` if the trailhead is unknown or there are no stops
    pub fn plan_route(&self, request: &PlanRequest) -> Result<RouteId, PlanError> {
        let origin = GeoPoint::new(request.origin_lat, request.origin_lon)?;
        let constraints = build_constraints(
            request.max_travel_minutes,
            request.preferred_departure.as_deref(),
            AccessibilityTags::from_iter(&request.accessibility),
        )?;
        let trailhead = self.catalog.trailhead_by_id(&request.destination_trailhead_id)?;

        let run = PipelineRun {
            origin,
            trailhead,
            constraints,
            criterion: Criterion::Default,
            reference: None,
        };

        match self.resolve(&run)? {
            Resolution::Selected(parts) => self.commit(parts),
            Resolution::Infeasible(reason) => Err(PlanError::Validation(reason)),
        }
    }

    /// Re-plan an existing route under a different criterion.
    ///
    /// Origin, destination and constraints are taken from the referenced
    /// route. Returns `Ok(None)` when no distinct alternative exists.
    ///
    /// # Errors
    ///
    /// - `Validation` for a malformed route id or unsupported criterion
    /// - `NotFound` if the route id is unknown
    pub fn get_alternative_routes(
        &self,
        route_id: &str,
        criterion: &str,
    ) -> Result<Option<RouteId>, PlanError> {
        let id = RouteId::parse(route_id)?;
        let criterion = Criterion::parse_alternative(criterion)?;
        let reference = self.load(&id)?;
        let trailhead = self.reference_trailhead(&reference)?;

        let run = PipelineRun {
            origin: reference.origin(),
            trailhead,
            constraints: reference.constraints().clone(),
            criterion,
            reference: Some(&*reference),
        };

        match self.resolve(&run)? {
            Resolution::Selected(parts) if is_distinct(&parts, &reference) => {
                self.commit(parts).map(Some)
            }
            Resolution::Selected(_) => {
                debug!(route_id = %id, %criterion, "alternative identical to reference");
                Ok(None)
            }
            Resolution::Infeasible(reason) => {
                debug!(route_id = %id, %criterion, %reason, "no alternative");
                Ok(None)
            }
        }
    }

    /// Re-plan an existing route under new constraints.
    ///
    /// Returns `Ok(None)` if the new budget leaves no room for any trail
    /// after transit overhead.
    ///
    /// # Errors
    ///
    /// - `Validation` for a malformed route id, non-positive budget or bad
    ///   departure timestamp
    /// - `NotFound` if the route id is unknown
    pub fn update_route_constraints(
        &self,
        route_id: &str,
        update: &ConstraintUpdate,
    ) -> Result<Option<RouteId>, PlanError> {
        let id = RouteId::parse(route_id)?;
        let reference = self.load(&id)?;
        let previous = reference.constraints();

        let departure = match update.preferred_departure.as_deref() {
            Some(s) => Some(parse_departure(s)?),
            None => previous.preferred_departure(),
        };
        let accessibility = match &update.accessibility {
            Some(tags) => AccessibilityTags::from_iter(tags),
            None => previous.accessibility().clone(),
        };
        let max = positive_minutes(update.max_travel_minutes)?;
        let constraints = Constraints::new(max, departure, accessibility)?;

        let trailhead = self.reference_trailhead(&reference)?;

        // "shorter" is relative to a comparison route that a new budget
        // invalidates; re-plan it with the default policy instead.
        let criterion = match reference.criterion() {
            Criterion::Shorter => Criterion::Default,
            other => other,
        };

        let run = PipelineRun {
            origin: reference.origin(),
            trailhead,
            constraints,
            criterion,
            reference: Some(&*reference),
        };

        match self.resolve(&run)? {
            Resolution::Selected(parts) => self.commit(parts).map(Some),
            Resolution::Infeasible(reason) => {
                debug!(route_id = %id, %reason, "re-plan infeasible");
                Ok(None)
            }
        }
    }

    /// Totals for a planned route.
    pub fn get_planned_route_summary(&self, route_id: &str) -> Result<RouteSummary, PlanError> {
        Ok(self.get_planned_route(route_id)?.summary())
    }

    /// The full planned route record.
    pub fn get_planned_route(&self, route_id: &str) -> Result<Arc<PlannedRoute>, PlanError> {
        let id = RouteId::parse(route_id)?;
        self.load(&id)
    }

    /// Routes planned to a trailhead under a criterion, oldest first.
    pub fn routes_for(&self, trailhead_id: &str, criterion: &str) -> Result<Vec<RouteId>, PlanError> {
        let criterion: Criterion = criterion.parse()?;
        let trailhead = self.catalog.trailhead_by_id(trailhead_id)?;
        Ok(self.store.routes_for(&trailhead.id, criterion))
    }

    /// The trailhead nearest to a point.
    pub fn nearest_trailhead(&self, lat: f64, lon: f64) -> Result<&Trailhead, PlanError> {
        let point = GeoPoint::new(lat, lon)?;
        Ok(self.catalog.nearest_trailhead(&point)?)
    }

    fn load(&self, id: &RouteId) -> Result<Arc<PlannedRoute>, PlanError> {
        self.store
            .get(id)
            .ok_or_else(|| PlanError::NotFound(format!("planned route {id} not found")))
    }

    fn reference_trailhead(&self, route: &PlannedRoute) -> Result<&Trailhead, PlanError> {
        self.catalog
            .trailhead(route.destination())
            .ok_or_else(|| missing_trailhead(route.destination()))
    }

    fn commit(&self, parts: RouteParts) -> Result<RouteId, PlanError> {
        match assemble(&self.store, parts) {
            Ok(route) => {
                debug!(state = %PlanState::Assembled, route_id = %route.id());
                Ok(route.id())
            }
            Err(e) => {
                debug!(state = %PlanState::Rejected, error = %e);
                Err(e)
            }
        }
    }

    /// Run the pipeline up to (not including) assembly.
    fn resolve(&self, run: &PipelineRun<'_>) -> Result<Resolution, PlanError> {
        let trailhead = run.trailhead;
        debug!(
            state = %PlanState::Received,
            trailhead = %trailhead.id,
            criterion = %run.criterion,
            max_mins = run.constraints.max_travel_mins(),
        );

        let profile = speed_profile(run.criterion);
        let origin_stop = self.catalog.nearest_stop(&run.origin)?;
        let trailhead_stop = self.catalog.nearest_stop(&trailhead.location)?;
        // Legs run door-to-stop: from the origin itself to the trailhead's
        // stop, and back.
        let one_way = self
            .estimator
            .estimate_minutes(&run.origin, &trailhead_stop.location, profile);
        let overhead = self
            .estimator
            .estimate_round_trip(&run.origin, &trailhead_stop.location, profile);
        debug!(
            state = %PlanState::TransitResolved,
            from = %origin_stop.id,
            to = %trailhead_stop.id,
            overhead_mins = overhead,
        );

        let max = run.constraints.max_travel_mins();
        let Some(budget_mins) = max.checked_sub(overhead).filter(|b| *b > 0) else {
            debug!(state = %PlanState::Infeasible, overhead_mins = overhead, max_mins = max);
            return Ok(Resolution::Infeasible(format!(
                "insufficient time for hiking: transit takes {overhead} of {max} minutes"
            )));
        };
        debug!(state = %PlanState::BudgetComputed, budget_mins);

        let transit = vec![
            TransitSegment::new(origin_stop.id.clone(), trailhead_stop.id.clone(), one_way),
            TransitSegment::new(trailhead_stop.id.clone(), origin_stop.id.clone(), one_way),
        ];

        let trails = self.catalog.trails_for_trailhead(&trailhead.id)?;
        let required = run.constraints.accessibility();
        let candidates: Vec<&Trail> = trails
            .into_iter()
            .filter(|t| t.accessibility.satisfies(required))
            .collect();

        let ctx = SelectionContext {
            budget_mins,
            reference_hiking_mins: run.reference.map(PlannedRoute::hiking_mins),
            classifier: self.classifier.as_deref(),
        };
        let Some(trail) = select(run.criterion, &candidates, &ctx) else {
            debug!(state = %PlanState::Infeasible, budget_mins, candidates = candidates.len());
            return Ok(Resolution::Infeasible(format!(
                "no trail at {} fits the remaining {budget_mins} minutes",
                trailhead.id
            )));
        };
        debug!(state = %PlanState::TrailSelected, trail = %trail.id, mins = trail.duration_mins);

        Ok(Resolution::Selected(RouteParts {
            origin: run.origin,
            destination: trailhead.id.clone(),
            transit,
            hiking: vec![HikingSegment::new(trail.id.clone(), trail.duration_mins)],
            criterion: run.criterion,
            constraints: run.constraints.clone(),
            derived_from: run.reference.map(PlannedRoute::id),
        }))
    }
}

fn positive_minutes(minutes: i64) -> Result<u32, PlanError> {
    if minutes <= 0 {
        return Err(PlanError::Validation(format!(
            "max travel minutes must be positive, got {minutes}"
        )));
    }
    u32::try_from(minutes)
        .map_err(|_| PlanError::Validation(format!("max travel minutes too large: {minutes}")))
}

fn build_constraints(
    max_travel_minutes: i64,
    preferred_departure: Option<&str>,
    accessibility: AccessibilityTags,
) -> Result<Constraints, PlanError> {
    let max = positive_minutes(max_travel_minutes)?;
    let departure = preferred_departure.map(parse_departure).transpose()?;
    Ok(Constraints::new(max, departure, accessibility)?)
}

fn missing_trailhead(id: &TrailheadId) -> PlanError {
    PlanError::Integrity(format!("trailhead {id} of a stored route is not in the catalog"))
}

/// An alternative is distinct if it hikes different trails or spends a
/// different amount of time in transit.
fn is_distinct(parts: &RouteParts, reference: &PlannedRoute) -> bool {
    let transit_mins: u32 = parts.transit.iter().map(|s| s.minutes).sum();
    let same_trails = parts.hiking.iter().map(|h| &h.trail).eq(reference.trail_ids());
    !same_trails || transit_mins != reference.transit_mins()
}
