//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::{PlannedRoute, RouteId, Trailhead};
use crate::planner::{ConstraintUpdate, PlanRequest};

/// Request to plan a new route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRouteRequest {
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub destination_trailhead_id: String,
    pub max_travel_minutes: i64,

    /// RFC 3339 timestamp
    #[serde(default)]
    pub preferred_departure: Option<String>,

    /// Required accessibility tags
    #[serde(default)]
    pub accessibility: Vec<String>,
}

impl From<PlanRouteRequest> for PlanRequest {
    fn from(req: PlanRouteRequest) -> Self {
        PlanRequest {
            origin_lat: req.origin_lat,
            origin_lon: req.origin_lon,
            destination_trailhead_id: req.destination_trailhead_id,
            max_travel_minutes: req.max_travel_minutes,
            preferred_departure: req.preferred_departure,
            accessibility: req.accessibility,
        }
    }
}

/// Request for an alternative route.
#[derive(Debug, Deserialize)]
pub struct AlternativeRequest {
    /// One of `faster`, `shorter`, `scenic`
    pub criterion: String,
}

/// Request to re-plan under new constraints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConstraintsRequest {
    pub max_travel_minutes: i64,

    #[serde(default)]
    pub preferred_departure: Option<String>,

    /// Replaces the route's tags when present
    #[serde(default)]
    pub accessibility: Option<Vec<String>>,
}

impl From<UpdateConstraintsRequest> for ConstraintUpdate {
    fn from(req: UpdateConstraintsRequest) -> Self {
        ConstraintUpdate {
            max_travel_minutes: req.max_travel_minutes,
            preferred_departure: req.preferred_departure,
            accessibility: req.accessibility,
        }
    }
}

/// Query for listing routes to a trailhead.
#[derive(Debug, Deserialize)]
pub struct RoutesQuery {
    /// Defaults to `default`
    pub criterion: Option<String>,
}

/// Query for the nearest trailhead.
#[derive(Debug, Deserialize)]
pub struct NearestQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Response carrying a route id, or `null` when no route was produced.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedRouteIdResponse {
    pub planned_route_id: Option<RouteId>,
}

/// Route ids for a trailhead and criterion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteListResponse {
    pub trailhead_id: String,
    pub criterion: String,
    pub planned_route_ids: Vec<RouteId>,
}

#[derive(Debug, Serialize)]
pub struct PointView {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitView {
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub minutes: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HikingView {
    pub trail_id: String,
    pub minutes: u32,
}

/// Full view of a planned route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteView {
    pub id: RouteId,
    pub origin: PointView,
    pub destination_trailhead_id: String,
    pub criterion: String,
    pub transit: Vec<TransitView>,
    pub hiking: Vec<HikingView>,
    pub transit_minutes: u32,
    pub hiking_minutes: u32,
    pub total_minutes: u32,
    pub max_travel_minutes: u32,
    pub preferred_departure: Option<String>,
    pub estimated_return: Option<String>,
    pub accessibility: Vec<String>,
    pub derived_from: Option<RouteId>,
    pub created_at: String,
}

impl RouteView {
    pub fn from_route(route: &PlannedRoute) -> Self {
        let constraints = route.constraints();
        Self {
            id: route.id(),
            origin: PointView {
                lat: route.origin().lat(),
                lon: route.origin().lon(),
            },
            destination_trailhead_id: route.destination().to_string(),
            criterion: route.criterion().to_string(),
            transit: route
                .transit()
                .iter()
                .map(|s| TransitView {
                    from_stop_id: s.from.to_string(),
                    to_stop_id: s.to.to_string(),
                    minutes: s.minutes,
                })
                .collect(),
            hiking: route
                .hiking()
                .iter()
                .map(|h| HikingView {
                    trail_id: h.trail.to_string(),
                    minutes: h.minutes,
                })
                .collect(),
            transit_minutes: route.transit_mins(),
            hiking_minutes: route.hiking_mins(),
            total_minutes: route.total_mins(),
            max_travel_minutes: constraints.max_travel_mins(),
            preferred_departure: constraints.preferred_departure().map(|d| d.to_rfc3339()),
            estimated_return: route.estimated_return().map(|d| d.to_rfc3339()),
            accessibility: constraints.accessibility().iter().map(str::to_string).collect(),
            derived_from: route.derived_from(),
            created_at: route.created_at().to_rfc3339(),
        }
    }
}

/// A trailhead and its trails.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailheadView {
    pub id: String,
    pub name: String,
    pub location: PointView,
    pub trail_ids: Vec<String>,
}

impl TrailheadView {
    pub fn from_trailhead(trailhead: &Trailhead) -> Self {
        Self {
            id: trailhead.id.to_string(),
            name: trailhead.name.clone(),
            location: PointView {
                lat: trailhead.location.lat(),
                lon: trailhead.location.lon(),
            },
            trail_ids: trailhead.trails.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AccessibilityTags, Constraints, Criterion, GeoPoint, HikingSegment, RouteParts, StopId,
        TrailId, TrailheadId, TransitSegment, parse_departure,
    };

    fn route() -> PlannedRoute {
        let a = StopId::parse("A").unwrap();
        let b = StopId::parse("B").unwrap();
        let departure = parse_departure("2026-06-01T08:00:00+02:00").unwrap();
        PlannedRoute::new(
            RouteId::generate(),
            RouteParts {
                origin: GeoPoint::new(46.0, 7.0).unwrap(),
                destination: TrailheadId::parse("TH1").unwrap(),
                transit: vec![
                    TransitSegment::new(a.clone(), b.clone(), 50),
                    TransitSegment::new(b, a, 50),
                ],
                hiking: vec![HikingSegment::new(TrailId::parse("T120").unwrap(), 120)],
                criterion: Criterion::Scenic,
                constraints: Constraints::new(
                    300,
                    Some(departure),
                    AccessibilityTags::from_iter(["stroller"]),
                )
                .unwrap(),
                derived_from: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn route_view_from_route() {
        let route = route();
        let view = RouteView::from_route(&route);

        assert_eq!(view.id, route.id());
        assert_eq!(view.destination_trailhead_id, "TH1");
        assert_eq!(view.criterion, "scenic");
        assert_eq!(view.transit.len(), 2);
        assert_eq!(view.transit[0].from_stop_id, "A");
        assert_eq!(view.hiking[0].trail_id, "T120");
        assert_eq!(view.total_minutes, 220);
        assert_eq!(view.max_travel_minutes, 300);
        assert_eq!(view.estimated_return.as_deref(), Some("2026-06-01T11:40:00+02:00"));
        assert_eq!(view.accessibility, vec!["stroller"]);
    }

    #[test]
    fn route_view_serializes_camel_case() {
        let json = serde_json::to_value(RouteView::from_route(&route())).unwrap();
        assert_eq!(json["totalMinutes"], 220);
        assert_eq!(json["destinationTrailheadId"], "TH1");
        assert_eq!(json["hiking"][0]["trailId"], "T120");
        assert!(json["derivedFrom"].is_null());
    }

    #[test]
    fn plan_request_defaults_optional_fields() {
        let req: PlanRouteRequest = serde_json::from_str(
            r#"{"originLat":46.0,"originLon":7.0,"destinationTrailheadId":"TH1","maxTravelMinutes":300}"#,
        )
        .unwrap();
        let req = PlanRequest::from(req);
        assert_eq!(req.preferred_departure, None);
        assert!(req.accessibility.is_empty());
    }

    #[test]
    fn null_route_id_serializes_as_null() {
        let json = serde_json::to_string(&PlannedRouteIdResponse {
            planned_route_id: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"plannedRouteId":null}"#);
    }
}
