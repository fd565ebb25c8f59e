//! Planned route types.
//!
//! A `PlannedRoute` is the output of a planning operation: transit out to a
//! trailhead, one hiking segment, and transit back. Routes are immutable;
//! alternatives and re-plans produce new routes.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::Serialize;

use super::{
    AccessibilityTags, Criterion, DomainError, GeoPoint, RouteId, StopId, TrailId, TrailheadId,
};

/// A single transit hop between two stops.
///
/// `minutes` covers the traveler's whole leg, door to stop: the outbound leg
/// is estimated from the route's origin point rather than from `from`'s
/// location, and the return leg mirrors it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitSegment {
    pub from: StopId,
    pub to: StopId,
    pub minutes: u32,
}

impl TransitSegment {
    pub fn new(from: StopId, to: StopId, minutes: u32) -> Self {
        Self { from, to, minutes }
    }
}

/// Time spent on a single trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HikingSegment {
    pub trail: TrailId,
    pub minutes: u32,
}

impl HikingSegment {
    pub fn new(trail: TrailId, minutes: u32) -> Self {
        Self { trail, minutes }
    }
}

/// Parse a preferred departure timestamp (RFC 3339).
///
/// # Examples
///
/// ```
/// use trail_server::domain::parse_departure;
///
/// assert!(parse_departure("2024-06-01T08:30:00+02:00").is_ok());
/// assert!(parse_departure("08:30").is_err());
/// ```
pub fn parse_departure(s: &str) -> Result<DateTime<FixedOffset>, DomainError> {
    DateTime::parse_from_rfc3339(s).map_err(|_| DomainError::InvalidDeparture(s.to_string()))
}

/// The constraint snapshot a route was planned under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    max_travel_mins: u32,
    preferred_departure: Option<DateTime<FixedOffset>>,
    accessibility: AccessibilityTags,
}

impl Constraints {
    /// Creates a constraint snapshot.
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveBudget` if `max_travel_mins` is zero.
    pub fn new(
        max_travel_mins: u32,
        preferred_departure: Option<DateTime<FixedOffset>>,
        accessibility: AccessibilityTags,
    ) -> Result<Self, DomainError> {
        if max_travel_mins == 0 {
            return Err(DomainError::NonPositiveBudget);
        }
        Ok(Self {
            max_travel_mins,
            preferred_departure,
            accessibility,
        })
    }

    pub fn max_travel_mins(&self) -> u32 {
        self.max_travel_mins
    }

    pub fn preferred_departure(&self) -> Option<DateTime<FixedOffset>> {
        self.preferred_departure
    }

    pub fn accessibility(&self) -> &AccessibilityTags {
        &self.accessibility
    }
}

/// Everything needed to build a route, before totals are derived.
#[derive(Debug, Clone)]
pub struct RouteParts {
    pub origin: GeoPoint,
    pub destination: TrailheadId,
    pub transit: Vec<TransitSegment>,
    pub hiking: Vec<HikingSegment>,
    pub criterion: Criterion,
    pub constraints: Constraints,
    /// The route this one was derived from, for alternatives and re-plans.
    pub derived_from: Option<RouteId>,
}

/// An immutable journey plan.
///
/// # Invariants
///
/// - `total_mins == transit_mins + hiking_mins`
/// - `total_mins <= constraints.max_travel_mins()`
/// - `hiking_mins > 0`
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRoute {
    id: RouteId,
    origin: GeoPoint,
    destination: TrailheadId,
    transit: Vec<TransitSegment>,
    hiking: Vec<HikingSegment>,
    transit_mins: u32,
    hiking_mins: u32,
    total_mins: u32,
    criterion: Criterion,
    constraints: Constraints,
    derived_from: Option<RouteId>,
    created_at: DateTime<Utc>,
}

impl PlannedRoute {
    /// Derives totals from the segments and validates the invariants.
    ///
    /// # Errors
    ///
    /// - `NoHiking` if the hiking segments sum to zero minutes
    /// - `ExceedsBudget` if the total is over the constraint budget
    /// - `DurationOverflow` if the segment minutes do not fit in a `u32`
    pub fn new(id: RouteId, parts: RouteParts) -> Result<Self, DomainError> {
        let (Some(transit_mins), Some(hiking_mins)) = (
            checked_total(parts.transit.iter().map(|s| s.minutes)),
            checked_total(parts.hiking.iter().map(|s| s.minutes)),
        ) else {
            return Err(DomainError::DurationOverflow);
        };
        let total_mins = transit_mins
            .checked_add(hiking_mins)
            .ok_or(DomainError::DurationOverflow)?;

        if hiking_mins == 0 {
            return Err(DomainError::NoHiking);
        }

        let max_mins = parts.constraints.max_travel_mins();
        if total_mins > max_mins {
            return Err(DomainError::ExceedsBudget {
                total_mins,
                max_mins,
            });
        }

        Ok(Self {
            id,
            origin: parts.origin,
            destination: parts.destination,
            transit: parts.transit,
            hiking: parts.hiking,
            transit_mins,
            hiking_mins,
            total_mins,
            criterion: parts.criterion,
            constraints: parts.constraints,
            derived_from: parts.derived_from,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    pub fn destination(&self) -> &TrailheadId {
        &self.destination
    }

    pub fn transit(&self) -> &[TransitSegment] {
        &self.transit
    }

    pub fn hiking(&self) -> &[HikingSegment] {
        &self.hiking
    }

    pub fn transit_mins(&self) -> u32 {
        self.transit_mins
    }

    pub fn hiking_mins(&self) -> u32 {
        self.hiking_mins
    }

    pub fn total_mins(&self) -> u32 {
        self.total_mins
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn derived_from(&self) -> Option<RouteId> {
        self.derived_from
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of transit and hiking segments combined.
    pub fn segment_count(&self) -> usize {
        self.transit.len() + self.hiking.len()
    }

    /// The trails hiked, in order.
    pub fn trail_ids(&self) -> impl Iterator<Item = &TrailId> {
        self.hiking.iter().map(|h| &h.trail)
    }

    /// When the traveler gets back, if a departure time was given.
    pub fn estimated_return(&self) -> Option<DateTime<FixedOffset>> {
        self.constraints
            .preferred_departure()
            .map(|dep| dep + Duration::minutes(i64::from(self.total_mins)))
    }

    /// Returns the read-only summary of this route.
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            id: self.id,
            total_minutes: self.total_mins,
            transit_minutes: self.transit_mins,
            hiking_minutes: self.hiking_mins,
            segments_count: self.segment_count(),
        }
    }
}

fn checked_total(mut minutes: impl Iterator<Item = u32>) -> Option<u32> {
    minutes.try_fold(0u32, u32::checked_add)
}

/// Totals for a planned route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub id: RouteId,
    pub total_minutes: u32,
    pub transit_minutes: u32,
    pub hiking_minutes: u32,
    pub segments_count: usize,
}
