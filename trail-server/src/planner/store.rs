//! Append-only store of planned routes.
//!
//! Routes are inserted once and never updated, so concurrent readers and
//! writers never race on a shared record.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::{Criterion, PlannedRoute, RouteId, TrailheadId};

use super::error::PlanError;

/// Secondary index key: destination trailhead and criterion.
type DestinationKey = (TrailheadId, Criterion);

/// Thread-safe route store with a `(destination, criterion)` index.
#[derive(Debug, Default)]
pub struct RouteStore {
    routes: DashMap<RouteId, Arc<PlannedRoute>>,
    by_destination: DashMap<DestinationKey, Vec<RouteId>>,
}

impl RouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route under its own id.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if a route with the same id already exists; the
    /// existing record is left untouched.
    pub fn insert(&self, route: PlannedRoute) -> Result<Arc<PlannedRoute>, PlanError> {
        let id = route.id();
        let key = (route.destination().clone(), route.criterion());

        let stored = match self.routes.entry(id) {
            Entry::Occupied(_) => {
                return Err(PlanError::Conflict(format!("planned route {id} already exists")));
            }
            Entry::Vacant(slot) => {
                let route = Arc::new(route);
                slot.insert(route.clone());
                route
            }
        };

        self.by_destination.entry(key).or_default().push(id);
        Ok(stored)
    }

    pub fn get(&self, id: &RouteId) -> Option<Arc<PlannedRoute>> {
        self.routes.get(id).map(|r| r.value().clone())
    }

    /// Ids of routes to `trailhead` planned under `criterion`, oldest first.
    pub fn routes_for(&self, trailhead: &TrailheadId, criterion: Criterion) -> Vec<RouteId> {
        self.by_destination
            .get(&(trailhead.clone(), criterion))
            .map(|ids| ids.value().clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AccessibilityTags, Constraints, GeoPoint, HikingSegment, RouteParts, StopId, TrailId,
        TransitSegment,
    };

    fn route(id: RouteId, trailhead: &str, criterion: Criterion) -> PlannedRoute {
        let stop = StopId::parse("S1").unwrap();
        PlannedRoute::new(
            id,
            RouteParts {
                origin: GeoPoint::new(46.0, 7.0).unwrap(),
                destination: TrailheadId::parse(trailhead).unwrap(),
                transit: vec![TransitSegment::new(stop.clone(), stop, 10)],
                hiking: vec![HikingSegment::new(TrailId::parse("T1").unwrap(), 30)],
                criterion,
                constraints: Constraints::new(100, None, AccessibilityTags::new()).unwrap(),
                derived_from: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn insert_and_get() {
        let store = RouteStore::new();
        assert!(store.is_empty());

        let id = RouteId::generate();
        let stored = store.insert(route(id, "TH1", Criterion::Default)).unwrap();
        assert_eq!(stored.id(), id);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().id(), id);
        assert!(store.get(&RouteId::generate()).is_none());
    }

    #[test]
    fn duplicate_id_conflicts_and_keeps_original() {
        let store = RouteStore::new();
        let id = RouteId::generate();
        store.insert(route(id, "TH1", Criterion::Default)).unwrap();

        let err = store.insert(route(id, "TH2", Criterion::Scenic)).unwrap_err();
        assert!(matches!(err, PlanError::Conflict(_)));
        assert_eq!(store.get(&id).unwrap().destination().as_str(), "TH1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn secondary_index_by_destination_and_criterion() {
        let store = RouteStore::new();
        let th1 = TrailheadId::parse("TH1").unwrap();

        let a = RouteId::generate();
        let b = RouteId::generate();
        let c = RouteId::generate();
        store.insert(route(a, "TH1", Criterion::Default)).unwrap();
        store.insert(route(b, "TH1", Criterion::Scenic)).unwrap();
        store.insert(route(c, "TH1", Criterion::Default)).unwrap();

        assert_eq!(store.routes_for(&th1, Criterion::Default), vec![a, c]);
        assert_eq!(store.routes_for(&th1, Criterion::Scenic), vec![b]);
        assert!(store.routes_for(&th1, Criterion::Shorter).is_empty());
    }

    #[test]
    fn concurrent_inserts() {
        let store = RouteStore::new();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..25 {
                        store
                            .insert(route(RouteId::generate(), "TH1", Criterion::Default))
                            .unwrap();
                    }
                });
            }
        });

        assert_eq!(store.len(), 200);
        let th1 = TrailheadId::parse("TH1").unwrap();
        assert_eq!(store.routes_for(&th1, Criterion::Default).len(), 200);
    }
}
