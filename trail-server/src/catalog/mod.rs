//! Spatial catalog of reference data.
//!
//! Holds transit stops, trailheads and trails, and answers nearest-neighbour
//! queries over stop and trailhead locations. The catalog is immutable once
//! built, so it can be shared across concurrent planning requests without
//! locking.

mod error;
mod index;
mod loader;
mod sample;

use std::collections::{HashMap, HashSet};

use index::PointIndex;

use crate::domain::{GeoPoint, Trail, TrailId, Trailhead, TrailheadId, TransitStop};

pub use error::CatalogError;
pub use loader::CatalogFile;
pub use sample::bernese_oberland;

/// Read-only reference data with spatial lookup.
#[derive(Debug)]
pub struct Catalog {
    stops: Vec<TransitStop>,
    stop_index: PointIndex,

    trailheads: Vec<Trailhead>,
    trailhead_index: PointIndex,
    trailheads_by_id: HashMap<TrailheadId, usize>,

    trails: HashMap<TrailId, Trail>,
}

impl Catalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The stop closest to `point` by great-circle distance.
    ///
    /// Equidistant stops are broken by lowest stop id.
    pub fn nearest_stop(&self, point: &GeoPoint) -> Result<&TransitStop, CatalogError> {
        self.stop_index
            .nearest_slots(point)
            .into_iter()
            .map(|slot| &self.stops[slot])
            .min_by(|a, b| a.id.cmp(&b.id))
            .ok_or(CatalogError::NoStops)
    }

    /// The trailhead closest to `point` by great-circle distance.
    ///
    /// Equidistant trailheads are broken by lowest trailhead id.
    pub fn nearest_trailhead(&self, point: &GeoPoint) -> Result<&Trailhead, CatalogError> {
        self.trailhead_index
            .nearest_slots(point)
            .into_iter()
            .map(|slot| &self.trailheads[slot])
            .min_by(|a, b| a.id.cmp(&b.id))
            .ok_or(CatalogError::NoTrailheads)
    }

    /// Look up a trailhead from a raw identifier.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id` is malformed
    /// - `TrailheadNotFound` if it is well-formed but unknown
    pub fn trailhead_by_id(&self, id: &str) -> Result<&Trailhead, CatalogError> {
        let id = TrailheadId::parse(id)?;
        self.trailhead(&id)
            .ok_or(CatalogError::TrailheadNotFound(id))
    }

    /// Look up a trailhead by a parsed identifier.
    pub fn trailhead(&self, id: &TrailheadId) -> Option<&Trailhead> {
        self.trailheads_by_id.get(id).map(|&slot| &self.trailheads[slot])
    }

    /// All trails connected to a trailhead, in catalog order.
    pub fn trails_for_trailhead(&self, id: &TrailheadId) -> Result<Vec<&Trail>, CatalogError> {
        let trailhead = self
            .trailhead(id)
            .ok_or_else(|| CatalogError::TrailheadNotFound(id.clone()))?;

        // References were resolved when the catalog was built.
        Ok(trailhead
            .trails
            .iter()
            .filter_map(|trail_id| self.trails.get(trail_id))
            .collect())
    }

    pub fn trailheads(&self) -> &[Trailhead] {
        &self.trailheads
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn trailhead_count(&self) -> usize {
        self.trailheads.len()
    }

    pub fn trail_count(&self) -> usize {
        self.trails.len()
    }
}

/// Builder that validates reference data before producing a `Catalog`.
///
/// Enforces unique ids and names, and resolves every trailhead → trail
/// reference.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    stops: Vec<TransitStop>,
    trailheads: Vec<Trailhead>,
    trails: Vec<Trail>,
}

impl CatalogBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(mut self, stop: TransitStop) -> Self {
        self.stops.push(stop);
        self
    }

    pub fn trailhead(mut self, trailhead: Trailhead) -> Self {
        self.trailheads.push(trailhead);
        self
    }

    pub fn trail(mut self, trail: Trail) -> Self {
        self.trails.push(trail);
        self
    }

    /// Validate and index the collected data.
    ///
    /// # Errors
    ///
    /// - `Conflict` on duplicate stop/trailhead/trail ids or duplicate
    ///   stop/trailhead names
    /// - `DanglingTrail` if a trailhead references a trail that was not added
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut stop_ids = HashSet::with_capacity(self.stops.len());
        let mut stop_names = HashSet::with_capacity(self.stops.len());
        for stop in &self.stops {
            if !stop_ids.insert(&stop.id) {
                return Err(CatalogError::Conflict(format!("duplicate stop id {}", stop.id)));
            }
            if !stop_names.insert(stop.name.as_str()) {
                return Err(CatalogError::Conflict(format!(
                    "duplicate stop name {:?}",
                    stop.name
                )));
            }
        }

        let mut trails = HashMap::with_capacity(self.trails.len());
        for trail in self.trails {
            if trails.contains_key(&trail.id) {
                return Err(CatalogError::Conflict(format!(
                    "duplicate trail id {}",
                    trail.id
                )));
            }
            trails.insert(trail.id.clone(), trail);
        }

        let mut trailheads_by_id = HashMap::with_capacity(self.trailheads.len());
        let mut trailhead_names = HashSet::with_capacity(self.trailheads.len());
        for (slot, trailhead) in self.trailheads.iter().enumerate() {
            if trailheads_by_id.insert(trailhead.id.clone(), slot).is_some() {
                return Err(CatalogError::Conflict(format!(
                    "duplicate trailhead id {}",
                    trailhead.id
                )));
            }
            if !trailhead_names.insert(trailhead.name.as_str()) {
                return Err(CatalogError::Conflict(format!(
                    "duplicate trailhead name {:?}",
                    trailhead.name
                )));
            }
            if let Some(missing) = trailhead.trails.iter().find(|t| !trails.contains_key(*t)) {
                return Err(CatalogError::DanglingTrail {
                    trailhead: trailhead.id.clone(),
                    trail: missing.clone(),
                });
            }
        }

        let stop_index = PointIndex::build(self.stops.iter().map(|s| s.location));
        let trailhead_index = PointIndex::build(self.trailheads.iter().map(|t| t.location));

        Ok(Catalog {
            stops: self.stops,
            stop_index,
            trailheads: self.trailheads,
            trailhead_index,
            trailheads_by_id,
            trails,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn stop(id: &str, name: &str, lat: f64, lon: f64) -> TransitStop {
        TransitStop::new(StopId::parse(id).unwrap(), name, point(lat, lon))
    }

    fn trail(id: &str, mins: u32) -> Trail {
        Trail::new(TrailId::parse(id).unwrap(), format!("Trail {id}"), mins)
    }

    fn trailhead(id: &str, name: &str, lat: f64, lon: f64, trails: &[&str]) -> Trailhead {
        trails.iter().fold(
            Trailhead::new(TrailheadId::parse(id).unwrap(), name, point(lat, lon)),
            |th, t| th.with_trail(TrailId::parse(t).unwrap()),
        )
    }

    fn sample() -> Catalog {
        Catalog::builder()
            .stop(stop("S1", "Valley", 46.00, 7.00))
            .stop(stop("S2", "Ridge", 46.50, 7.50))
            .stop(stop("S3", "Lake", 47.00, 8.00))
            .trail(trail("T1", 45))
            .trail(trail("T2", 120))
            .trailhead(trailhead("TH1", "North", 46.52, 7.52, &["T2", "T1"]))
            .trailhead(trailhead("TH2", "South", 45.90, 6.90, &[]))
            .build()
            .unwrap()
    }

    #[test]
    fn counts() {
        let catalog = sample();
        assert_eq!(catalog.stop_count(), 3);
        assert_eq!(catalog.trailhead_count(), 2);
        assert_eq!(catalog.trail_count(), 2);
    }

    #[test]
    fn nearest_stop_by_distance() {
        let catalog = sample();
        let s = catalog.nearest_stop(&point(46.45, 7.45)).unwrap();
        assert_eq!(s.id.as_str(), "S2");

        let s = catalog.nearest_stop(&point(40.0, 0.0)).unwrap();
        assert_eq!(s.id.as_str(), "S1");
    }

    #[test]
    fn nearest_stop_tie_breaks_on_id() {
        let catalog = Catalog::builder()
            .stop(stop("B", "Platform 2", 46.0, 7.0))
            .stop(stop("A", "Platform 1", 46.0, 7.0))
            .build()
            .unwrap();
        let s = catalog.nearest_stop(&point(46.1, 7.1)).unwrap();
        assert_eq!(s.id.as_str(), "A");
    }

    #[test]
    fn nearest_stop_empty_catalog() {
        let catalog = Catalog::builder().build().unwrap();
        assert!(matches!(
            catalog.nearest_stop(&point(0.0, 0.0)),
            Err(CatalogError::NoStops)
        ));
    }

    #[test]
    fn nearest_trailhead() {
        let catalog = sample();
        let th = catalog.nearest_trailhead(&point(46.0, 7.0)).unwrap();
        assert_eq!(th.id.as_str(), "TH2");
    }

    #[test]
    fn trailhead_by_id_found() {
        let catalog = sample();
        assert_eq!(catalog.trailhead_by_id("TH1").unwrap().name, "North");
    }

    #[test]
    fn trailhead_by_id_not_found() {
        let catalog = sample();
        assert!(matches!(
            catalog.trailhead_by_id("TH404"),
            Err(CatalogError::TrailheadNotFound(_))
        ));
    }

    #[test]
    fn trailhead_by_id_malformed() {
        let catalog = sample();
        assert!(matches!(
            catalog.trailhead_by_id("not valid!"),
            Err(CatalogError::InvalidId(_))
        ));
    }

    #[test]
    fn trails_for_trailhead_in_catalog_order() {
        let catalog = sample();
        let id = TrailheadId::parse("TH1").unwrap();
        let trails = catalog.trails_for_trailhead(&id).unwrap();
        let ids: Vec<&str> = trails.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T2", "T1"]);

        let id = TrailheadId::parse("TH2").unwrap();
        assert!(catalog.trails_for_trailhead(&id).unwrap().is_empty());
    }

    #[test]
    fn duplicate_stop_name_conflicts() {
        let result = Catalog::builder()
            .stop(stop("S1", "Same", 46.0, 7.0))
            .stop(stop("S2", "Same", 47.0, 8.0))
            .build();
        assert!(matches!(result, Err(CatalogError::Conflict(_))));
    }

    #[test]
    fn duplicate_stop_id_conflicts() {
        let result = Catalog::builder()
            .stop(stop("S1", "One", 46.0, 7.0))
            .stop(stop("S1", "Two", 47.0, 8.0))
            .build();
        assert!(matches!(result, Err(CatalogError::Conflict(_))));
    }

    #[test]
    fn duplicate_trailhead_name_conflicts() {
        let result = Catalog::builder()
            .trailhead(trailhead("TH1", "Same", 46.0, 7.0, &[]))
            .trailhead(trailhead("TH2", "Same", 46.1, 7.1, &[]))
            .build();
        assert!(matches!(result, Err(CatalogError::Conflict(_))));
    }

    #[test]
    fn duplicate_trail_id_conflicts() {
        let result = Catalog::builder()
            .trail(trail("T1", 10))
            .trail(trail("T1", 20))
            .build();
        assert!(matches!(result, Err(CatalogError::Conflict(_))));
    }

    #[test]
    fn dangling_trail_reference_rejected() {
        let result = Catalog::builder()
            .trail(trail("T1", 10))
            .trailhead(trailhead("TH1", "North", 46.0, 7.0, &["T1", "T9"]))
            .build();
        match result {
            Err(CatalogError::DanglingTrail { trailhead, trail }) => {
                assert_eq!(trailhead.as_str(), "TH1");
                assert_eq!(trail.as_str(), "T9");
            }
            other => panic!("expected DanglingTrail, got {other:?}"),
        }
    }
}
