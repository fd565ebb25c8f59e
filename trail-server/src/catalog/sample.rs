//! Bundled sample catalog.

use super::{Catalog, CatalogBuilder, CatalogError};
use crate::domain::{
    AccessibilityTags, GeoPoint, StopId, Trail, TrailId, Trailhead, TrailheadId, TransitStop,
};

/// Builder for the bundled data.
///
/// Entries with malformed ids or coordinates are skipped rather than
/// failing, mirroring how hand-maintained tables are usually treated.
#[derive(Default)]
struct SampleBuilder {
    inner: CatalogBuilder,
}

impl SampleBuilder {
    fn stop(mut self, id: &str, name: &str, lat: f64, lon: f64, routes: &[&str]) -> Self {
        if let (Ok(id), Ok(location)) = (StopId::parse(id), GeoPoint::new(lat, lon)) {
            let stop = routes
                .iter()
                .fold(TransitStop::new(id, name, location), |s, r| s.with_route(*r));
            self.inner = self.inner.stop(stop);
        }
        self
    }

    fn trail(mut self, trail: Option<Trail>) -> Self {
        if let Some(trail) = trail {
            self.inner = self.inner.trail(trail);
        }
        self
    }

    fn trailhead(mut self, id: &str, name: &str, lat: f64, lon: f64, trails: &[&str]) -> Self {
        if let (Ok(id), Ok(location)) = (TrailheadId::parse(id), GeoPoint::new(lat, lon)) {
            let th = trails
                .iter()
                .filter_map(|t| TrailId::parse(t).ok())
                .fold(Trailhead::new(id, name, location), Trailhead::with_trail);
            self.inner = self.inner.trailhead(th);
        }
        self
    }

    fn build(self) -> Result<Catalog, CatalogError> {
        self.inner.build()
    }
}

fn trail(id: &str, name: &str, mins: u32, description: &str) -> Option<Trail> {
    TrailId::parse(id)
        .ok()
        .map(|id| Trail::new(id, name, mins).with_description(description))
}

/// A small catalog of Bernese Oberland stops, trailheads and trails.
///
/// Used by the binary when no catalog file is configured.
pub fn bernese_oberland() -> Result<Catalog, CatalogError> {
    SampleBuilder::default()
        .stop("bern", "Bern", 46.9490, 7.4391, &["IC6", "IC8", "S1"])
        .stop("thun", "Thun", 46.7548, 7.6298, &["IC6", "IC8", "S1"])
        .stop("interlaken-ost", "Interlaken Ost", 46.6906, 7.8690, &["IC8", "BOB"])
        .stop("grindelwald", "Grindelwald", 46.6243, 8.0414, &["BOB"])
        .stop("lauterbrunnen", "Lauterbrunnen", 46.5985, 7.9086, &["BOB", "BLM"])
        .stop("muerren", "Mürren", 46.5594, 7.8925, &["BLM"])
        .stop("kandersteg", "Kandersteg", 46.4947, 7.6738, &["RE", "BLS"])
        .trail(
            trail("bachalpsee", "Bachalpsee", 120, "Alpine lake with a mirrored view of the Schreckhorn")
                .map(|t| t.with_scenic(true)),
        )
        .trail(
            trail("first-cliff-walk", "First Cliff Walk", 45, "Short walkway bolted to the cliff face")
                .map(|t| {
                    t.with_accessibility(AccessibilityTags::from_iter(["stroller"]))
                }),
        )
        .trail(trail("faulhorn", "Faulhorn Summit", 240, "Long ridge ascent to a historic summit hotel"))
        .trail(
            trail("staubbach-loop", "Staubbach Falls Loop", 60, "Valley floor loop past a waterfall")
                .map(|t| {
                    t.with_accessibility(AccessibilityTags::from_iter(["wheelchair", "stroller"]))
                }),
        )
        .trail(trail("truemmelbach", "Trümmelbach Gorge", 90, "Glacier waterfalls inside the mountain"))
        .trail(trail("oeschinensee", "Oeschinensee", 75, "Turquoise lake beneath the Blüemlisalp"))
        .trail(trail("bluemlisalp-hut", "Blüemlisalp Hut", 300, "Steep climb to a high alpine hut"))
        .trailhead(
            "grindelwald-first",
            "Grindelwald First",
            46.6594,
            8.0547,
            &["bachalpsee", "first-cliff-walk", "faulhorn"],
        )
        .trailhead(
            "lauterbrunnen-valley",
            "Lauterbrunnen Valley",
            46.5936,
            7.9091,
            &["staubbach-loop", "truemmelbach"],
        )
        .trailhead(
            "kandersteg-village",
            "Kandersteg Village",
            46.4924,
            7.6800,
            &["oeschinensee", "bluemlisalp-hut"],
        )
        .build()
}
