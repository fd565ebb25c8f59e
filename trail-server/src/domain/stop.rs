//! Transit stop reference data.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{GeoPoint, StopId};

/// A named point of public-transit access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitStop {
    pub id: StopId,
    /// Unique within a catalog.
    pub name: String,
    pub location: GeoPoint,
    /// Labels of the transit routes calling here.
    #[serde(default)]
    pub routes: BTreeSet<String>,
}

impl TransitStop {
    /// Creates a stop with no route labels.
    pub fn new(id: StopId, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            routes: BTreeSet::new(),
        }
    }

    /// Adds a served route label.
    pub fn with_route(mut self, label: impl Into<String>) -> Self {
        self.routes.insert(label.into());
        self
    }

    /// Returns true if this stop is on the given route.
    pub fn serves(&self, label: &str) -> bool {
        self.routes.contains(label)
    }
}
