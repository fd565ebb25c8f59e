//! Trail and trailhead reference data.

use serde::{Deserialize, Serialize};

use super::{AccessibilityTags, GeoPoint, TrailId, TrailheadId};

/// A hiking segment.
///
/// Duration, not distance, is the planning input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub id: TrailId,
    pub name: String,
    /// Estimated hiking time in minutes.
    pub duration_mins: u32,
    #[serde(default)]
    pub description: Option<String>,
    /// Curated scenic signal, when the data source provides one.
    #[serde(default)]
    pub scenic: Option<bool>,
    #[serde(default)]
    pub accessibility: AccessibilityTags,
}

impl Trail {
    /// Creates a trail with no description, scenic signal or accessibility tags.
    pub fn new(id: TrailId, name: impl Into<String>, duration_mins: u32) -> Self {
        Self {
            id,
            name: name.into(),
            duration_mins,
            description: None,
            scenic: None,
            accessibility: AccessibilityTags::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_scenic(mut self, scenic: bool) -> Self {
        self.scenic = Some(scenic);
        self
    }

    pub fn with_accessibility(mut self, tags: AccessibilityTags) -> Self {
        self.accessibility = tags;
        self
    }
}

/// A named point where hiking access begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailhead {
    pub id: TrailheadId,
    /// Unique within a catalog.
    pub name: String,
    pub location: GeoPoint,
    /// Trails reachable from here, in catalog order.
    #[serde(default)]
    pub trails: Vec<TrailId>,
}

impl Trailhead {
    /// Creates a trailhead with no connected trails.
    pub fn new(id: TrailheadId, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            trails: Vec::new(),
        }
    }

    /// Connects a trail to this trailhead.
    pub fn with_trail(mut self, trail: TrailId) -> Self {
        self.trails.push(trail);
        self
    }
}
