//! Distance-based transit time heuristic.
//!
//! The estimate depends only on the two points and
//! the configured average speed, never on live schedules.

use crate::domain::GeoPoint;

use super::config::{PlannerConfig, SpeedProfile};

/// Converts great-circle distance into whole transit minutes.
#[derive(Debug, Clone)]
pub struct TransitEstimator {
    config: PlannerConfig,
}

impl TransitEstimator {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Estimated one-way minutes between two points, rounded up.
    ///
    /// Saturates at `u32::MAX`, which no budget can accommodate.
    pub fn estimate_minutes(&self, from: &GeoPoint, to: &GeoPoint, profile: SpeedProfile) -> u32 {
        let km = from.distance_km(to);
        let minutes = (km / self.config.speed_kmh(profile) * 60.0).ceil();
        if minutes >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            minutes as u32
        }
    }

    /// Estimated minutes for going out and coming back the same way.
    ///
    /// Saturates like [`estimate_minutes`](Self::estimate_minutes).
    pub fn estimate_round_trip(&self, from: &GeoPoint, to: &GeoPoint, profile: SpeedProfile) -> u32 {
        self.estimate_minutes(from, to, profile).saturating_mul(2)
    }
}
