//! Planner configuration.

/// Which average transit speed to use when estimating travel time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedProfile {
    Default,
    Faster,
}

/// Slowest average transit speed accepted by [`PlannerConfig::validate`].
pub const MIN_SPEED_KMH: f64 = 1.0;

/// A configured speed is unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field} must be a finite speed of at least 1 km/h, got {value}")]
pub struct InvalidPlannerConfig {
    pub field: &'static str,
    pub value: f64,
}

/// Configuration parameters for route planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Average door-to-stop transit speed for ordinary planning (km/h).
    pub default_speed_kmh: f64,

    /// Average transit speed assumed by the "faster" criterion (km/h).
    pub faster_speed_kmh: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given speeds.
    pub fn new(default_speed_kmh: f64, faster_speed_kmh: f64) -> Self {
        Self {
            default_speed_kmh,
            faster_speed_kmh,
        }
    }

    /// Returns the speed for a profile in km/h.
    pub fn speed_kmh(&self, profile: SpeedProfile) -> f64 {
        match profile {
            SpeedProfile::Default => self.default_speed_kmh,
            SpeedProfile::Faster => self.faster_speed_kmh,
        }
    }

    /// Checks that both speeds are finite and at least [`MIN_SPEED_KMH`].
    pub fn validate(&self) -> Result<(), InvalidPlannerConfig> {
        for (field, value) in [
            ("default_speed_kmh", self.default_speed_kmh),
            ("faster_speed_kmh", self.faster_speed_kmh),
        ] {
            if !value.is_finite() || value < MIN_SPEED_KMH {
                return Err(InvalidPlannerConfig { field, value });
            }
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_speed_kmh: 30.0,
            faster_speed_kmh: 45.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.default_speed_kmh, 30.0);
        assert_eq!(config.faster_speed_kmh, 45.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn speed_by_profile() {
        let config = PlannerConfig::new(20.0, 60.0);

        assert_eq!(config.speed_kmh(SpeedProfile::Default), 20.0);
        assert_eq!(config.speed_kmh(SpeedProfile::Faster), 60.0);
    }

    #[test]
    fn rejects_non_positive_speeds() {
        assert!(PlannerConfig::new(0.0, 45.0).validate().is_err());
        assert!(PlannerConfig::new(30.0, -1.0).validate().is_err());
        assert!(PlannerConfig::new(f64::NAN, 45.0).validate().is_err());
    }

    #[test]
    fn rejects_implausibly_slow_speeds() {
        let err = PlannerConfig::new(1e-6, 45.0).validate().unwrap_err();
        assert_eq!(err.field, "default_speed_kmh");
        assert_eq!(
            err.to_string(),
            "default_speed_kmh must be a finite speed of at least 1 km/h, got 0.000001"
        );
        assert!(PlannerConfig::new(30.0, 0.5).validate().is_err());
        assert!(PlannerConfig::new(MIN_SPEED_KMH, MIN_SPEED_KMH).validate().is_ok());
    }
}
