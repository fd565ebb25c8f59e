//! Server configuration from environment.

use std::env;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

use crate::planner::{InvalidPlannerConfig, PlannerConfig};

/// Default listen address.
pub const DEFAULT_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));

pub const ADDR_VAR: &str = "TRAIL_PLANNER_ADDR";
pub const CATALOG_VAR: &str = "TRAIL_PLANNER_CATALOG";
pub const DEFAULT_SPEED_VAR: &str = "TRAIL_PLANNER_DEFAULT_SPEED_KMH";
pub const FASTER_SPEED_VAR: &str = "TRAIL_PLANNER_FASTER_SPEED_KMH";
pub const SCENIC_KEYWORDS_VAR: &str = "TRAIL_PLANNER_SCENIC_KEYWORDS";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {value:?} is not a valid socket address")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: {value:?} is not a number")]
    InvalidNumber { var: &'static str, value: String },

    #[error("invalid planner configuration: {0}")]
    InvalidPlanner(#[from] InvalidPlannerConfig),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,

    /// JSON catalog to load; the bundled sample is used when unset.
    pub catalog_path: Option<PathBuf>,

    pub planner: PlannerConfig,

    /// Keywords for the scenic classifier; scenic selection falls back to
    /// the longest fit when unset.
    pub scenic_keywords: Option<Vec<String>>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr = match get(ADDR_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value,
            })?,
            None => DEFAULT_ADDR,
        };

        let defaults = PlannerConfig::default();
        let planner = PlannerConfig::new(
            parse_speed(DEFAULT_SPEED_VAR, get(DEFAULT_SPEED_VAR))?
                .unwrap_or(defaults.default_speed_kmh),
            parse_speed(FASTER_SPEED_VAR, get(FASTER_SPEED_VAR))?
                .unwrap_or(defaults.faster_speed_kmh),
        );
        planner.validate()?;

        let scenic_keywords = get(SCENIC_KEYWORDS_VAR).map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect()
        });

        Ok(Self {
            addr,
            catalog_path: get(CATALOG_VAR).map(PathBuf::from),
            planner,
            scenic_keywords,
        })
    }
}

fn parse_speed(var: &'static str, value: Option<String>) -> Result<Option<f64>, ConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { var, value: v })
        })
        .transpose()
}
