//! Catalog error types.

use crate::domain::{InvalidId, TrailId, TrailheadId};

/// Errors from building, loading or querying the reference catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog holds no transit stops
    #[error("catalog has no transit stops")]
    NoStops,

    /// The catalog holds no trailheads
    #[error("catalog has no trailheads")]
    NoTrailheads,

    /// Well-formed trailhead id that is not in the catalog
    #[error("trailhead {0} not found")]
    TrailheadNotFound(TrailheadId),

    /// Malformed identifier
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// Uniqueness violation during ingestion
    #[error("conflict: {0}")]
    Conflict(String),

    /// A trailhead references a trail that does not exist
    #[error("trailhead {trailhead} references unknown trail {trail}")]
    DanglingTrail {
        trailhead: TrailheadId,
        trail: TrailId,
    },

    /// Failed to read a catalog file
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse catalog JSON
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
}
