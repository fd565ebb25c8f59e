//! Planning error types.

use crate::catalog::CatalogError;
use crate::domain::{DomainError, InvalidCoordinates, InvalidCriterion, InvalidId};

/// Errors surfaced by the planning operations.
///
/// Infeasibility is not an error variant of its own: initial planning
/// reports it as `Validation`, while re-planning and alternative generation
/// report it as an empty result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Bad input: coordinates, budget, criterion, identifiers, or no time
    /// left for hiking
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown trailhead, planned route, or an empty stop catalog
    #[error("not found: {0}")]
    NotFound(String),

    /// Uniqueness violation
    #[error("conflict: {0}")]
    Conflict(String),

    /// Reference data is internally inconsistent
    #[error("data integrity fault: {0}")]
    Integrity(String),
}

impl From<InvalidId> for PlanError {
    fn from(e: InvalidId) -> Self {
        PlanError::Validation(e.to_string())
    }
}

impl From<InvalidCoordinates> for PlanError {
    fn from(e: InvalidCoordinates) -> Self {
        PlanError::Validation(e.to_string())
    }
}

impl From<InvalidCriterion> for PlanError {
    fn from(e: InvalidCriterion) -> Self {
        PlanError::Validation(e.to_string())
    }
}

impl From<DomainError> for PlanError {
    fn from(e: DomainError) -> Self {
        PlanError::Validation(e.to_string())
    }
}

impl From<CatalogError> for PlanError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::InvalidId(inner) => inner.into(),
            CatalogError::NoStops | CatalogError::NoTrailheads | CatalogError::TrailheadNotFound(_) => {
                PlanError::NotFound(e.to_string())
            }
            CatalogError::Conflict(msg) => PlanError::Conflict(msg),
            CatalogError::DanglingTrail { .. } | CatalogError::Io(_) | CatalogError::Json(_) => {
                PlanError::Integrity(e.to_string())
            }
        }
    }
}
