//! Domain error types.
//!
//! These errors represent invariant violations when building a planned
//! route. They are distinct from catalog and API errors.

/// Domain-level errors for route construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The travel budget must be a positive number of minutes
    #[error("max travel minutes must be positive")]
    NonPositiveBudget,

    /// A route must include some hiking
    #[error("route must include a positive hiking duration")]
    NoHiking,

    /// Total time exceeds the constraint snapshot
    #[error("route takes {total_mins} minutes, exceeding the {max_mins} minute budget")]
    ExceedsBudget { total_mins: u32, max_mins: u32 },

    /// Segment durations add up to more minutes than can be represented
    #[error("route duration overflows")]
    DurationOverflow,

    /// Preferred departure is not an RFC 3339 timestamp
    #[error("invalid preferred departure {0:?}: expected an RFC 3339 timestamp")]
    InvalidDeparture(String),
}
