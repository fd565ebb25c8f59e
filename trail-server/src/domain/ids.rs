//! Identifier types for reference data and planned routes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a reference-data identifier.
pub const MAX_ID_LEN: usize = 64;

/// Error returned when parsing a malformed identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {reason}")]
pub struct InvalidId {
    kind: &'static str,
    reason: &'static str,
}

fn validate_reference_id(kind: &'static str, s: &str) -> Result<(), InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            kind,
            reason: "cannot be empty",
        });
    }
    if s.len() > MAX_ID_LEN {
        return Err(InvalidId {
            kind,
            reason: "must be at most 64 characters",
        });
    }
    if !s
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(InvalidId {
            kind,
            reason: "must contain only ASCII letters, digits, '-' or '_'",
        });
    }
    Ok(())
}

/// Declares a validated string identifier for a kind of reference entity.
///
/// Reference identifiers are 1 to 64 characters from `[A-Za-z0-9_-]`.
macro_rules! reference_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse an identifier, rejecting malformed input.
            pub fn parse(s: &str) -> Result<Self, InvalidId> {
                validate_reference_id($kind, s)?;
                Ok(Self(s.to_string()))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidId;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                validate_reference_id($kind, &s)?;
                Ok(Self(s))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

reference_id!(
    /// Identifier of a transit stop.
    StopId,
    "stop"
);

reference_id!(
    /// Identifier of a trailhead.
    ///
    /// # Examples
    ///
    /// ```
    /// use trail_server::domain::TrailheadId;
    ///
    /// let id = TrailheadId::parse("grindelwald-first").unwrap();
    /// assert_eq!(id.as_str(), "grindelwald-first");
    ///
    /// assert!(TrailheadId::parse("").is_err());
    /// assert!(TrailheadId::parse("has space").is_err());
    /// ```
    TrailheadId,
    "trailhead"
);

reference_id!(
    /// Identifier of a trail. Ordering is used to break selection ties.
    TrailId,
    "trail"
);

/// Identifier of a planned route.
///
/// Route ids are generated by the planner as random UUIDs; parsing accepts
/// any UUID in its standard textual forms.
///
/// # Examples
///
/// ```
/// use trail_server::domain::RouteId;
///
/// let id = RouteId::generate();
/// let parsed = RouteId::parse(&id.to_string()).unwrap();
/// assert_eq!(id, parsed);
///
/// assert!(RouteId::parse("not-a-uuid").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(Uuid);

impl RouteId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a route identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        Uuid::parse_str(s).map(Self).map_err(|_| InvalidId {
            kind: "route",
            reason: "must be a UUID",
        })
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RouteId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
