//! Optimization criteria for trail selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unsupported criterion string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported criterion: {0:?}")]
pub struct InvalidCriterion(String);

/// The objective used when selecting a trail.
///
/// `Default` is the "longest fit" policy used by initial planning. The other
/// three are requested by name when asking for an alternative route.
///
/// # Examples
///
/// ```
/// use trail_server::domain::Criterion;
///
/// let c: Criterion = "scenic".parse().unwrap();
/// assert_eq!(c, Criterion::Scenic);
/// assert_eq!(c.as_str(), "scenic");
///
/// assert!("cheapest".parse::<Criterion>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Default,
    Faster,
    Shorter,
    Scenic,
}

impl Criterion {
    /// Criteria that may be requested for an alternative route.
    pub const ALTERNATIVES: [Criterion; 3] =
        [Criterion::Faster, Criterion::Shorter, Criterion::Scenic];

    /// Returns the wire name of this criterion.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Default => "default",
            Criterion::Faster => "faster",
            Criterion::Shorter => "shorter",
            Criterion::Scenic => "scenic",
        }
    }

    /// Parse a criterion that is valid for alternative generation.
    ///
    /// `"default"` is rejected: it is only used by initial planning.
    pub fn parse_alternative(s: &str) -> Result<Self, InvalidCriterion> {
        let criterion: Criterion = s.parse()?;
        if Self::ALTERNATIVES.contains(&criterion) {
            Ok(criterion)
        } else {
            Err(InvalidCriterion(s.to_string()))
        }
    }
}

impl FromStr for Criterion {
    type Err = InvalidCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Criterion::Default),
            "faster" => Ok(Criterion::Faster),
            "shorter" => Ok(Criterion::Shorter),
            "scenic" => Ok(Criterion::Scenic),
            _ => Err(InvalidCriterion(s.to_string())),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all() {
        for c in [
            Criterion::Default,
            Criterion::Faster,
            Criterion::Shorter,
            Criterion::Scenic,
        ] {
            assert_eq!(c.as_str().parse::<Criterion>().unwrap(), c);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Faster".parse::<Criterion>().is_err());
        assert!("".parse::<Criterion>().is_err());
    }

    #[test]
    fn alternative_rejects_default() {
        assert!(Criterion::parse_alternative("default").is_err());
        assert_eq!(
            Criterion::parse_alternative("shorter").unwrap(),
            Criterion::Shorter
        );
    }

    #[test]
    fn every_alternative_parses() {
        for criterion in Criterion::ALTERNATIVES {
            assert_eq!(Criterion::parse_alternative(criterion.as_str()), Ok(criterion));
        }
        assert!(!Criterion::ALTERNATIVES.contains(&Criterion::Default));
    }

    #[test]
    fn error_display() {
        let err = "fastest".parse::<Criterion>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported criterion: \"fastest\"");
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Criterion::Scenic).unwrap(),
            "\"scenic\""
        );
        let c: Criterion = serde_json::from_str("\"faster\"").unwrap();
        assert_eq!(c, Criterion::Faster);
    }
}
