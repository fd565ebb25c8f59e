//! Accessibility tags shared by trails and planning constraints.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A normalised set of accessibility tags (e.g. `wheelchair`, `step-free`).
///
/// Tags are trimmed, lowercased and deduplicated; blank tags are dropped.
/// Ordering is stable so two equal sets always serialize identically.
///
/// # Examples
///
/// ```
/// use trail_server::domain::AccessibilityTags;
///
/// let tags = AccessibilityTags::from_iter([" Wheelchair ", "wheelchair", ""]);
/// assert_eq!(tags.len(), 1);
/// assert!(tags.contains("wheelchair"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AccessibilityTags(BTreeSet<String>);

impl AccessibilityTags {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the (normalised) tag is present.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(&tag.trim().to_lowercase())
    }

    /// Returns true if every tag in `required` is also in `self`.
    pub fn satisfies(&self, required: &AccessibilityTags) -> bool {
        required.0.is_subset(&self.0)
    }

    /// Iterate over the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for AccessibilityTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

impl From<Vec<String>> for AccessibilityTags {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<AccessibilityTags> for Vec<String> {
    fn from(tags: AccessibilityTags) -> Self {
        tags.0.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises() {
        let tags = AccessibilityTags::from_iter(["Step-Free", "  wheelchair", "WHEELCHAIR", " "]);
        let collected: Vec<&str> = tags.iter().collect();
        assert_eq!(collected, vec!["step-free", "wheelchair"]);
    }

    #[test]
    fn satisfies_subset() {
        let trail = AccessibilityTags::from_iter(["wheelchair", "step-free", "stroller"]);
        let required = AccessibilityTags::from_iter(["wheelchair", "stroller"]);
        assert!(trail.satisfies(&required));
        assert!(!required.satisfies(&trail));
    }

    #[test]
    fn empty_requirement_always_satisfied() {
        let trail = AccessibilityTags::new();
        assert!(trail.satisfies(&AccessibilityTags::new()));
    }

    #[test]
    fn serde_as_list() {
        let tags: AccessibilityTags = serde_json::from_str(r#"["B", "a", "b"]"#).unwrap();
        assert_eq!(serde_json::to_string(&tags).unwrap(), r#"["a","b"]"#);
    }
}
