//! Trail selection under a hiking time budget.
//!
//! Each criterion maps to one selection strategy. Every strategy only
//! considers candidates whose duration fits the remaining budget, with the
//! boundary inclusive: a trail that uses exactly the remaining minutes is
//! accepted.

use crate::domain::{Criterion, Trail};

use super::config::SpeedProfile;

/// Optional capability that decides whether a trail is scenic.
pub trait ScenicClassifier: Send + Sync {
    fn is_scenic(&self, trail: &Trail) -> bool;
}

/// Classifies trails as scenic from their curated flag or description.
///
/// A curated `scenic` flag on the trail is authoritative. Without one, the
/// trail is scenic if its description contains any configured keyword
/// (case-insensitive).
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    pub fn new<S: AsRef<str>>(keywords: impl IntoIterator<Item = S>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl ScenicClassifier for KeywordClassifier {
    fn is_scenic(&self, trail: &Trail) -> bool {
        if let Some(flag) = trail.scenic {
            return flag;
        }
        let Some(description) = &trail.description else {
            return false;
        };
        let description = description.to_lowercase();
        self.keywords.iter().any(|k| description.contains(k.as_str()))
    }
}

/// Inputs shared by every strategy.
#[derive(Clone, Copy)]
pub struct SelectionContext<'a> {
    /// Minutes left for hiking after transit overhead.
    pub budget_mins: u32,

    /// Hiking minutes of the route an alternative is compared against.
    pub reference_hiking_mins: Option<u32>,

    /// Scenic capability, if configured.
    pub classifier: Option<&'a dyn ScenicClassifier>,
}

impl SelectionContext<'_> {
    fn fits(&self, trail: &Trail) -> bool {
        trail.duration_mins > 0 && trail.duration_mins <= self.budget_mins
    }
}

/// Transit speed profile used by a criterion.
pub fn speed_profile(criterion: Criterion) -> SpeedProfile {
    match criterion {
        Criterion::Faster => SpeedProfile::Faster,
        Criterion::Default | Criterion::Shorter | Criterion::Scenic => SpeedProfile::Default,
    }
}

/// Select a trail from `candidates` according to `criterion`.
///
/// Returns `None` when no candidate satisfies the criterion within budget.
pub fn select<'t>(
    criterion: Criterion,
    candidates: &[&'t Trail],
    ctx: &SelectionContext<'_>,
) -> Option<&'t Trail> {
    match criterion {
        // "faster" widens the budget through its speed profile, then picks
        // the same way as the default.
        Criterion::Default | Criterion::Faster => longest_fit(candidates, ctx),
        Criterion::Shorter => shortest_below_reference(candidates, ctx),
        Criterion::Scenic => first_scenic_fit(candidates, ctx),
    }
}

/// Greatest duration within budget; ties go to the lowest trail id.
fn longest_fit<'t>(candidates: &[&'t Trail], ctx: &SelectionContext<'_>) -> Option<&'t Trail> {
    candidates
        .iter()
        .copied()
        .filter(|t| ctx.fits(t))
        .min_by(|a, b| {
            b.duration_mins
                .cmp(&a.duration_mins)
                .then_with(|| a.id.cmp(&b.id))
        })
}

/// Smallest duration within budget that is strictly shorter than the
/// reference route's hiking time; ties go to the lowest trail id.
fn shortest_below_reference<'t>(
    candidates: &[&'t Trail],
    ctx: &SelectionContext<'_>,
) -> Option<&'t Trail> {
    let limit = ctx.reference_hiking_mins.unwrap_or(u32::MAX);
    candidates
        .iter()
        .copied()
        .filter(|t| ctx.fits(t) && t.duration_mins < limit)
        .min_by(|a, b| {
            a.duration_mins
                .cmp(&b.duration_mins)
                .then_with(|| a.id.cmp(&b.id))
        })
}

/// First candidate the classifier marks scenic that fits the budget.
///
/// Without a classifier, or when nothing scenic fits, length stands in for
/// scenic quality and the longest fit is chosen.
fn first_scenic_fit<'t>(candidates: &[&'t Trail], ctx: &SelectionContext<'_>) -> Option<&'t Trail> {
    ctx.classifier
        .and_then(|classifier| {
            candidates
                .iter()
                .copied()
                .find(|t| ctx.fits(t) && classifier.is_scenic(t))
        })
        .or_else(|| longest_fit(candidates, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrailId;

    fn trail(id: &str, mins: u32) -> Trail {
        Trail::new(TrailId::parse(id).unwrap(), id, mins)
    }

    fn ctx<'a>(budget_mins: u32) -> SelectionContext<'a> {
        SelectionContext {
            budget_mins,
            reference_hiking_mins: None,
            classifier: None,
        }
    }

    fn pick(criterion: Criterion, trails: &[Trail], ctx: &SelectionContext<'_>) -> Option<String> {
        let candidates: Vec<&Trail> = trails.iter().collect();
        select(criterion, &candidates, ctx).map(|t| t.id.to_string())
    }

    fn standard() -> Vec<Trail> {
        vec![trail("T45", 45), trail("T75", 75), trail("T120", 120)]
    }

    /// Marks exactly the named trails as scenic.
    struct Stub(Vec<&'static str>);

    impl ScenicClassifier for Stub {
        fn is_scenic(&self, trail: &Trail) -> bool {
            self.0.iter().any(|id| *id == trail.id.as_str())
        }
    }

    #[test]
    fn longest_fit_picks_greatest_within_budget() {
        assert_eq!(pick(Criterion::Default, &standard(), &ctx(200)).as_deref(), Some("T120"));
        assert_eq!(pick(Criterion::Default, &standard(), &ctx(100)).as_deref(), Some("T75"));
        assert_eq!(pick(Criterion::Default, &standard(), &ctx(50)).as_deref(), Some("T45"));
    }

    #[test]
    fn longest_fit_boundary_is_inclusive() {
        assert_eq!(pick(Criterion::Default, &standard(), &ctx(120)).as_deref(), Some("T120"));
        assert_eq!(pick(Criterion::Default, &standard(), &ctx(119)).as_deref(), Some("T75"));
    }

    #[test]
    fn longest_fit_nothing_fits() {
        assert_eq!(pick(Criterion::Default, &standard(), &ctx(44)), None);
        assert_eq!(pick(Criterion::Default, &[], &ctx(500)), None);
    }

    #[test]
    fn longest_fit_ties_break_on_lowest_id() {
        let trails = vec![trail("B", 60), trail("C", 60), trail("A", 60)];
        assert_eq!(pick(Criterion::Default, &trails, &ctx(60)).as_deref(), Some("A"));
    }

    #[test]
    fn zero_duration_trails_never_selected() {
        let trails = vec![trail("Z", 0)];
        assert_eq!(pick(Criterion::Default, &trails, &ctx(60)), None);
        assert_eq!(pick(Criterion::Shorter, &trails, &ctx(60)), None);
    }

    #[test]
    fn faster_uses_longest_fit() {
        assert_eq!(pick(Criterion::Faster, &standard(), &ctx(84)).as_deref(), Some("T75"));
        assert_eq!(speed_profile(Criterion::Faster), SpeedProfile::Faster);
        assert_eq!(speed_profile(Criterion::Default), SpeedProfile::Default);
    }

    #[test]
    fn shorter_picks_smallest_below_reference() {
        let ctx = SelectionContext {
            reference_hiking_mins: Some(120),
            ..ctx(200)
        };
        assert_eq!(pick(Criterion::Shorter, &standard(), &ctx).as_deref(), Some("T45"));
    }

    #[test]
    fn shorter_requires_strictly_shorter() {
        let ctx = SelectionContext {
            reference_hiking_mins: Some(45),
            ..ctx(200)
        };
        assert_eq!(pick(Criterion::Shorter, &standard(), &ctx), None);
    }

    #[test]
    fn shorter_respects_budget() {
        let ctx = SelectionContext {
            reference_hiking_mins: Some(120),
            ..ctx(40)
        };
        assert_eq!(pick(Criterion::Shorter, &standard(), &ctx), None);
    }

    #[test]
    fn scenic_prefers_classified_trail() {
        let stub = Stub(vec!["T75"]);
        let ctx = SelectionContext {
            classifier: Some(&stub),
            ..ctx(200)
        };
        assert_eq!(pick(Criterion::Scenic, &standard(), &ctx).as_deref(), Some("T75"));
    }

    #[test]
    fn scenic_takes_first_in_candidate_order() {
        let stub = Stub(vec!["T120", "T45"]);
        let ctx = SelectionContext {
            classifier: Some(&stub),
            ..ctx(200)
        };
        assert_eq!(pick(Criterion::Scenic, &standard(), &ctx).as_deref(), Some("T45"));
    }

    #[test]
    fn scenic_skips_classified_trails_over_budget() {
        let stub = Stub(vec!["T120"]);
        let ctx = SelectionContext {
            classifier: Some(&stub),
            ..ctx(100)
        };
        // T120 does not fit; fall back to longest fit.
        assert_eq!(pick(Criterion::Scenic, &standard(), &ctx).as_deref(), Some("T75"));
    }

    #[test]
    fn scenic_without_classifier_falls_back_to_longest() {
        assert_eq!(pick(Criterion::Scenic, &standard(), &ctx(200)).as_deref(), Some("T120"));
    }

    #[test]
    fn keyword_classifier_matches_description() {
        let classifier = KeywordClassifier::new(["Lake", " glacier "]);
        assert_eq!(classifier.keywords(), &["lake".to_string(), "glacier".to_string()]);

        let lake = trail("A", 60).with_description("Loop around a mountain LAKE");
        let forest = trail("B", 60).with_description("Dense forest track");
        let bare = trail("C", 60);
        assert!(classifier.is_scenic(&lake));
        assert!(!classifier.is_scenic(&forest));
        assert!(!classifier.is_scenic(&bare));
    }

    #[test]
    fn keyword_classifier_curated_flag_wins() {
        let classifier = KeywordClassifier::new(["lake"]);
        let flagged_off = trail("A", 60)
            .with_description("lake shore")
            .with_scenic(false);
        let flagged_on = trail("B", 60).with_scenic(true);
        assert!(!classifier.is_scenic(&flagged_off));
        assert!(classifier.is_scenic(&flagged_on));
    }
}
