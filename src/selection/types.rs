//! Immutable selection state.

use std::collections::BTreeSet;

use super::quick::QuickSelect;
use crate::ranking::Ranking;

/// A set of selected transporter ids.
///
/// Updates return a new `Selection`; the receiver is never modified.
///
/// # Examples
///
/// ```
/// use scorecard_rank::selection::Selection;
///
/// let empty = Selection::new();
/// let one = empty.toggle("T1");
///
/// assert!(empty.is_empty());
/// assert!(one.contains("T1"));
/// assert!(one.toggle("T1").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection with the ids a quick-select preset resolves to.
    pub fn apply(&self, ranking: &Ranking, preset: QuickSelect) -> Self {
        preset.resolve(ranking).into_iter().collect()
    }

    /// Adds the ids a preset resolves to, keeping the current selection.
    pub fn extend_with(&self, ranking: &Ranking, preset: QuickSelect) -> Self {
        let mut ids = self.ids.clone();
        ids.extend(preset.resolve(ranking).into_iter().map(str::to_string));
        Self { ids }
    }

    /// Selects `id` if unselected, unselects it otherwise.
    pub fn toggle(&self, id: &str) -> Self {
        if self.contains(id) {
            self.without(id)
        } else {
            self.with(id)
        }
    }

    /// Returns a selection that also includes `id`.
    pub fn with(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        ids.insert(id.to_string());
        Self { ids }
    }

    /// Returns a selection without `id`.
    pub fn without(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        ids.remove(id);
        Self { ids }
    }

    /// Drops ids that are not part of `ranking`, e.g. after switching weeks.
    pub fn retain_known(&self, ranking: &Ranking) -> Self {
        let ids = self
            .ids
            .iter()
            .filter(|id| ranking.get(id).is_some())
            .cloned()
            .collect();
        Self { ids }
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{
        DriverMetricRecord, MetricSpec, PackageThreshold, RankingConfig, RankingEngine,
    };

    fn sample_ranking() -> Ranking {
        let engine = RankingEngine::new(
            RankingConfig::default()
                .with_metric(MetricSpec::higher("dcr", 1.0))
                .with_package_threshold(PackageThreshold::Minimum(40)),
        )
        .unwrap();
        let roster = vec![
            DriverMetricRecord::new("A", 50).with_metric("dcr", 99.0),
            DriverMetricRecord::new("B", 60).with_metric("dcr", 97.0),
            DriverMetricRecord::new("C", 70).with_metric("dcr", 95.0),
            DriverMetricRecord::new("Z", 5),
        ];
        engine.rank(&roster).unwrap()
    }

    #[test]
    fn test_updates_do_not_mutate_receiver() {
        let base = Selection::new().with("A");
        let grown = base.with("B");
        let shrunk = grown.without("A");

        assert_eq!(base.iter().collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(grown.iter().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(shrunk.iter().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn test_apply_replaces() {
        let ranking = sample_ranking();
        let current = Selection::from_iter(["Z"]);
        let next = current.apply(&ranking, QuickSelect::Top(2));

        assert_eq!(next.iter().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(current.contains("Z"));
    }

    #[test]
    fn test_extend_with_keeps_current() {
        let ranking = sample_ranking();
        let next = Selection::new()
            .with("C")
            .extend_with(&ranking, QuickSelect::Unranked);
        assert_eq!(next.iter().collect::<Vec<_>>(), vec!["C", "Z"]);
    }

    #[test]
    fn test_clear() {
        let ranking = sample_ranking();
        let next = Selection::from_iter(["A", "B"]).apply(&ranking, QuickSelect::Clear);
        assert!(next.is_empty());
    }

    #[test]
    fn test_retain_known() {
        let ranking = sample_ranking();
        let stale = Selection::from_iter(["A", "GONE"]);
        let fresh = stale.retain_known(&ranking);
        assert_eq!(fresh.len(), 1);
        assert!(fresh.contains("A"));
        assert!(!fresh.contains("GONE"));
    }

    #[test]
    fn test_toggle() {
        let s = Selection::new().toggle("A").toggle("B").toggle("A");
        assert_eq!(s.iter().collect::<Vec<_>>(), vec!["B"]);
    }
}
