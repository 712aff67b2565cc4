//! Quick-select queries over a ranking.

use crate::ranking::Ranking;

/// A one-click selection preset.
///
/// # Examples
///
/// ```
/// use scorecard_rank::selection::QuickSelect;
///
/// let top = QuickSelect::Top(10);
/// let unranked = QuickSelect::Unranked;
/// # let _ = (top, unranked);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "count", rename_all = "camelCase"))]
pub enum QuickSelect {
    /// The `k` best-ranked drivers.
    Top(usize),

    /// The `k` worst-ranked drivers.
    Bottom(usize),

    /// Every eligible driver.
    Ranked,

    /// Every ineligible driver.
    Unranked,

    /// Every driver in the ranking.
    All,

    /// Nobody.
    Clear,
}

impl QuickSelect {
    /// Resolves the preset to transporter ids.
    ///
    /// Ranked ids come in rank order, excluded ids in ascending id order.
    pub fn resolve<'a>(&self, ranking: &'a Ranking) -> Vec<&'a str> {
        match *self {
            QuickSelect::Top(k) => top_k(ranking, k),
            QuickSelect::Bottom(k) => bottom_k(ranking, k),
            QuickSelect::Ranked => ranked(ranking),
            QuickSelect::Unranked => unranked(ranking),
            QuickSelect::All => {
                let mut ids = ranked(ranking);
                ids.extend(unranked(ranking));
                ids
            }
            QuickSelect::Clear => Vec::new(),
        }
    }
}

/// The `k` best eligible drivers, best first.
///
/// Returns every eligible driver when `k` exceeds the eligible count.
pub fn top_k(ranking: &Ranking, k: usize) -> Vec<&str> {
    ranking
        .ranked_ids()
        .iter()
        .take(k)
        .map(String::as_str)
        .collect()
}

/// The `k` worst eligible drivers, worst first.
pub fn bottom_k(ranking: &Ranking, k: usize) -> Vec<&str> {
    ranking
        .ranked_ids()
        .iter()
        .rev()
        .take(k)
        .map(String::as_str)
        .collect()
}

/// Every eligible driver in rank order.
pub fn ranked(ranking: &Ranking) -> Vec<&str> {
    ranking.ranked_ids().iter().map(String::as_str).collect()
}

/// Every ineligible driver in ascending id order.
pub fn unranked(ranking: &Ranking) -> Vec<&str> {
    ranking.excluded_ids().iter().map(String::as_str).collect()
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
            DriverMetricRecord::new("D", 80).with_metric("dcr", 93.0),
            DriverMetricRecord::new("Y", 5).with_metric("dcr", 100.0),
            DriverMetricRecord::new("X", 0),
        ];
        engine.rank(&roster).unwrap()
    }

    #[test]
    fn test_top_k() {
        let ranking = sample_ranking();
        assert_eq!(top_k(&ranking, 2), vec!["A", "B"]);
        assert_eq!(top_k(&ranking, 0), Vec::<&str>::new());
        assert_eq!(top_k(&ranking, 10), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_bottom_k() {
        let ranking = sample_ranking();
        assert_eq!(bottom_k(&ranking, 2), vec!["D", "C"]);
        assert_eq!(bottom_k(&ranking, 10), vec!["D", "C", "B", "A"]);
    }

    #[test]
    fn test_ranked_and_unranked() {
        let ranking = sample_ranking();
        assert_eq!(ranked(&ranking), vec!["A", "B", "C", "D"]);
        assert_eq!(unranked(&ranking), vec!["X", "Y"]);
    }

    #[test]
    fn test_resolve_presets() {
        let ranking = sample_ranking();
        assert_eq!(QuickSelect::Top(1).resolve(&ranking), vec!["A"]);
        assert_eq!(QuickSelect::Bottom(1).resolve(&ranking), vec!["D"]);
        assert_eq!(QuickSelect::All.resolve(&ranking).len(), 6);
        assert!(QuickSelect::Clear.resolve(&ranking).is_empty());
    }

    #[test]
    fn test_empty_ranking() {
        let ranking = Ranking::default();
        assert!(top_k(&ranking, 10).is_empty());
        assert!(bottom_k(&ranking, 10).is_empty());
        assert!(unranked(&ranking).is_empty());
    }
}
