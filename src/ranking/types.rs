//! Roster input records and ranking output.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// One driver's performance for one reporting week.
///
/// Metrics are named percentages, conceptually in `[0, 100]`. A metric
/// absent from `metrics` is scored as the worst possible value; it never
/// excludes the driver.
///
/// # Examples
///
/// ```
/// use scorecard_rank::ranking::DriverMetricRecord;
///
/// let record = DriverMetricRecord::new("A1B2C3", 212)
///     .with_metric("dcr", 99.1)
///     .with_metric("pod", 97.5);
///
/// assert_eq!(record.metric("dcr"), Some(99.1));
/// assert_eq!(record.metric("cdf"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DriverMetricRecord {
    /// Opaque identifier, unique within a roster and stable across weeks.
    pub transporter_id: String,

    /// Packages delivered during the week.
    pub packages_delivered: u32,

    /// Named percentage metrics for the week.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metrics: BTreeMap<String, f64>,
}

impl DriverMetricRecord {
    /// Creates a record with no metrics.
    pub fn new(transporter_id: impl Into<String>, packages_delivered: u32) -> Self {
        Self {
            transporter_id: transporter_id.into(),
            packages_delivered,
            metrics: BTreeMap::new(),
        }
    }

    /// Sets a named metric value.
    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    /// Returns the raw value of a metric, if present.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

/// Why a driver was left out of the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum ExclusionReason {
    /// Fewer packages than the DSP's minimum for the week.
    BelowPackageThreshold { delivered: u32, required: u32 },
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::BelowPackageThreshold { .. } => f.write_str("below package threshold"),
        }
    }
}

/// A single driver's outcome for one ranking pass.
///
/// A driver is either ranked or excluded, never both.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum RankResult {
    /// Eligible driver. `rank` starts at 1 (best).
    Ranked { rank: u32, score: f64 },

    /// Ineligible driver.
    Excluded { reason: ExclusionReason },
}

impl RankResult {
    /// Whether the driver received a rank.
    pub fn is_eligible(&self) -> bool {
        matches!(self, RankResult::Ranked { .. })
    }

    /// Rank of an eligible driver, 1 being best.
    pub fn rank(&self) -> Option<u32> {
        match self {
            RankResult::Ranked { rank, .. } => Some(*rank),
            RankResult::Excluded { .. } => None,
        }
    }

    /// Composite score the rank was derived from. Higher is better.
    pub fn score(&self) -> Option<f64> {
        match self {
            RankResult::Ranked { score, .. } => Some(*score),
            RankResult::Excluded { .. } => None,
        }
    }

    /// Why an ineligible driver was left out.
    pub fn exclusion_reason(&self) -> Option<&ExclusionReason> {
        match self {
            RankResult::Ranked { .. } => None,
            RankResult::Excluded { reason } => Some(reason),
        }
    }
}

/// Outcome of one ranking pass over a weekly roster.
///
/// Every input driver appears exactly once. Eligible drivers hold ranks
/// `1..=eligible_count()` with no gaps or duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Ranking {
    results: HashMap<String, RankResult>,
    ranked: Vec<String>,
    excluded: Vec<String>,
}

impl Ranking {
    /// Assembles a ranking from ids in rank order and excluded drivers.
    ///
    /// `ranked[i]` receives rank `i + 1`.
    pub(crate) fn from_parts(
        ranked: Vec<(String, f64)>,
        mut excluded: Vec<(String, ExclusionReason)>,
    ) -> Self {
        excluded.sort_by(|a, b| a.0.cmp(&b.0));

        let mut results = HashMap::with_capacity(ranked.len() + excluded.len());
        let mut ranked_ids = Vec::with_capacity(ranked.len());
        for (pos, (id, score)) in ranked.into_iter().enumerate() {
            let rank = pos as u32 + 1;
            results.insert(id.clone(), RankResult::Ranked { rank, score });
            ranked_ids.push(id);
        }

        let mut excluded_ids = Vec::with_capacity(excluded.len());
        for (id, reason) in excluded {
            results.insert(id.clone(), RankResult::Excluded { reason });
            excluded_ids.push(id);
        }

        Self {
            results,
            ranked: ranked_ids,
            excluded: excluded_ids,
        }
    }

    /// Looks up a driver. `None` means the driver was not part of this pass.
    pub fn get(&self, transporter_id: &str) -> Option<&RankResult> {
        self.results.get(transporter_id)
    }

    /// Number of ranked (eligible) drivers.
    pub fn eligible_count(&self) -> usize {
        self.ranked.len()
    }

    /// Total number of drivers in the pass.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the pass covered no drivers.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Eligible ids in rank order; index `i` holds rank `i + 1`.
    pub fn ranked_ids(&self) -> &[String] {
        &self.ranked
    }

    /// Ineligible ids in ascending id order.
    pub fn excluded_ids(&self) -> &[String] {
        &self.excluded
    }

    /// Iterates over every driver's result in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RankResult)> {
        self.results.iter().map(|(id, r)| (id.as_str(), r))
    }
}
