//! Ranking configuration: metric set, weights and eligibility threshold.

use std::collections::HashSet;

use super::rules::METRIC_SCALE_MAX;
use crate::error::ConfigError;

/// Which end of a metric's `[0, 100]` scale is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Direction {
    /// e.g. delivery completion rate.
    #[default]
    HigherIsBetter,

    /// e.g. a defect or incident rate.
    LowerIsBetter,
}

/// One metric in the composite score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MetricSpec {
    /// Key looked up in [`DriverMetricRecord::metrics`](super::DriverMetricRecord::metrics).
    pub name: String,

    /// Contribution of this metric. Must be finite and positive.
    pub weight: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Direction,
}

impl MetricSpec {
    /// Creates a metric with an explicit direction.
    pub fn new(name: impl Into<String>, weight: f64, direction: Direction) -> Self {
        Self {
            name: name.into(),
            weight,
            direction,
        }
    }

    /// A higher-is-better metric.
    pub fn higher(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, Direction::HigherIsBetter)
    }

    /// A lower-is-better metric.
    pub fn lower(name: impl Into<String>, weight: f64) -> Self {
        Self::new(name, weight, Direction::LowerIsBetter)
    }
}

/// Minimum weekly package count for a driver to be ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Option<u32>", into = "Option<u32>"))]
pub enum PackageThreshold {
    /// Every driver is eligible, including those with zero packages.
    #[default]
    Disabled,

    /// Drivers with fewer packages are excluded. `Minimum(0)` admits everyone.
    Minimum(u32),
}

impl PackageThreshold {
    /// Returns the effective minimum, or `None` when nobody can be excluded.
    pub fn minimum(&self) -> Option<u32> {
        match *self {
            PackageThreshold::Minimum(n) if n > 0 => Some(n),
            _ => None,
        }
    }

    /// Whether a driver with `packages` delivered is eligible.
    pub fn admits(&self, packages: u32) -> bool {
        self.minimum().map_or(true, |min| packages >= min)
    }
}

impl From<Option<u32>> for PackageThreshold {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(n) => PackageThreshold::Minimum(n),
            None => PackageThreshold::Disabled,
        }
    }
}

impl From<PackageThreshold> for Option<u32> {
    fn from(value: PackageThreshold) -> Self {
        match value {
            PackageThreshold::Minimum(n) => Some(n),
            PackageThreshold::Disabled => None,
        }
    }
}

/// Per-deployment ranking configuration.
///
/// # Examples
///
/// ```
/// use scorecard_rank::ranking::{MetricSpec, PackageThreshold, RankingConfig};
///
/// let config = RankingConfig::default()
///     .with_metric(MetricSpec::higher("dcr", 0.4))
///     .with_metric(MetricSpec::higher("pod", 0.3))
///     .with_metric(MetricSpec::lower("dnr_rate", 0.3))
///     .with_package_threshold(PackageThreshold::Minimum(40));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RankingConfig {
    /// Metrics contributing to the composite score.
    pub metrics: Vec<MetricSpec>,

    /// DSP-level eligibility threshold used by [`RankingEngine::rank`](super::RankingEngine::rank).
    #[cfg_attr(feature = "serde", serde(default))]
    pub package_threshold: PackageThreshold,

    /// Whether to compute composite scores in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parallel: bool,
}

impl RankingConfig {
    /// Adds a metric to the composite score.
    pub fn with_metric(mut self, metric: MetricSpec) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Adds several metrics to the composite score.
    pub fn with_metrics(mut self, metrics: impl IntoIterator<Item = MetricSpec>) -> Self {
        self.metrics.extend(metrics);
        self
    }

    /// Sets the DSP-level eligibility threshold.
    pub fn with_package_threshold(mut self, threshold: impl Into<PackageThreshold>) -> Self {
        self.package_threshold = threshold.into();
        self
    }

    /// Sets whether composite scores are computed in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metrics.is_empty() {
            return Err(ConfigError::EmptyMetricSet);
        }
        let mut seen = HashSet::with_capacity(self.metrics.len());
        for (index, metric) in self.metrics.iter().enumerate() {
            if metric.name.trim().is_empty() {
                return Err(ConfigError::EmptyMetricName { index });
            }
            if !seen.insert(metric.name.as_str()) {
                return Err(ConfigError::DuplicateMetric(metric.name.clone()));
            }
            check_weight(&metric.name, metric.weight)?;
        }
        check_score_range(self.metrics.iter().map(|m| m.weight))
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// ```
    /// use scorecard_rank::ranking::{PackageThreshold, RankingConfig};
    ///
    /// let config = RankingConfig::from_json(r#"{
    ///     "metrics": [
    ///         { "name": "dcr", "weight": 2.0 },
    ///         { "name": "dnrRate", "weight": 1.0, "direction": "lowerIsBetter" }
    ///     ],
    ///     "packageThreshold": 40
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.package_threshold, PackageThreshold::Minimum(40));
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Rejects a weight that is not positive or whose full-scale contribution
/// is not a finite `f64`.
pub(crate) fn check_weight(metric: &str, weight: f64) -> Result<(), ConfigError> {
    if !weight.is_finite() || weight <= 0.0 || !(weight * METRIC_SCALE_MAX).is_finite() {
        return Err(ConfigError::InvalidWeight {
            metric: metric.to_string(),
            weight,
        });
    }
    Ok(())
}

/// Rejects weights whose best possible composite score is not finite.
pub(crate) fn check_score_range(
    weights: impl IntoIterator<Item = f64>,
) -> Result<(), ConfigError> {
    let max_score: f64 = weights.into_iter().map(|w| w * METRIC_SCALE_MAX).sum();
    if !max_score.is_finite() {
        return Err(ConfigError::ScoreOverflow);
    }
    Ok(())
}
