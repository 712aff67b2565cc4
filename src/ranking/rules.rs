//! Scoring rules combined into a driver's composite score.

use tracing::trace;

use super::config::{Direction, MetricSpec};
use super::types::DriverMetricRecord;

/// Upper end of the percentage scale every metric is scored on.
pub const METRIC_SCALE_MAX: f64 = 100.0;

/// A scoring rule that assigns a value to an item.
///
/// Rules return `f64` scores where **higher is better**. Implementations
/// must be monotonic in whatever input they treat as positive: improving
/// it never lowers the score. Scores are expected on the same
/// `[0, METRIC_SCALE_MAX]` scale as configured metrics; weight checks
/// assume it.
///
/// # Examples
///
/// ```
/// use scorecard_rank::ranking::{DriverMetricRecord, PriorityRule};
///
/// // Volume bonus capped at 100 packages.
/// struct Volume;
///
/// impl PriorityRule<DriverMetricRecord> for Volume {
///     fn name(&self) -> &str { "volume" }
///     fn score(&self, record: &DriverMetricRecord) -> f64 {
///         f64::from(record.packages_delivered.min(100))
///     }
/// }
///
/// assert_eq!(Volume.score(&DriverMetricRecord::new("T1", 250)), 100.0);
/// ```
pub trait PriorityRule<T>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a score for the given item. Higher is better.
    fn score(&self, item: &T) -> f64;
}

/// Scores one configured metric on a `[0, 100]` goodness scale.
///
/// Higher-is-better metrics score their value, lower-is-better metrics
/// score `100 - value`. Both are clamped to the scale. A missing or
/// non-finite value scores 0, the worst case.
#[derive(Debug, Clone)]
pub struct MetricRule {
    name: String,
    direction: Direction,
}

impl MetricRule {
    /// Creates a rule scoring the metric `name`.
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }
}

impl From<&MetricSpec> for MetricRule {
    fn from(spec: &MetricSpec) -> Self {
        Self::new(spec.name.clone(), spec.direction)
    }
}

impl PriorityRule<DriverMetricRecord> for MetricRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self, record: &DriverMetricRecord) -> f64 {
        let value = match record.metric(&self.name) {
            Some(v) if v.is_finite() => v,
            Some(v) => {
                trace!(transporter_id = %record.transporter_id, metric = %self.name, value = v, "non-finite metric scored as worst case");
                return 0.0;
            }
            None => {
                trace!(transporter_id = %record.transporter_id, metric = %self.name, "missing metric scored as worst case");
                return 0.0;
            }
        };
        let goodness = match self.direction {
            Direction::HigherIsBetter => value,
            Direction::LowerIsBetter => METRIC_SCALE_MAX - value,
        };
        goodness.clamp(0.0, METRIC_SCALE_MAX)
    }
}
