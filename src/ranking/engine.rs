//! Composite scoring and rank assignment.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use super::config::{check_score_range, check_weight, PackageThreshold, RankingConfig};
use super::rules::{MetricRule, PriorityRule};
use super::types::{DriverMetricRecord, ExclusionReason, Ranking};
use crate::error::{ConfigError, RankError};

/// A rule paired with its weight in the composite score.
struct WeightedRule {
    rule: Box<dyn PriorityRule<DriverMetricRecord>>,
    weight: f64,
}

/// Ranks a weekly roster of drivers.
///
/// The composite score of a driver is the weighted sum of its rule scores
/// (higher is better). Eligible drivers are ordered by composite score
/// descending, ties broken by `transporter_id` ascending, and receive dense
/// ranks `1..=N`. The engine keeps no state between calls.
///
/// # Examples
///
/// ```
/// use scorecard_rank::ranking::{
///     DriverMetricRecord, MetricSpec, PackageThreshold, RankingConfig, RankingEngine,
/// };
///
/// let engine = RankingEngine::new(
///     RankingConfig::default()
///         .with_metric(MetricSpec::higher("dcr", 1.0))
///         .with_package_threshold(PackageThreshold::Minimum(40)),
/// )
/// .unwrap();
///
/// let roster = vec![
///     DriverMetricRecord::new("A", 50).with_metric("dcr", 99.0),
///     DriverMetricRecord::new("B", 10).with_metric("dcr", 100.0),
///     DriverMetricRecord::new("C", 60).with_metric("dcr", 95.0),
/// ];
///
/// let ranking = engine.rank(&roster).unwrap();
/// assert_eq!(ranking.get("A").and_then(|r| r.rank()), Some(1));
/// assert_eq!(ranking.get("C").and_then(|r| r.rank()), Some(2));
/// assert!(!ranking.get("B").unwrap().is_eligible());
/// ```
pub struct RankingEngine {
    rules: Vec<WeightedRule>,
    package_threshold: PackageThreshold,
    parallel: bool,
}

impl RankingEngine {
    /// Builds an engine from a validated configuration.
    pub fn new(config: RankingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rules = config
            .metrics
            .iter()
            .map(|spec| WeightedRule {
                rule: Box::new(MetricRule::from(spec)),
                weight: spec.weight,
            })
            .collect();
        Ok(Self {
            rules,
            package_threshold: config.package_threshold,
            parallel: config.parallel,
        })
    }

    /// Adds a custom rule to the composite score.
    ///
    /// The rule must be monotonic (see [`PriorityRule`]) for rankings to
    /// stay monotonic.
    pub fn with_rule<R: PriorityRule<DriverMetricRecord> + 'static>(
        mut self,
        rule: R,
        weight: f64,
    ) -> Result<Self, ConfigError> {
        check_weight(rule.name(), weight)?;
        if self.rules.iter().any(|wr| wr.rule.name() == rule.name()) {
            return Err(ConfigError::DuplicateMetric(rule.name().to_string()));
        }
        check_score_range(self.rules.iter().map(|wr| wr.weight).chain([weight]))?;
        self.rules.push(WeightedRule {
            rule: Box::new(rule),
            weight,
        });
        Ok(self)
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|wr| wr.rule.name()).collect()
    }

    /// The threshold [`rank`](Self::rank) applies.
    pub fn package_threshold(&self) -> PackageThreshold {
        self.package_threshold
    }

    /// Computes the composite score for a single record. Higher is better.
    ///
    /// Always finite: contributions and the total saturate at `f64::MAX`.
    pub fn score(&self, record: &DriverMetricRecord) -> f64 {
        let total: f64 = self
            .rules
            .iter()
            .map(|wr| {
                let s = wr.rule.score(record);
                if s.is_finite() {
                    (s * wr.weight).clamp(-f64::MAX, f64::MAX)
                } else {
                    0.0
                }
            })
            .sum();
        let total = total.clamp(-f64::MAX, f64::MAX);
        // -0.0 and 0.0 must compare equal under total_cmp
        if total == 0.0 {
            0.0
        } else {
            total
        }
    }

    /// Ranks a roster using the configured package threshold.
    pub fn rank(&self, records: &[DriverMetricRecord]) -> Result<Ranking, RankError> {
        self.rank_with_threshold(records, self.package_threshold)
    }

    /// Ranks a roster using a caller-supplied package threshold.
    ///
    /// Fails only when the roster is not a valid collection: a record with
    /// an empty `transporter_id`, or the same id twice.
    pub fn rank_with_threshold(
        &self,
        records: &[DriverMetricRecord],
        threshold: PackageThreshold,
    ) -> Result<Ranking, RankError> {
        if let Err(err) = validate_roster(records) {
            warn!(roster_size = records.len(), error = %err, "rejected roster");
            return Err(err);
        }

        let mut eligible = Vec::with_capacity(records.len());
        let mut excluded = Vec::new();
        for record in records {
            if threshold.admits(record.packages_delivered) {
                eligible.push(record);
            } else {
                excluded.push((
                    record.transporter_id.clone(),
                    ExclusionReason::BelowPackageThreshold {
                        delivered: record.packages_delivered,
                        required: threshold.minimum().unwrap_or(0),
                    },
                ));
            }
        }

        let scores = self.score_all(&eligible);
        let mut order: Vec<usize> = (0..eligible.len()).collect();
        order.sort_by(|&a, &b| {
            compare_standing(
                scores[a],
                &eligible[a].transporter_id,
                scores[b],
                &eligible[b].transporter_id,
            )
        });

        let ranked: Vec<(String, f64)> = order
            .into_iter()
            .map(|i| (eligible[i].transporter_id.clone(), scores[i]))
            .collect();

        debug!(
            roster_size = records.len(),
            eligible = ranked.len(),
            excluded = excluded.len(),
            threshold = ?threshold.minimum(),
            "ranked roster"
        );

        Ok(Ranking::from_parts(ranked, excluded))
    }

    fn score_all(&self, records: &[&DriverMetricRecord]) -> Vec<f64> {
        if self.parallel {
            return self.score_parallel(records);
        }
        records.iter().map(|r| self.score(r)).collect()
    }

    #[cfg(feature = "parallel")]
    fn score_parallel(&self, records: &[&DriverMetricRecord]) -> Vec<f64> {
        records.par_iter().map(|r| self.score(r)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_parallel(&self, records: &[&DriverMetricRecord]) -> Vec<f64> {
        records.iter().map(|r| self.score(r)).collect()
    }
}

impl fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankingEngine")
            .field("rules", &self.rule_names())
            .field("package_threshold", &self.package_threshold)
            .field("parallel", &self.parallel)
            .finish()
    }
}

/// Orders two drivers: higher score first, then `transporter_id` ascending.
fn compare_standing(score_a: f64, id_a: &str, score_b: f64, id_b: &str) -> Ordering {
    score_b.total_cmp(&score_a).then_with(|| id_a.cmp(id_b))
}

fn validate_roster(records: &[DriverMetricRecord]) -> Result<(), RankError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.transporter_id.is_empty() {
            return Err(RankError::EmptyTransporterId { index });
        }
        if !seen.insert(record.transporter_id.as_str()) {
            return Err(RankError::DuplicateTransporter(record.transporter_id.clone()));
        }
    }
    Ok(())
}
