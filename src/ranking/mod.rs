//! Driver ranking and eligibility.
//!
//! Takes one reporting week's roster of [`DriverMetricRecord`]s and
//! produces a [`Ranking`]: a dense rank for every eligible driver and an
//! [`ExclusionReason`] for every driver below the DSP's package threshold.
//!
//! - **Eligibility**: `packages_delivered >= threshold`. A disabled (or zero)
//!   threshold admits everyone, including drivers with no packages.
//! - **Composite score**: weighted sum of per-metric goodness on a
//!   `[0, 100]` scale. The metric set, weights and directions come from a
//!   [`RankingConfig`] validated at load time; the engine knows no metric
//!   names of its own.
//! - **Ordering**: score descending, then `transporter_id` ascending. Two
//!   passes over the same roster always yield the same ranks, and improving
//!   a metric never worsens a driver's rank.
//!
//! Each pass is a pure function of its inputs. Nothing is cached between
//! calls.

mod config;
mod engine;
mod rules;
mod types;

pub use config::{Direction, MetricSpec, PackageThreshold, RankingConfig};
pub use engine::RankingEngine;
pub use rules::{MetricRule, PriorityRule, METRIC_SCALE_MAX};
pub use types::{DriverMetricRecord, ExclusionReason, RankResult, Ranking};
