//! Error types for configuration loading and ranking passes.

use thiserror::Error;

/// A ranking configuration was rejected at load time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("metric set is empty")]
    EmptyMetricSet,

    #[error("metric at position {index} has an empty name")]
    EmptyMetricName { index: usize },

    #[error("metric '{0}' is configured more than once")]
    DuplicateMetric(String),

    #[error("metric '{metric}' has weight {weight}, expected a finite positive number")]
    InvalidWeight { metric: String, weight: f64 },

    #[error("summed metric weights overflow the composite score range")]
    ScoreOverflow,

    #[cfg(feature = "serde")]
    #[error("malformed ranking config: {0}")]
    Json(#[from] serde_json::Error),
}

/// The roster handed to the engine is not a valid collection.
///
/// These are integration bugs in the caller, not runtime conditions
/// to recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("record at position {index} has an empty transporter id")]
    EmptyTransporterId { index: usize },

    #[error("transporter '{0}' appears more than once in the roster")]
    DuplicateTransporter(String),
}
