//! JavaScript bindings for the roster UI.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::ranking::{DriverMetricRecord, RankingConfig, RankingEngine};

/// Ranks a weekly roster.
///
/// `records` must be an array of `{ transporterId, packagesDelivered,
/// metrics }` objects and `config` a ranking configuration object. Any
/// other shape is rejected with an error rather than ranked as empty.
///
/// Returns `{ results, ranked, excluded }` as plain JS objects.
#[wasm_bindgen(js_name = rankDrivers)]
pub fn rank_drivers(records: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let records: Vec<DriverMetricRecord> = serde_wasm_bindgen::from_value(records)?;
    let config: RankingConfig = serde_wasm_bindgen::from_value(config)?;

    let engine = RankingEngine::new(config).map_err(|e| JsError::new(&e.to_string()))?;
    let ranking = engine
        .rank(&records)
        .map_err(|e| JsError::new(&e.to_string()))?;

    Ok(ranking.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Validates a ranking configuration object, throwing on the first problem.
#[wasm_bindgen(js_name = validateRankingConfig)]
pub fn validate_ranking_config(config: JsValue) -> Result<(), JsValue> {
    let config: RankingConfig = serde_wasm_bindgen::from_value(config)?;
    config
        .validate()
        .map_err(|e| JsError::new(&e.to_string()).into())
}
