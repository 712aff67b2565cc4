//! Driver ranking and eligibility engine for weekly DSP scorecards.
//!
//! - **Ranking**: turns one week's roster of driver metric records into a
//!   dense `1..=N` ranking of eligible drivers plus an exclusion reason for
//!   every driver below the package threshold.
//! - **Selection**: quick-select helpers (top K, bottom K, ranked,
//!   unranked) and an immutable selection set owned by the calling view.
//!
//! # Features
//!
//! - `serde`: (de)serialization for all data types and JSON config loading.
//! - `parallel`: score large rosters with rayon.
//! - `wasm`: `wasm-bindgen` exports for the browser app.
//!
//! # Architecture
//!
//! Everything here is pure and synchronous. There is no I/O; rosters
//! arrive already fetched and validated, and results are recomputed on
//! every call. Standing tiers (Platinum, Gold, ...) are derived elsewhere.

pub mod error;
pub mod ranking;
pub mod selection;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{ConfigError, RankError};
