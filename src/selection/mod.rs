//! Roster selection helpers.
//!
//! Quick-select controls ("top 10", "bottom 10", "ranked", "unranked")
//! read a [`Ranking`](crate::ranking::Ranking) and produce an immutable
//! [`Selection`]. The calling view owns the selection; every update
//! returns a new value and leaves the old one untouched.

mod quick;
mod types;

pub use quick::{bottom_k, ranked, top_k, unranked, QuickSelect};
pub use types::Selection;
