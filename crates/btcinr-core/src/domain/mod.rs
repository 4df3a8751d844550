//! # Domain Models
//!
//! Types shared by the generator and the HTTP layer.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Period`] | History period preset (1D, 1W, 1M, 6M, 1Y, MAX) |
//! | [`PricePoint`] | Labelled synthetic price observation |
//! | [`PeriodInfo`] | Catalog entry for a period |
//! | [`Timestamp`] | RFC3339 timestamp with explicit offset |
//!
//! Constructors validate their invariants; a [`PricePoint`] never holds a
//! non-positive price.

mod models;
mod period;
mod timestamp;

pub use models::{period_catalog, PeriodInfo, PricePoint};
pub use period::Period;
pub use timestamp::Timestamp;
