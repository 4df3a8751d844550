//! # btcinr Core
//!
//! Synthetic Bitcoin-to-INR price series for demonstration APIs.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models (Period, PricePoint, PeriodInfo, Timestamp) |
//! | [`error`] | Core error types |
//! | [`generator`] | Period-specific series synthesis |
//! | [`stats`] | Current price and percentage change |
//!
//! ## Quick Start
//!
//! ```rust
//! use btcinr_core::{current_price, generate_price_data, percentage_change, Period};
//! use time::OffsetDateTime;
//!
//! let mut rng = fastrand::Rng::with_seed(7);
//! let series = generate_price_data(Period::OneWeek, OffsetDateTime::now_utc(), &mut rng)?;
//!
//! assert_eq!(series.len(), 7);
//! println!("{} INR ({:+.2}%)", current_price(&series), percentage_change(&series));
//! # Ok::<(), btcinr_core::CoreError>(())
//! ```
//!
//! Nothing is persisted: every call draws fresh randomness from the supplied
//! generator and returns a new series.

pub mod domain;
pub mod error;
pub mod generator;
pub mod stats;

// Domain models
pub use domain::{period_catalog, Period, PeriodInfo, PricePoint, Timestamp};

// Error types
pub use error::{CoreError, ValidationError};

// Generation
pub use generator::{generate_price_data, generate_price_data_for_id, BASE_PRICE};

// Derived statistics
pub use stats::{current_price, percentage_change};
