use serde::{Deserialize, Serialize};

use crate::{Period, Timestamp, ValidationError};

/// One synthetic price observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Period-specific short label (`14:00`, `Mon`, `Jan 07`, ...).
    pub timestamp: String,
    /// Price in whole rupees.
    pub price: i64,
    pub date: Timestamp,
}

impl PricePoint {
    pub fn new(
        timestamp: impl Into<String>,
        price: i64,
        date: Timestamp,
    ) -> Result<Self, ValidationError> {
        validate_positive("price", price)?;

        Ok(Self {
            timestamp: timestamp.into(),
            price,
            date,
        })
    }
}

/// Catalog entry describing a supported period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInfo {
    pub id: Period,
    pub label: String,
    pub description: String,
}

impl From<Period> for PeriodInfo {
    fn from(period: Period) -> Self {
        Self {
            id: period,
            label: period.label().to_owned(),
            description: period.description().to_owned(),
        }
    }
}

/// The full period catalog, in canonical order.
pub fn period_catalog() -> Vec<PeriodInfo> {
    Period::ALL.into_iter().map(PeriodInfo::from).collect()
}

fn validate_positive(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NonPositivePrice { field, value });
    }
    Ok(())
}
