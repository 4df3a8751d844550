//! Response bodies, one struct per endpoint shape.

use btcinr_core::{
    current_price, percentage_change, period_catalog, Period, PeriodInfo,
    PricePoint, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

pub const CURRENCY: &str = "INR";

/// `GET /`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub time: Timestamp,
}

impl RootResponse {
    pub fn running(time: Timestamp) -> Self {
        Self {
            message: String::from("Bitcoin Price API"),
            status: String::from("running"),
            time,
        }
    }
}

/// `GET /api/btc/current`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPriceResponse {
    pub price: i64,
    pub percentage_change: f64,
    pub currency: String,
    pub last_updated: Timestamp,
}

impl CurrentPriceResponse {
    pub fn from_series(
        series: &[PricePoint],
        last_updated: Timestamp,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            price: current_price(series),
            percentage_change: finite("percentage_change", percentage_change(series))?,
            currency: String::from(CURRENCY),
            last_updated,
        })
    }
}

/// `GET /api/btc/history/{period}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalDataResponse {
    pub data: Vec<PricePoint>,
    pub period: Period,
    pub current_price: i64,
    pub percentage_change: f64,
    pub data_points: usize,
    pub last_updated: Timestamp,
}

impl HistoricalDataResponse {
    pub fn from_series(
        period: Period,
        data: Vec<PricePoint>,
        last_updated: Timestamp,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            period,
            current_price: current_price(&data),
            percentage_change: finite("percentage_change", percentage_change(&data))?,
            data_points: data.len(),
            data,
            last_updated,
        })
    }
}

/// `GET /api/btc/periods`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCatalogResponse {
    pub periods: Vec<PeriodInfo>,
}

impl Default for PeriodCatalogResponse {
    fn default() -> Self {
        Self {
            periods: period_catalog(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(value)
}
