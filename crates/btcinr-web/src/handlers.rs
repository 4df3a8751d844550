//! Route handlers. Each call generates a fresh series; nothing is shared
//! between requests apart from the read-only [`AppState`].

use axum::extract::{Path, State};
use axum::Json;
use btcinr_core::{generate_price_data, Period};
use fastrand::Rng;
use tracing::{debug, error, warn};

use crate::error::ApiError;
use crate::responses::{
    CurrentPriceResponse, HistoricalDataResponse, PeriodCatalogResponse, RootResponse,
};
use crate::AppState;

const CURRENT_PRICE_CONTEXT: &str = "Error fetching current price";
const HISTORY_CONTEXT: &str = "Error fetching historical data";

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse::running(state.now()))
}

/// GET /api/btc/current
pub async fn current_price(
    State(state): State<AppState>,
) -> Result<Json<CurrentPriceResponse>, ApiError> {
    let now = state.now();
    let mut rng = Rng::new();

    let series = generate_price_data(Period::OneDay, now.into_inner(), &mut rng)
        .map_err(|e| internal(CURRENT_PRICE_CONTEXT, e))?;
    let response = CurrentPriceResponse::from_series(&series, now)
        .map_err(|e| internal(CURRENT_PRICE_CONTEXT, e))?;

    debug!(
        price = response.price,
        percentage_change = response.percentage_change,
        "generated current price"
    );
    Ok(Json(response))
}

/// GET /api/btc/history/:period
pub async fn history(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> Result<Json<HistoricalDataResponse>, ApiError> {
    let period = period.parse::<Period>().map_err(|_| {
        warn!(period = %period, "rejected unknown period");
        ApiError::InvalidPeriod { value: period.clone() }
    })?;

    let now = state.now();
    let mut rng = Rng::new();

    let data = generate_price_data(period, now.into_inner(), &mut rng)
        .map_err(|e| internal(HISTORY_CONTEXT, e))?;
    let response = HistoricalDataResponse::from_series(period, data, now)
        .map_err(|e| internal(HISTORY_CONTEXT, e))?;

    debug!(
        period = %period,
        points = response.data_points,
        "generated history"
    );
    Ok(Json(response))
}

/// GET /api/btc/periods
pub async fn periods() -> Json<PeriodCatalogResponse> {
    Json(PeriodCatalogResponse::default())
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn internal(context: &'static str, cause: impl std::fmt::Display) -> ApiError {
    let error = ApiError::internal(context, cause);
    error!(%error, "request failed");
    error
}

