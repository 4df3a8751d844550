//! # btcinr Web
//!
//! HTTP API serving synthetic Bitcoin-to-INR prices generated by
//! [`btcinr_core`].
//!
//! ## Routes
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/` | [`RootResponse`] |
//! | GET | `/api/btc/current` | [`CurrentPriceResponse`] |
//! | GET | `/api/btc/history/:period` | [`HistoricalDataResponse`] |
//! | GET | `/api/btc/periods` | [`PeriodCatalogResponse`] |
//!
//! Failures are returned as `{"detail": "..."}` with 400 for an unknown
//! period, 404 for an unknown route, 405 for a wrong method and 500 for
//! anything else.

pub mod config;
pub mod error;
pub mod handlers;
pub mod responses;
pub mod telemetry;

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Request};
use axum::routing::get;
use axum::Router;
use btcinr_core::Timestamp;
use time::UtcOffset;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use config::ServerConfig;
pub use error::{ApiError, ConfigError, ServerError};
pub use responses::{
    CurrentPriceResponse, ErrorBody, HistoricalDataResponse, PeriodCatalogResponse, RootResponse,
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Read-only state shared by all handlers.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    utc_offset: UtcOffset,
}

impl AppState {
    pub fn new(utc_offset: UtcOffset) -> Self {
        Self { utc_offset }
    }

    /// Wall-clock time in the configured offset.
    pub fn now(&self) -> Timestamp {
        Timestamp::now_with_offset(self.utc_offset)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(UtcOffset::UTC)
    }
}

/// Routes without middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/btc/current", get(handlers::current_price))
        .route("/api/btc/history/:period", get(handlers::history))
        .route("/api/btc/periods", get(handlers::periods))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}

/// Fully layered application: request ids, tracing and CORS.
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = cors_layer(&config.cors_origins)?;
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), UuidRequestId))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(cors);

    Ok(router(AppState::new(config.utc_offset)).layer(middleware))
}

/// CORS for a fixed origin list with credentials allowed.
///
/// Methods and headers mirror the preflight request, since wildcards are
/// rejected when credentials are allowed.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim()).map_err(|_| ConfigError::InvalidOrigin {
                value: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Generates a v4 UUID for requests that arrive without an id.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}
