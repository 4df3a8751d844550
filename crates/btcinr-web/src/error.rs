use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use btcinr_core::Period;
use thiserror::Error;

use crate::responses::ErrorBody;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid period. Valid periods are: {}", Period::valid_ids())]
    InvalidPeriod { value: String },

    #[error("{context}: {message}")]
    Internal {
        context: &'static str,
        message: String,
    },

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn internal(context: &'static str, error: impl std::fmt::Display) -> Self {
        Self::Internal {
            context,
            message: error.to_string(),
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPeriod { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid utc offset '{value}', expected +HH:MM or -HH:MM")]
    InvalidOffset { value: String },

    #[error("invalid CORS origin '{value}'")]
    InvalidOrigin { value: String },

    #[error("invalid log filter '{value}': {message}")]
    InvalidLogFilter { value: String, message: String },

    #[error("failed to install tracing subscriber: {0}")]
    Telemetry(String),
}

/// Process-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Io(_) => 10,
        }
    }
}
