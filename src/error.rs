//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Startup failures. The process never serves requests after one of these.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("open database {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("create cars table: {0}")]
    Schema(#[source] sqlx::Error),
    #[error("seed cars table: {0}")]
    Seed(#[source] sqlx::Error),
    #[error("bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serve: {0}")]
    Serve(#[source] std::io::Error),
    #[error("logging: {0}")]
    Logging(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("car {0} not found")]
    NotFound(String),
    #[error("no such endpoint: {0}")]
    NoRoute(String),
    /// Body extraction failed; keeps axum's status (400, 413, 415, 422).
    #[error("{1}")]
    Rejection(StatusCode, String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejection(rejection.status(), rejection.body_text())
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(msg) | AppError::BadRequest(msg) => {
                tracing::warn!(reason = %msg, "rejected request");
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(id) => {
                tracing::debug!(id = %id, "car not found");
                StatusCode::NOT_FOUND
            }
            AppError::NoRoute(path) => {
                tracing::debug!(path = %path, "no api route");
                StatusCode::NOT_FOUND
            }
            AppError::Rejection(status, msg) => {
                tracing::warn!(status = %status, reason = %msg, "rejected request body");
                *status
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match &self {
            AppError::Db(_) => "internal server error".to_string(),
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
