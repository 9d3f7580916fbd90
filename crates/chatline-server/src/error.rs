use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chatline::errors::InvokeError;
use serde_json::json;
use std::net::AddrParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid listen address {addr}: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },
}

/// Errors raised while handling a request. They surface to the caller as a bare 500.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Invoke(#[from] InvokeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "Internal Server Error"})),
        )
            .into_response()
    }
}
