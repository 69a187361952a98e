//! Mapping from internal errors to HTTP responses.
//!
//! Every failure body is `{"error": message}`. Upstream error text is
//! forwarded to the caller as-is; nothing beyond the message is exposed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use nextbus_transit::TransitError;
use nextbus_weather::WeatherError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required query parameter was missing or empty.
    #[error("{0}")]
    InvalidRequest(&'static str),

    #[error(transparent)]
    Transit(#[from] TransitError),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Transit(_) | ApiError::Weather(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("API error: {}", message);
        } else {
            tracing::debug!("rejected request: {}", message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
