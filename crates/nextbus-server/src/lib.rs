//! HTTP layer for the Next Bus kiosk: the proxy endpoints in front of the
//! transit and weather clients, plus error-to-status mapping.

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;

/// Build the API router. Static assets and middleware are layered on by the
/// binary; tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/arrivals", get(handlers::get_arrivals))
        .route("/api/stops", get(handlers::get_stops))
        .route("/api/weather", get(handlers::get_weather))
        .route("/api/agencies", get(handlers::get_agencies))
        .route("/api/config", get(handlers::get_config))
        .with_state(state)
}
