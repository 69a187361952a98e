//! The proxy endpoints.
//!
//! Arrivals are never cached (they are time-sensitive); stop lists and
//! weather go through the shared TTL caches. There is no request
//! coalescing: concurrent misses for the same key each fetch upstream and
//! the last write wins.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use nextbus_transit::{agencies, Agency, StopInfo};
use nextbus_weather::WeatherReading;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ArrivalsQuery {
    #[serde(default)]
    agency: String,
    #[serde(default, rename = "stopCode")]
    stop_code: String,
}

/// `GET /api/arrivals?agency=&stopCode=` — raw upstream stop-monitoring
/// payload, passed through untouched.
pub async fn get_arrivals(
    State(state): State<AppState>,
    Query(query): Query<ArrivalsQuery>,
) -> Result<Json<Value>, ApiError> {
    if query.agency.is_empty() || query.stop_code.is_empty() {
        return Err(ApiError::InvalidRequest("agency and stopCode are required"));
    }

    let payload = state
        .transit
        .fetch_arrivals_raw(&query.agency, &query.stop_code)
        .await?;
    Ok(Json(payload))
}

#[derive(Debug, Deserialize)]
pub struct StopsQuery {
    #[serde(default)]
    agency: String,
}

/// `GET /api/stops?agency=` — normalized stop list, cached per agency.
pub async fn get_stops(
    State(state): State<AppState>,
    Query(query): Query<StopsQuery>,
) -> Result<Json<Vec<StopInfo>>, ApiError> {
    if query.agency.is_empty() {
        return Err(ApiError::InvalidRequest("agency is required"));
    }

    if let Some(stops) = state.stops_cache.get(&query.agency) {
        tracing::debug!(agency = %query.agency, "stops cache hit");
        return Ok(Json(stops));
    }

    let stops = state.transit.fetch_stops(&query.agency).await?;
    state.stops_cache.insert(query.agency, stops.clone());
    Ok(Json(stops))
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    lat: String,
    #[serde(default)]
    lon: String,
}

/// `GET /api/weather?lat=&lon=` — current conditions, cached per coordinate
/// pair. Coordinates are forwarded verbatim; no numeric validation.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReading>, ApiError> {
    if query.lat.is_empty() || query.lon.is_empty() {
        return Err(ApiError::InvalidRequest("lat and lon are required"));
    }

    let key = format!("{},{}", query.lat, query.lon);
    if let Some(reading) = state.weather_cache.get(&key) {
        tracing::debug!(%key, "weather cache hit");
        return Ok(Json(reading));
    }

    // Both upstream steps must succeed before anything is cached.
    let reading = state
        .weather
        .current_conditions(&query.lat, &query.lon)
        .await?;
    state.weather_cache.insert(key, reading.clone());
    Ok(Json(reading))
}

/// `GET /api/agencies` — the fixed operator list.
pub async fn get_agencies() -> Json<&'static [Agency]> {
    Json(agencies())
}

/// `GET /api/config` — defaults configured at startup; the browser may
/// override both fields from local storage.
pub async fn get_config(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "stops": state.config.default_stops,
        "location": state.config.default_location,
    }))
}
