//! Weather-specific error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// The points (gridpoint resolution) call answered non-success.
    #[error("NWS points API returned {0}")]
    PointsStatus(u16),

    /// The hourly forecast call answered non-success.
    #[error("NWS forecast API returned {0}")]
    ForecastStatus(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}
