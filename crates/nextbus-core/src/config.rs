//! Startup configuration, sourced from the process environment.
//!
//! The transit API credential is deliberately optional here: its absence is
//! reported per-request by the transit client rather than failing startup,
//! so the kiosk can still render weather and static content.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {message}")]
    Invalid { name: &'static str, message: String },

    #[error("DEFAULT_LAT and DEFAULT_LON must be set together")]
    PartialLocation,
}

/// A user-configured transit stop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StopConfig {
    pub agency: String,
    #[serde(rename = "stopCode")]
    pub stop_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Geographic point for the weather widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// Server configuration.
///
/// `default_stops` and `default_location` feed `GET /api/config`; the
/// browser may override both from its own local storage.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub port: u16,
    pub default_stops: Vec<StopConfig>,
    pub default_location: Option<Location>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable `PORT`, malformed `DEFAULT_STOPS`
    /// JSON, or a half-specified default location.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = get("API_KEY").filter(|key| !key.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    name: "PORT",
                    message: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        let default_stops = match get("DEFAULT_STOPS") {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| ConfigError::Invalid {
                    name: "DEFAULT_STOPS",
                    message: e.to_string(),
                })?
            }
            None => Vec::new(),
        };

        let default_location = match (get("DEFAULT_LAT"), get("DEFAULT_LON")) {
            (Some(lat), Some(lon)) => Some(Location {
                lat: parse_coord("DEFAULT_LAT", &lat)?,
                lon: parse_coord("DEFAULT_LON", &lon)?,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialLocation),
        };

        Ok(Self {
            api_key,
            port,
            default_stops,
            default_location,
        })
    }
}

fn parse_coord(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.parse().map_err(|e: std::num::ParseFloatError| {
        ConfigError::Invalid {
            name,
            message: e.to_string(),
        }
    })
}
