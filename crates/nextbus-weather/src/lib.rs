//! Client for the National Weather Service API.
//!
//! Free, no API key; a descriptive User-Agent is the required client
//! identifier. Current conditions come from a two-step lookup: resolve the
//! coordinates to a gridpoint, then fetch that gridpoint's hourly forecast.

pub mod client;
pub mod error;
pub mod types;

pub use client::WeatherClient;
pub use error::WeatherError;
pub use types::WeatherReading;
