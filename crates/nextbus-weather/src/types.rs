//! Client-facing weather schema and the slices of the NWS payloads we read.

use serde::{Deserialize, Serialize};

/// Current conditions as served to the kiosk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
    pub unit: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PointsProperties {
    #[serde(rename = "forecastHourly")]
    pub forecast_hourly: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastPeriod {
    pub temperature: f64,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "shortForecast")]
    pub short_forecast: String,
    pub icon: String,
}

impl From<ForecastPeriod> for WeatherReading {
    fn from(period: ForecastPeriod) -> Self {
        Self {
            temperature: period.temperature,
            unit: period.temperature_unit,
            description: period.short_forecast,
            icon: period.icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_deserializes_nws_field_names() {
        let period: ForecastPeriod = serde_json::from_value(serde_json::json!({
            "temperature": 61,
            "temperatureUnit": "F",
            "shortForecast": "Partly Cloudy",
            "icon": "https://api.weather.gov/icons/land/day/sct?size=small"
        }))
        .unwrap();

        let reading = WeatherReading::from(period);
        assert_eq!(reading.temperature, 61.0);
        assert_eq!(reading.unit, "F");
        assert_eq!(reading.description, "Partly Cloudy");
    }

    #[test]
    fn test_reading_serializes_flat_schema() {
        let reading = WeatherReading {
            temperature: 61.0,
            unit: "F".to_string(),
            description: "Partly Cloudy".to_string(),
            icon: "icon-url".to_string(),
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "temperature": 61.0,
                "unit": "F",
                "description": "Partly Cloudy",
                "icon": "icon-url"
            })
        );
    }
}
