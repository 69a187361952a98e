//! Normalization of 511 stop-monitoring payloads into display arrivals.
//!
//! A structurally malformed payload degrades to an empty list instead of an
//! error: the kiosk shows "no arrivals" rather than an error banner.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Upper bound on arrivals shown per stop.
pub const MAX_ARRIVALS: usize = 2;

/// One predicted vehicle visit to a stop.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Arrival {
    pub route: String,
    pub destination: String,
    /// `None` when the visit carried no usable timestamp.
    #[serde(rename = "minutesUntil")]
    pub minutes_until: Option<i64>,
}

/// Extract up to [`MAX_ARRIVALS`] arrivals from a raw stop-monitoring
/// payload, in upstream visit order.
///
/// A missing structural level (service delivery, monitoring block, vehicle
/// journey, or monitored call) aborts extraction and yields an empty list.
pub fn parse_arrivals(payload: &Value, now: DateTime<Utc>) -> Vec<Arrival> {
    let Some(visits) = payload
        .get("ServiceDelivery")
        .and_then(|v| v.get("StopMonitoringDelivery"))
        .and_then(|v| v.get("MonitoredStopVisit"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut arrivals = Vec::with_capacity(MAX_ARRIVALS);
    for visit in visits.iter().take(MAX_ARRIVALS) {
        let Some(journey) = visit.get("MonitoredVehicleJourney") else {
            return Vec::new();
        };
        let Some(call) = journey.get("MonitoredCall") else {
            return Vec::new();
        };

        // Prefer the human-facing line name over the raw line reference.
        let route = [journey.get("PublishedLineName"), journey.get("LineRef")]
            .into_iter()
            .flatten()
            .find_map(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let destination = journey
            .get("DestinationName")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        // Time priority: expected arrival, expected departure, then the
        // aimed (scheduled) arrival.
        let minutes_until = [
            call.get("ExpectedArrivalTime"),
            call.get("ExpectedDepartureTime"),
            call.get("AimedArrivalTime"),
        ]
        .into_iter()
        .flatten()
        .find_map(Value::as_str)
        .and_then(|raw| minutes_until(raw, now));

        arrivals.push(Arrival {
            route,
            destination,
            minutes_until,
        });
    }

    arrivals
}

/// Minutes from `now` until `raw`, rounded to nearest and clamped at zero:
/// a bus expected in the past is displayed as arriving now.
fn minutes_until(raw: &str, now: DateTime<Utc>) -> Option<i64> {
    let arrival = DateTime::parse_from_rfc3339(raw).ok()?;
    let diff_ms = arrival
        .with_timezone(&Utc)
        .signed_duration_since(now)
        .num_milliseconds();
    let minutes = (diff_ms as f64 / 60_000.0).round() as i64;
    Some(minutes.max(0))
}
