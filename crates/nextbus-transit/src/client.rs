//! HTTP client for the 511.org transit API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::instrument;

use crate::error::TransitError;

const TRANSIT_API_BASE: &str = "http://api.511.org/transit";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// A stop in an agency's stop list, simplified for the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StopInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct TransitClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl TransitClient {
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new(api_key: Option<String>) -> Result<Self, TransitError> {
        Self::new_with_base_url(api_key, TRANSIT_API_BASE)
    }

    /// Client pointed at an alternate base URL, for tests against a mock
    /// upstream.
    pub fn new_with_base_url(
        api_key: Option<String>,
        base_url: &str,
    ) -> Result<Self, TransitError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.to_string(),
        })
    }

    fn api_key(&self) -> Result<&str, TransitError> {
        self.api_key.as_deref().ok_or(TransitError::MissingApiKey)
    }

    /// Fetch the raw stop-monitoring payload for one stop.
    ///
    /// Arrivals are time-sensitive, so callers must not cache this. The
    /// payload is returned as parsed but otherwise untouched JSON; see
    /// [`crate::parse_arrivals`] for the normalized view.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_arrivals_raw(
        &self,
        agency: &str,
        stop_code: &str,
    ) -> Result<Value, TransitError> {
        let url = format!(
            "{}/StopMonitoring?api_key={}&agency={}&stopCode={}&format=json",
            self.base_url,
            self.api_key()?,
            urlencoding::encode(agency),
            urlencoding::encode(stop_code),
        );

        let body = self.request_text(&url).await?;
        Ok(serde_json::from_str(strip_bom(&body))?)
    }

    /// Fetch and normalize the stop list for an agency, sorted by name.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_stops(&self, agency: &str) -> Result<Vec<StopInfo>, TransitError> {
        let url = format!(
            "{}/stops?api_key={}&operator_id={}&format=json",
            self.base_url,
            self.api_key()?,
            urlencoding::encode(agency),
        );

        let body = self.request_text(&url).await?;
        let payload: Value = serde_json::from_str(strip_bom(&body))?;
        Ok(extract_stops(&payload))
    }

    async fn request_text(&self, url: &str) -> Result<String, TransitError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(TransitError::UpstreamStatus(response.status().as_u16()));
        }
        Ok(response.text().await?)
    }
}

/// Drop a single leading byte-order marker. The 511 API sometimes prepends
/// one to otherwise valid JSON.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Walk `Contents.dataObjects.ScheduledStopPoint` and simplify each stop
/// point to id and name (name defaults to the id). Missing container levels
/// yield an empty list.
fn extract_stops(payload: &Value) -> Vec<StopInfo> {
    let Some(points) = payload
        .get("Contents")
        .and_then(|v| v.get("dataObjects"))
        .and_then(|v| v.get("ScheduledStopPoint"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut stops: Vec<StopInfo> = points
        .iter()
        .filter_map(|point| {
            let id = point.get("id").and_then(Value::as_str)?.to_string();
            let name = point
                .get("Name")
                .and_then(Value::as_str)
                .map_or_else(|| id.clone(), str::to_string);
            Some(StopInfo { id, name })
        })
        .collect();

    // Case-insensitive ascending sort; idempotent under re-sort.
    stops.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    stops
}
