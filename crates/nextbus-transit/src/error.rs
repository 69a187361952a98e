//! Transit-specific error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransitError {
    /// The upstream credential was not present in the environment. Reported
    /// per-request rather than at startup.
    #[error("API_KEY not configured")]
    MissingApiKey,

    /// The 511 API answered with a non-success status.
    #[error("511 API returned {0}")]
    UpstreamStatus(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
