//! Core pieces shared across the Next Bus server: startup configuration,
//! the in-memory response cache, and tracing setup.

pub mod cache;
pub mod config;

pub use cache::{CacheEntry, TtlCache};
pub use config::{Config, ConfigError, Location, StopConfig};

use anyhow::Result;

/// Initialize tracing for the process.
///
/// Respects `RUST_LOG`; defaults to `info`.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::debug!("nextbus core initialized");
    Ok(())
}
