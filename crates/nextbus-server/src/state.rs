//! Shared per-process state: configuration, upstream clients, and the two
//! response caches.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use nextbus_core::{Config, TtlCache};
use nextbus_transit::{StopInfo, TransitClient};
use nextbus_weather::{WeatherClient, WeatherReading};

/// Stop lists change rarely; cache for a day to stay under upstream rate
/// limits.
pub const STOPS_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Weather is cached per coordinate pair for 15 minutes.
pub const WEATHER_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub transit: TransitClient,
    pub weather: WeatherClient,
    pub stops_cache: Arc<TtlCache<String, Vec<StopInfo>>>,
    pub weather_cache: Arc<TtlCache<String, WeatherReading>>,
}

impl AppState {
    /// State with clients pointed at the real upstreams.
    pub fn new(config: Config) -> Result<Self> {
        let transit = TransitClient::new(config.api_key.clone())?;
        let weather = WeatherClient::new()?;
        Ok(Self::with_clients(config, transit, weather))
    }

    /// State with caller-supplied clients, for tests against mock upstreams.
    pub fn with_clients(config: Config, transit: TransitClient, weather: WeatherClient) -> Self {
        Self {
            config: Arc::new(config),
            transit,
            weather,
            stops_cache: Arc::new(TtlCache::new(STOPS_CACHE_TTL)),
            weather_cache: Arc::new(TtlCache::new(WEATHER_CACHE_TTL)),
        }
    }
}
