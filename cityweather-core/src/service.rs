use tracing::{debug, info};

use crate::{
    cache::MemoryCache, error::WeatherError, model::WeatherReport, provider::WeatherProvider,
};

/// Cache-wrapping front-end for weather lookups.
///
/// Cache keys are derived with `str::to_lowercase` (Unicode-aware, no
/// trimming), so lookups are case-insensitive. The cache lock is never held
/// across the fetch: two concurrent misses for the same city may both hit the
/// network, with the later insert overwriting the earlier equal value. No
/// single-flight coordination is attempted.
#[derive(Debug)]
pub struct WeatherService {
    provider: Box<dyn WeatherProvider>,
    cache: MemoryCache,
}

impl WeatherService {
    pub fn new(provider: Box<dyn WeatherProvider>, cache: MemoryCache) -> Self {
        Self { provider, cache }
    }

    /// Return current weather for `city`, fetching at most once per distinct
    /// lower-cased name for the lifetime of the cache (absent concurrent
    /// misses). Failed fetches are not cached, so the next call retries.
    pub async fn get_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let key = city.to_lowercase();

        if let Some(report) = self.cache.get(&key) {
            debug!(city = %key, "returning cached weather data");
            return Ok(report);
        }

        info!(city = %city, "fetching weather data");
        let report = self.provider.current(city).await?;
        self.cache.insert(key, report.clone());

        Ok(report)
    }
}
