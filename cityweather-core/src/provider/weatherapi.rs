use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::WeatherError, model::WeatherReport};

use super::WeatherProvider;

/// Current-conditions endpoint used when no override is configured.
pub const DEFAULT_API_URL: &str = "http://api.weatherapi.com/v1/current.json";

/// Client for the WeatherAPI.com current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_url: String,
    api_key: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { api_url: api_url.into(), api_key: api_key.into(), http: Client::new() }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let res = self
            .http
            .get(&self.api_url)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Upstream { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;

        Ok(WeatherReport {
            city: parsed.location.name,
            temperature_c: parsed.current.temp_c,
            condition: parsed.current.condition.text,
            humidity_pct: parsed.current.humidity,
            wind_kph: parsed.current.wind_kph,
        })
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    humidity: u8,
    wind_kph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        self.fetch_current(city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary so multibyte bodies slice cleanly.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}...", &body[..cut])
}
