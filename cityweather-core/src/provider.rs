use std::fmt::Debug;

use async_trait::async_trait;

use crate::{error::WeatherError, model::WeatherReport};

pub mod weatherapi;

/// Source of current weather observations for a named city.
///
/// The service layer depends on this trait rather than on a concrete HTTP
/// client, so tests can substitute an in-process fake.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for `city`. The name is passed upstream
    /// verbatim; the provider performs no normalization.
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}
