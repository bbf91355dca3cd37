use serde::{Deserialize, Serialize};

/// Flat current-weather report for a single city.
///
/// `city` is the display name as returned by the upstream API, which may
/// differ in casing or spelling from the name the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_kph: f64,
}
