use std::collections::HashMap;
use std::sync::Mutex;

use crate::model::WeatherReport;

/// In-memory report store keyed by normalized city name.
///
/// No TTL and no eviction: an entry lives as long as the cache does. The
/// store is not durable across restarts.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, WeatherReport>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<WeatherReport> {
        self.entries.lock().expect("cache lock poisoned").get(key).cloned()
    }

    pub fn insert(&self, key: String, report: WeatherReport) {
        self.entries.lock().expect("cache lock poisoned").insert(key, report);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(city: &str) -> WeatherReport {
        WeatherReport {
            city: city.to_string(),
            temperature_c: 15.0,
            condition: "Cloudy".to_string(),
            humidity_pct: 70,
            wind_kph: 10.0,
        }
    }

    #[test]
    fn starts_empty() {
        let cache = MemoryCache::new();
        assert!(cache.is_empty());
        assert!(cache.get("london").is_none());
    }

    #[test]
    fn stores_and_returns_reports_by_key() {
        let cache = MemoryCache::new();
        cache.insert("london".to_string(), report("London"));

        let stored = cache.get("london").expect("entry must exist");
        assert_eq!(stored, report("London"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn insert_overwrites_existing_entry() {
        let cache = MemoryCache::new();
        cache.insert("london".to_string(), report("London"));
        cache.insert("london".to_string(), report("London, UK"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("london").unwrap().city, "London, UK");
    }
}
