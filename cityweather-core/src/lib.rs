//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the upstream weather provider
//! - The per-city in-memory cache and the service wrapping it
//! - Shared domain models
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries or services.

pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;

pub use cache::MemoryCache;
pub use config::Config;
pub use error::WeatherError;
pub use model::WeatherReport;
pub use provider::{WeatherProvider, weatherapi::WeatherApiClient};
pub use service::WeatherService;
