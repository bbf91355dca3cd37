use anyhow::Context;
use clap::{Parser, Subcommand};

use cityweather_core::{Config, MemoryCache, WeatherApiClient, WeatherService};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, passed to the API as-is.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = WeatherApiClient::new(config.api_url(), config.api_key()?);

    let service = WeatherService::new(Box::new(client), MemoryCache::new());
    let report = service.get_weather(city).await?;

    println!(
        "{}: {}, {:.1} °C, humidity {}%, wind {:.1} km/h",
        report.city, report.condition, report.temperature_c, report.humidity_pct, report.wind_kph
    );

    Ok(())
}
