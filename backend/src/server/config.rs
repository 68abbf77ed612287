//! Process configuration parsed from flags and environment.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use url::Url;

/// PocketFarm backend server.
#[derive(Debug, Clone, Parser)]
#[command(name = "pocketfarm-backend", version, about)]
pub struct Config {
    /// Socket address to listen on.
    #[arg(long, env = "POCKETFARM_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Path to the SQLite database file.
    #[arg(long, env = "POCKETFARM_DATABASE", default_value = "pocketfarm.db")]
    pub database_path: String,

    /// Maximum store connections in the pool.
    #[arg(long, env = "POCKETFARM_POOL_MAX_SIZE", default_value_t = 10)]
    pub pool_max_size: u32,

    /// API key shared by the weather and primary geocoding providers.
    #[arg(long, env = "POCKETFARM_WEATHER_API_KEY")]
    pub weather_api_key: String,

    /// Current-weather endpoint.
    #[arg(
        long,
        env = "POCKETFARM_WEATHER_ENDPOINT",
        default_value = "https://api.openweathermap.org/data/2.5/weather"
    )]
    pub weather_endpoint: Url,

    /// Primary reverse-geocoding endpoint.
    #[arg(
        long,
        env = "POCKETFARM_GEOCODE_PRIMARY_ENDPOINT",
        default_value = "https://api.openweathermap.org/geo/1.0/reverse"
    )]
    pub geocode_primary_endpoint: Url,

    /// Fallback reverse-geocoding endpoint.
    #[arg(
        long,
        env = "POCKETFARM_GEOCODE_FALLBACK_ENDPOINT",
        default_value = "https://nominatim.openstreetmap.org/reverse"
    )]
    pub geocode_fallback_endpoint: Url,

    /// Overpass POI endpoint.
    #[arg(
        long,
        env = "POCKETFARM_OVERPASS_ENDPOINT",
        default_value = "https://overpass-api.de/api/interpreter"
    )]
    pub overpass_endpoint: Url,

    /// Minutes between weather alert sweeps.
    #[arg(long, env = "POCKETFARM_WEATHER_SWEEP_MINUTES", default_value_t = 30)]
    pub weather_sweep_minutes: u64,

    /// Minutes between overdue watering sweeps.
    #[arg(long, env = "POCKETFARM_WATERING_SWEEP_MINUTES", default_value_t = 60)]
    pub watering_sweep_minutes: u64,

    /// Minutes before a failed sweep pass is retried.
    #[arg(long, env = "POCKETFARM_SWEEP_RETRY_MINUTES", default_value_t = 5)]
    pub sweep_retry_minutes: u64,

    /// Reverse-geocoding cache capacity.
    #[arg(long, env = "POCKETFARM_GEOCODE_CACHE_CAPACITY", default_value_t = 1000)]
    pub geocode_cache_capacity: usize,
}

impl Config {
    pub fn weather_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.weather_sweep_minutes * 60)
    }

    pub fn watering_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.watering_sweep_minutes * 60)
    }

    pub fn sweep_retry_delay(&self) -> Duration {
        Duration::from_secs(self.sweep_retry_minutes * 60)
    }
}
