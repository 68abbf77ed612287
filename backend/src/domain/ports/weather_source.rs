//! Port for the live weather provider.

use async_trait::async_trait;

use crate::domain::alerts::WeatherReading;
use crate::domain::geo::Coordinates;

use super::define_port_error;

define_port_error! {
    /// Errors raised by weather source adapters.
    pub enum WeatherSourceError {
        /// The provider rejected the request or returned an error status.
        Upstream { status: u16, message: String } =>
            "weather provider returned {status}: {message}",
        /// The provider could not be reached.
        Unreachable { message: String } =>
            "weather provider unreachable: {message}",
        /// The response body did not match the expected shape.
        Decode { message: String } =>
            "weather response malformed: {message}",
        /// The provider does not know the requested city.
        CityNotFound { city: String } =>
            "unknown city: {city}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Current weather for a named city.
    async fn current_by_city(&self, city: &str) -> Result<WeatherReading, WeatherSourceError>;

    /// Current weather for a coordinate pair.
    async fn current_by_coords(
        &self,
        coords: Coordinates,
    ) -> Result<WeatherReading, WeatherSourceError>;
}

/// Fixture source reporting mild, dry weather everywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureWeatherSource;

impl FixtureWeatherSource {
    fn reading() -> WeatherReading {
        WeatherReading {
            temperature_c: 24.0,
            humidity_pct: 55.0,
            wind_speed_kmh: 8.0,
            condition: "Clear".to_owned(),
            icon: None,
        }
    }
}

#[async_trait]
impl WeatherSource for FixtureWeatherSource {
    async fn current_by_city(&self, _city: &str) -> Result<WeatherReading, WeatherSourceError> {
        Ok(Self::reading())
    }

    async fn current_by_coords(
        &self,
        _coords: Coordinates,
    ) -> Result<WeatherReading, WeatherSourceError> {
        Ok(Self::reading())
    }
}
