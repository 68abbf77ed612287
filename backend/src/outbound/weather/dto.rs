//! Wire types for the current-weather provider.

use serde::Deserialize;

use crate::domain::alerts::WeatherReading;

/// Provider wind speeds arrive in metres per second with metric units.
const MPS_TO_KMH: f64 = 3.6;

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherDto {
    pub main: MainDto,
    #[serde(default)]
    pub wind: WindDto,
    #[serde(default)]
    pub weather: Vec<ConditionDto>,
}

#[derive(Debug, Deserialize)]
pub struct MainDto {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindDto {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub struct ConditionDto {
    pub main: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl CurrentWeatherDto {
    pub fn into_reading(self) -> WeatherReading {
        let (condition, icon) = self
            .weather
            .into_iter()
            .next()
            .map(|c| (c.main, c.icon))
            .unwrap_or_else(|| ("Unknown".to_owned(), None));
        WeatherReading {
            temperature_c: self.main.temp,
            humidity_pct: self.main.humidity,
            wind_speed_kmh: self.wind.speed * MPS_TO_KMH,
            condition,
            icon,
        }
    }
}
