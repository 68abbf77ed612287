//! Reqwest-backed current-weather source adapter.
//!
//! Owns transport details only: request construction, timeout and HTTP error
//! mapping, and JSON decoding into domain readings. A 404 for a named city is
//! retried once against a fallback city before being reported.

mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::warn;

use crate::domain::geo::Coordinates;
use crate::domain::ports::{WeatherSource, WeatherSourceError};
use crate::domain::WeatherReading;

use dto::CurrentWeatherDto;

const FALLBACK_CITY: &str = "Kochi";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct OwmWeatherSource {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl OwmWeatherSource {
    /// Build an adapter against the provider's current-weather endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, api_key: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    async fn fetch(
        &self,
        params: &[(&str, String)],
    ) -> Result<Result<WeatherReading, StatusCode>, WeatherSourceError> {
        let mut query: Vec<(&str, String)> = vec![
            ("appid", self.api_key.clone()),
            ("units", "metric".to_owned()),
        ];
        query.extend_from_slice(params);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::NOT_FOUND {
                return Ok(Err(status));
            }
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherSourceError::upstream(status.as_u16(), body));
        }

        let decoded: CurrentWeatherDto = response
            .json()
            .await
            .map_err(|err| WeatherSourceError::decode(err.to_string()))?;
        Ok(Ok(decoded.into_reading()))
    }
}

fn map_transport_error(err: reqwest::Error) -> WeatherSourceError {
    WeatherSourceError::unreachable(err.to_string())
}

#[async_trait]
impl WeatherSource for OwmWeatherSource {
    async fn current_by_city(&self, city: &str) -> Result<WeatherReading, WeatherSourceError> {
        match self.fetch(&[("q", city.to_owned())]).await? {
            Ok(reading) => return Ok(reading),
            Err(_) if city != FALLBACK_CITY => {
                warn!(city, "city unknown to weather provider, trying fallback");
            }
            Err(_) => return Err(WeatherSourceError::city_not_found(city)),
        }
        match self.fetch(&[("q", FALLBACK_CITY.to_owned())]).await? {
            Ok(reading) => Ok(reading),
            Err(_) => Err(WeatherSourceError::city_not_found(city)),
        }
    }

    async fn current_by_coords(
        &self,
        coords: Coordinates,
    ) -> Result<WeatherReading, WeatherSourceError> {
        match self
            .fetch(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
            ])
            .await?
        {
            Ok(reading) => Ok(reading),
            Err(status) => Err(WeatherSourceError::upstream(
                status.as_u16(),
                "no weather for coordinates",
            )),
        }
    }
}
