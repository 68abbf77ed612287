//! Two-provider reverse-geocoding adapter.
//!
//! Tries the primary provider first; any failure falls through to the
//! Nominatim-shaped fallback. Both requests carry a User-Agent, which the
//! fallback provider requires.

mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::warn;

use crate::domain::geo::{Coordinates, GeocodedPlace};
use crate::domain::ports::{GeocodeSource, GeocodeSourceError};

use dto::{FallbackResponseDto, PrimaryEntryDto};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_USER_AGENT: &str = "pocketfarm-backend/0.1";

pub struct ChainedGeocodeSource {
    client: Client,
    primary_endpoint: Url,
    api_key: String,
    fallback_endpoint: Url,
}

impl ChainedGeocodeSource {
    /// Build the chain from the primary reverse endpoint and its API key,
    /// plus the fallback reverse endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        primary_endpoint: Url,
        api_key: String,
        fallback_endpoint: Url,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            primary_endpoint,
            api_key,
            fallback_endpoint,
        })
    }

    async fn try_primary(&self, coords: Coordinates) -> Result<GeocodedPlace, String> {
        let response = self
            .client
            .get(self.primary_endpoint.clone())
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("limit", "1".to_owned()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|err| err.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("primary returned {status}"));
        }
        let entries: Vec<PrimaryEntryDto> =
            response.json().await.map_err(|err| err.to_string())?;
        entries
            .into_iter()
            .next()
            .map(PrimaryEntryDto::into_place)
            .ok_or_else(|| "primary returned no entries".to_owned())
    }

    async fn try_fallback(&self, coords: Coordinates) -> Result<GeocodedPlace, String> {
        let response = self
            .client
            .get(self.fallback_endpoint.clone())
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("format", "json".to_owned()),
            ])
            .send()
            .await
            .map_err(|err| err.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("fallback returned {status}"));
        }
        let decoded: FallbackResponseDto =
            response.json().await.map_err(|err| err.to_string())?;
        Ok(decoded.into_place())
    }
}

#[async_trait]
impl GeocodeSource for ChainedGeocodeSource {
    fn provider_name(&self) -> &'static str {
        "owm+nominatim"
    }

    async fn reverse(
        &self,
        coords: Coordinates,
    ) -> Result<GeocodedPlace, GeocodeSourceError> {
        let primary_failure = match self.try_primary(coords).await {
            Ok(place) => return Ok(place),
            Err(message) => {
                warn!(error = %message, "primary geocoder failed, trying fallback");
                message
            }
        };
        self.try_fallback(coords).await.map_err(|fallback_failure| {
            GeocodeSourceError::all_providers_failed(format!(
                "primary: {primary_failure}; fallback: {fallback_failure}"
            ))
        })
    }
}
