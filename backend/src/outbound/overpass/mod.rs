//! Reqwest-backed Overpass nursery source adapter.
//!
//! Owns transport details only: query text construction, timeout and HTTP
//! error mapping, and JSON decoding into domain POIs.

mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use crate::domain::geo::Coordinates;
use crate::domain::nursery::NurseryPoi;
use crate::domain::ports::{NurserySource, NurserySourceError};

use dto::OverpassResponseDto;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = "pocketfarm-backend/0.1";
const QUERY_TIMEOUT_SECONDS: u32 = 25;

/// Tag selectors identifying plant nurseries and garden shops.
const SELECTORS: &[(&str, &str)] = &[
    ("shop", "garden_centre"),
    ("shop", "agrarian"),
    ("shop", "florist"),
    ("landuse", "plant_nursery"),
];

pub struct OverpassNurserySource {
    client: Client,
    endpoint: Url,
}

impl OverpassNurserySource {
    /// Build an adapter posting to one Overpass endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

fn build_query(coords: Coordinates, radius_m: u32) -> String {
    let mut body = String::new();
    for (key, value) in SELECTORS {
        for kind in ["node", "way"] {
            body.push_str(&format!(
                "{kind}[\"{key}\"=\"{value}\"](around:{radius_m},{lat},{lon});",
                lat = coords.latitude,
                lon = coords.longitude,
            ));
        }
    }
    format!("[out:json][timeout:{QUERY_TIMEOUT_SECONDS}];({body});out center;")
}

fn map_transport_error(err: reqwest::Error) -> NurserySourceError {
    if err.is_timeout() {
        NurserySourceError::unreachable("request timed out")
    } else {
        NurserySourceError::unreachable(err.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &str) -> NurserySourceError {
    let message = body.chars().take(200).collect::<String>();
    if status == StatusCode::TOO_MANY_REQUESTS {
        NurserySourceError::rate_limited(message)
    } else {
        NurserySourceError::upstream(status.as_u16(), message)
    }
}

#[async_trait]
impl NurserySource for OverpassNurserySource {
    async fn find_near(
        &self,
        coords: Coordinates,
        radius_m: u32,
    ) -> Result<Vec<NurseryPoi>, NurserySourceError> {
        let query = build_query(coords, radius_m);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("data", query)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }

        let decoded: OverpassResponseDto = serde_json::from_str(&body)
            .map_err(|err| NurserySourceError::decode(err.to_string()))?;
        Ok(decoded.into_pois())
    }
}
