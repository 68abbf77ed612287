//! Weather and reverse-geocoding API handlers.
//!
//! ```text
//! POST /api/v1/weather {"latitude":9.93,"longitude":76.27}
//! POST /api/v1/weather {"city":"Kochi"}
//! POST /api/v1/geocode {"latitude":9.93,"longitude":76.27}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, Error, WeatherReading};
use crate::inbound::http::state::AppState;
use crate::inbound::http::ApiResult;

/// City used when a weather request names no location at all.
const DEFAULT_CITY: &str = "Kochi";

/// Weather request body: coordinates win over a city name.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Geocode request body.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// Resolved place; unresolved fields come back as "Unknown".
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResponse {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Current weather for coordinates, a city, or the default city.
#[utoipa::path(
    post,
    path = "/api/v1/weather",
    request_body = WeatherRequest,
    responses(
        (status = 200, description = "Current weather", body = WeatherReading),
        (status = 404, description = "Unknown city", body = Error),
        (status = 503, description = "Weather provider unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["weather"],
    operation_id = "currentWeather"
)]
#[post("/weather")]
pub async fn current_weather(
    state: web::Data<AppState>,
    payload: web::Json<WeatherRequest>,
) -> ApiResult<web::Json<WeatherReading>> {
    let payload = payload.into_inner();
    let reading = match (payload.latitude, payload.longitude) {
        (Some(latitude), Some(longitude)) => {
            let coords = Coordinates {
                latitude,
                longitude,
            };
            if !coords.is_valid() {
                return Err(Error::invalid_request(format!(
                    "invalid coordinates: {latitude}, {longitude}"
                )));
            }
            state.weather.current_by_coords(coords).await?
        }
        _ => {
            let city = payload
                .city
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_CITY);
            state.weather.current_by_city(city).await?
        }
    };
    Ok(web::Json(reading))
}

/// Resolve coordinates to a place name.
#[utoipa::path(
    post,
    path = "/api/v1/geocode",
    request_body = GeocodeRequest,
    responses(
        (status = 200, description = "Resolved place", body = GeocodeResponse),
        (status = 400, description = "Invalid coordinates", body = Error),
        (status = 503, description = "All geocoding providers failed", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["weather"],
    operation_id = "reverseGeocode"
)]
#[post("/geocode")]
pub async fn reverse_geocode(
    state: web::Data<AppState>,
    payload: web::Json<GeocodeRequest>,
) -> ApiResult<web::Json<GeocodeResponse>> {
    let payload = payload.into_inner();
    let place = state
        .geocode
        .resolve(Coordinates {
            latitude: payload.latitude,
            longitude: payload.longitude,
        })
        .await?;
    let unknown = || "Unknown".to_owned();
    Ok(web::Json(GeocodeResponse {
        city: place.city.unwrap_or_else(unknown),
        state: place.state.unwrap_or_else(unknown),
        country: place.country.unwrap_or_else(unknown),
    }))
}
