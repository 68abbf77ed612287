//! Crop recommendation API handlers.
//!
//! `POST /predict` is the pure evaluator: the caller supplies every input.
//! `POST /recommendations` resolves the missing inputs itself: live weather
//! for the user's stored location and the current calendar month.

use actix_web::{post, web};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::recommendation::{recommend, RecommendationQuery};
use crate::domain::{Coordinates, Crop, CropAttributes, Error, User, UserId, WeatherReading};
use crate::inbound::http::state::AppState;
use crate::inbound::http::ApiResult;

/// Request body for `POST /api/v1/recommendations`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub user_id: i32,
    pub sunlight: String,
    pub water_needs: String,
    pub area_sq_m: f64,
}

/// One recommended crop with its catalog details and companions.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCrop {
    pub crop: Crop,
    pub companions: Vec<String>,
}

/// Response body for `POST /api/v1/recommendations`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub weather: WeatherReading,
    pub recommendations: Vec<RecommendedCrop>,
}

/// Evaluate the recommendation filter with caller-supplied inputs.
#[utoipa::path(
    post,
    path = "/api/v1/predict",
    request_body = RecommendationQuery,
    responses(
        (status = 200, description = "Matching crops", body = [CropAttributes]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recommendations"],
    operation_id = "predict"
)]
#[post("/predict")]
pub async fn predict(
    state: web::Data<AppState>,
    payload: web::Json<RecommendationQuery>,
) -> ApiResult<web::Json<Vec<CropAttributes>>> {
    let catalog = state.catalog.list_attributes().await?;
    let matches = recommend(&catalog, &payload)
        .into_iter()
        .cloned()
        .collect();
    Ok(web::Json(matches))
}

/// Weather lookup keyed off whatever location detail the account carries.
async fn weather_for_user(state: &AppState, user: &User) -> Result<WeatherReading, Error> {
    if let (Some(latitude), Some(longitude)) =
        (user.location.latitude, user.location.longitude)
    {
        let coords = Coordinates {
            latitude,
            longitude,
        };
        return Ok(state.weather.current_by_coords(coords).await?);
    }
    if let Some(city) = user.location.city.as_deref().filter(|c| !c.is_empty()) {
        return Ok(state.weather.current_by_city(city).await?);
    }
    Err(Error::invalid_request(format!(
        "user {} has no stored location for weather-based recommendations",
        user.id
    )))
}

/// Recommend crops for a user from live weather and the current month.
#[utoipa::path(
    post,
    path = "/api/v1/recommendations",
    request_body = RecommendationRequest,
    responses(
        (status = 200, description = "Recommendations", body = RecommendationResponse),
        (status = 400, description = "User has no stored location", body = Error),
        (status = 404, description = "No such user", body = Error),
        (status = 503, description = "Weather provider unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recommendations"],
    operation_id = "recommendations"
)]
#[post("/recommendations")]
pub async fn recommendations(
    state: web::Data<AppState>,
    payload: web::Json<RecommendationRequest>,
) -> ApiResult<web::Json<RecommendationResponse>> {
    let payload = payload.into_inner();
    let user = state
        .users
        .find_by_id(UserId::new(payload.user_id))
        .await?
        .ok_or_else(|| Error::not_found(format!("no user with id {}", payload.user_id)))?;

    let reading = weather_for_user(&state, &user).await?;
    let query = RecommendationQuery {
        sunlight: payload.sunlight,
        water_needs: payload.water_needs,
        temperature_c: reading.temperature_c,
        humidity_pct: reading.humidity_pct,
        area_sq_m: payload.area_sq_m,
        month: Utc::now().month(),
    };

    let attributes = state.catalog.list_attributes().await?;
    let matched: Vec<&CropAttributes> = recommend(&attributes, &query);
    let crops = state.catalog.list().await?;
    let picks = matched
        .into_iter()
        .filter_map(|attrs| {
            crops
                .iter()
                .find(|crop| crop.name.eq_ignore_ascii_case(&attrs.crop_name))
                .map(|crop| RecommendedCrop {
                    crop: crop.clone(),
                    companions: attrs.companions(),
                })
        })
        .collect();

    Ok(web::Json(RecommendationResponse {
        weather: reading,
        recommendations: picks,
    }))
}
