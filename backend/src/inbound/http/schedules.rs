//! Watering schedule API handlers.
//!
//! ```text
//! POST /api/v1/schedules {"userId":1,"cropName":"Tomato"}
//! GET /api/v1/schedules/{user_id}
//! DELETE /api/v1/schedules/{user_id}/{crop_name}
//! POST /api/v1/schedules/confirm {"userId":1,"cropName":"Tomato"}
//! ```

use actix_web::{delete, get, post, web, HttpResponse};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::ports::{PushFrame, ScheduleCreateOutcome};
use crate::domain::{Error, ScheduleView, UserId};
use crate::inbound::http::state::AppState;
use crate::inbound::http::ApiResult;

/// Request body naming one user-crop schedule pair.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePairRequest {
    pub user_id: i32,
    pub crop_name: String,
}

/// Response body for a confirmed watering.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmResponse {
    pub next_watering: NaiveDate,
}

/// Start a watering schedule for a crop from its catalog template.
#[utoipa::path(
    post,
    path = "/api/v1/schedules",
    request_body = SchedulePairRequest,
    responses(
        (status = 201, description = "Schedule created", body = ScheduleView),
        (status = 200, description = "Schedule already existed; unchanged"),
        (status = 404, description = "Unknown user, crop, or template", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["schedules"],
    operation_id = "createSchedule"
)]
#[post("/schedules")]
pub async fn create_schedule(
    state: web::Data<AppState>,
    payload: web::Json<SchedulePairRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let today = Utc::now().date_naive();
    let outcome = state
        .schedules
        .create_for_crop(UserId::new(payload.user_id), &payload.crop_name, today)
        .await?;
    Ok(match outcome {
        ScheduleCreateOutcome::Created(view) => HttpResponse::Created().json(view),
        ScheduleCreateOutcome::AlreadyScheduled => HttpResponse::Ok()
            .json(serde_json::json!({ "status": "already_scheduled" })),
    })
}

/// List a user's schedules joined with catalog data.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Schedules", body = [ScheduleView]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["schedules"],
    operation_id = "listSchedules"
)]
#[get("/schedules/{user_id}")]
pub async fn list_schedules(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<ScheduleView>>> {
    let views = state
        .schedules
        .list_for_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(views))
}

/// Delete the schedule for a user-crop pair.
#[utoipa::path(
    delete,
    path = "/api/v1/schedules/{user_id}/{crop_name}",
    params(
        ("user_id" = i32, Path, description = "User identifier"),
        ("crop_name" = String, Path, description = "Crop name")
    ),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 404, description = "No schedule for the pair", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["schedules"],
    operation_id = "deleteSchedule"
)]
#[delete("/schedules/{user_id}/{crop_name}")]
pub async fn delete_schedule(
    state: web::Data<AppState>,
    path: web::Path<(i32, String)>,
) -> ApiResult<HttpResponse> {
    let (user_id, crop_name) = path.into_inner();
    let deleted = state
        .schedules
        .delete(UserId::new(user_id), &crop_name)
        .await?;
    if !deleted {
        return Err(Error::not_found(format!(
            "no schedule for {crop_name} and user {user_id}"
        )));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// Confirm a watering: record it, recompute the next date, and notify.
#[utoipa::path(
    post,
    path = "/api/v1/schedules/confirm",
    request_body = SchedulePairRequest,
    responses(
        (status = 200, description = "Watering recorded", body = ConfirmResponse),
        (status = 404, description = "No schedule for the pair", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["schedules"],
    operation_id = "confirmWatering"
)]
#[post("/schedules/confirm")]
pub async fn confirm_watering(
    state: web::Data<AppState>,
    payload: web::Json<SchedulePairRequest>,
) -> ApiResult<web::Json<ConfirmResponse>> {
    let payload = payload.into_inner();
    let user_id = UserId::new(payload.user_id);
    let now = Utc::now().naive_utc();
    let next_watering = state
        .schedules
        .record_watering(user_id, &payload.crop_name, now.date())
        .await?
        .ok_or_else(|| {
            Error::not_found(format!(
                "no schedule for {} and user {}",
                payload.crop_name, payload.user_id
            ))
        })?;

    // The watering is already recorded; a lost confirmation entry is not
    // worth failing the request over.
    let message = format!(
        "{} watered! Next watering on {next_watering}.",
        payload.crop_name
    );
    let frame = PushFrame::WateringReminder {
        crop_name: payload.crop_name.clone(),
        message: message.clone(),
    };
    if let Err(err) = state.notifier.notify(user_id, &message, now, frame).await {
        warn!(user_id = %user_id, error = %err, "watering confirmation notification failed");
    }

    Ok(web::Json(ConfirmResponse { next_watering }))
}
