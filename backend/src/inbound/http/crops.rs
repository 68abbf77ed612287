//! Crop catalog API handlers.
//!
//! ```text
//! GET /api/v1/crops
//! GET /api/v1/crops/{name}
//! GET /api/v1/crop-schedules
//! ```

use actix_web::{get, web};

use crate::domain::{Crop, CropScheduleTemplate, Error};
use crate::inbound::http::state::AppState;
use crate::inbound::http::ApiResult;

/// List the full crop catalog.
#[utoipa::path(
    get,
    path = "/api/v1/crops",
    responses(
        (status = 200, description = "Catalog crops", body = [Crop]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["crops"],
    operation_id = "listCrops"
)]
#[get("/crops")]
pub async fn list_crops(state: web::Data<AppState>) -> ApiResult<web::Json<Vec<Crop>>> {
    Ok(web::Json(state.catalog.list().await?))
}

/// Look up one crop by name, case-insensitively.
#[utoipa::path(
    get,
    path = "/api/v1/crops/{name}",
    params(("name" = String, Path, description = "Crop name, any casing")),
    responses(
        (status = 200, description = "Crop details", body = Crop),
        (status = 404, description = "No such crop", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["crops"],
    operation_id = "getCrop"
)]
#[get("/crops/{name}")]
pub async fn get_crop(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Crop>> {
    let name = path.into_inner();
    let crop = state
        .catalog
        .find_by_name(&name)
        .await?
        .ok_or_else(|| Error::not_found(format!("no crop named {name}")))?;
    Ok(web::Json(crop))
}

/// List the per-crop cadence templates.
#[utoipa::path(
    get,
    path = "/api/v1/crop-schedules",
    responses(
        (status = 200, description = "Schedule templates", body = [CropScheduleTemplate]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["crops"],
    operation_id = "listCropSchedules"
)]
#[get("/crop-schedules")]
pub async fn list_crop_schedules(
    state: web::Data<AppState>,
) -> ApiResult<web::Json<Vec<CropScheduleTemplate>>> {
    Ok(web::Json(state.catalog.list_templates().await?))
}
