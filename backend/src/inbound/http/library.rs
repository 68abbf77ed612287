//! Personal crop library API handlers.
//!
//! ```text
//! POST /api/v1/library {"userId":1,"cropName":"Tomato"}
//! DELETE /api/v1/library {"userId":1,"cropName":"Tomato"}
//! GET /api/v1/library/{user_id}
//! ```

use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::ports::LibraryAddOutcome;
use crate::domain::{Crop, Error, UserId};
use crate::inbound::http::state::AppState;
use crate::inbound::http::ApiResult;

/// Request body naming one user-crop pair.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntryRequest {
    pub user_id: i32,
    pub crop_name: String,
}

/// Outcome body for library mutations.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntryResponse {
    pub status: &'static str,
}

/// Add a crop to a user's library. Adding a crop that is already present is
/// a no-op success.
#[utoipa::path(
    post,
    path = "/api/v1/library",
    request_body = LibraryEntryRequest,
    responses(
        (status = 201, description = "Crop added", body = LibraryEntryResponse),
        (status = 200, description = "Crop was already in the library", body = LibraryEntryResponse),
        (status = 404, description = "Unknown user or crop", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["library"],
    operation_id = "addLibraryCrop"
)]
#[post("/library")]
pub async fn add_crop(
    state: web::Data<AppState>,
    payload: web::Json<LibraryEntryRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let outcome = state
        .library
        .add(UserId::new(payload.user_id), &payload.crop_name)
        .await?;
    Ok(match outcome {
        LibraryAddOutcome::Added => {
            HttpResponse::Created().json(LibraryEntryResponse { status: "added" })
        }
        LibraryAddOutcome::AlreadyPresent => HttpResponse::Ok().json(LibraryEntryResponse {
            status: "already_present",
        }),
    })
}

/// Remove a crop from a user's library.
#[utoipa::path(
    delete,
    path = "/api/v1/library",
    request_body = LibraryEntryRequest,
    responses(
        (status = 200, description = "Crop removed", body = LibraryEntryResponse),
        (status = 404, description = "Entry, user, or crop not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["library"],
    operation_id = "removeLibraryCrop"
)]
#[delete("/library")]
pub async fn remove_crop(
    state: web::Data<AppState>,
    payload: web::Json<LibraryEntryRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let removed = state
        .library
        .remove(UserId::new(payload.user_id), &payload.crop_name)
        .await?;
    if !removed {
        return Err(Error::not_found(format!(
            "{} is not in the library of user {}",
            payload.crop_name, payload.user_id
        )));
    }
    Ok(HttpResponse::Ok().json(LibraryEntryResponse { status: "removed" }))
}

/// List the crops in a user's library.
#[utoipa::path(
    get,
    path = "/api/v1/library/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Library crops", body = [Crop]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["library"],
    operation_id = "listLibraryCrops"
)]
#[get("/library/{user_id}")]
pub async fn list_library(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<Crop>>> {
    let crops = state.library.list(UserId::new(path.into_inner())).await?;
    Ok(web::Json(crops))
}
