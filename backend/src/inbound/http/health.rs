//! Liveness and readiness probes.

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::inbound::http::state::AppState;
use crate::inbound::http::ApiResult;

/// Process liveness; always succeeds while the server is up.
#[utoipa::path(
    get,
    path = "/livez",
    responses((status = 200, description = "Process is alive")),
    tags = ["health"],
    operation_id = "livez"
)]
#[get("/livez")]
pub async fn livez() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Readiness: the store must answer a query before traffic is routed here.
#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Ready to serve traffic"),
        (status = 500, description = "Store unavailable")
    ),
    tags = ["health"],
    operation_id = "readyz"
)]
#[get("/readyz")]
pub async fn readyz(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    state.catalog.list_templates().await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "ready" })))
}
