//! Account API handlers.
//!
//! ```text
//! POST /api/v1/signup {"name":"Asha","email":"asha@example.com","password":"…"}
//! POST /api/v1/login {"email":"asha@example.com","password":"…"}
//! GET /api/v1/users
//! DELETE /api/v1/users/{id}
//! ```

use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::domain::password::{hash_password, verify_password};
use crate::domain::ports::GeocodeSourceError;
use crate::domain::{Coordinates, Error, Location, NewUser, User, UserId};
use crate::inbound::http::state::AppState;
use crate::inbound::http::ApiResult;

/// Signup request body for `POST /api/v1/signup`.
///
/// Coordinates are optional; when present they are reverse geocoded so the
/// account carries a city for weather lookups.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

fn require_field(value: &str, field: &'static str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(
            Error::invalid_request(format!("{field} must not be empty"))
                .with_details(json!({ "field": field })),
        );
    }
    Ok(())
}

/// Reverse geocode signup coordinates into a stored location.
///
/// Geocoding is best effort: provider failures degrade to coordinates only,
/// but out-of-range coordinates are a client error.
async fn resolve_location(
    state: &AppState,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Location, Error> {
    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        return Ok(Location::default());
    };
    let coords = Coordinates {
        latitude,
        longitude,
    };
    match state.geocode.resolve(coords).await {
        Ok(place) => Ok(Location {
            city: place.city,
            state: place.state,
            country: place.country,
            latitude: Some(latitude),
            longitude: Some(longitude),
        }),
        Err(err @ GeocodeSourceError::InvalidCoordinates { .. }) => Err(err.into()),
        Err(err) => {
            warn!(error = %err, "signup geocode failed, storing coordinates only");
            Ok(Location {
                latitude: Some(latitude),
                longitude: Some(longitude),
                ..Location::default()
            })
        }
    }
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "signup"
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    require_field(&payload.name, "name")?;
    require_field(&payload.email, "email")?;
    require_field(&payload.password, "password")?;

    let location = resolve_location(&state, payload.latitude, payload.longitude).await?;

    // Argon2 is deliberately slow; keep it off the async executor.
    let password = payload.password;
    let password_hash = web::block(move || hash_password(&password))
        .await
        .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
        .map_err(|err| Error::internal(format!("password hashing failed: {err}")))?;

    let user = state
        .users
        .create(NewUser {
            name: payload.name.trim().to_owned(),
            email: payload.email.trim().to_lowercase(),
            password_hash,
            phone: payload.phone.filter(|p| !p.trim().is_empty()),
            location,
        })
        .await?;
    Ok(HttpResponse::Created().json(user))
}

/// Verify credentials and return the matching profile.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<User>> {
    let payload = payload.into_inner();
    require_field(&payload.email, "email")?;
    require_field(&payload.password, "password")?;

    let record = state
        .users
        .find_by_email(payload.email.trim().to_lowercase().as_str())
        .await?
        .ok_or_else(|| Error::unauthorized("invalid credentials"))?;

    let password = payload.password;
    let verified = web::block(move || verify_password(&password, &record.password_hash))
        .await
        .map_err(|err| Error::internal(format!("password check task failed: {err}")))?;
    if !verified {
        return Err(Error::unauthorized("invalid credentials"));
    }
    Ok(web::Json(record.user))
}

/// List registered accounts.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<AppState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.users.list().await?))
}

/// Delete an account and everything it owns.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.users.delete(UserId::new(path.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}
