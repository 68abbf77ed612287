//! HTTP mapping for domain errors.
//!
//! Keeps the domain error type transport agnostic while giving every handler
//! a consistent JSON error schema and status mapping. Port errors convert
//! into domain errors here so handlers can use `?` throughout.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::error;

use crate::domain::ports::{
    CropCatalogError, GeocodeSourceError, LibraryRepositoryError, NotificationRepositoryError,
    NurserySourceError, ScheduleRepositoryError, UserRepositoryError, WeatherSourceError,
};
use crate::domain::{Error, ErrorCode};
use crate::middleware::TRACE_ID_HEADER;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(err: &Error) -> Error {
    if matches!(err.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        redacted.trace_id.clone_from(&err.trace_id);
        redacted
    } else {
        err.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id.as_deref() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

impl From<UserRepositoryError> for Error {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::EmailTaken { email } => {
                Error::conflict(format!("email already registered: {email}"))
            }
            UserRepositoryError::NotFound { user_id } => {
                Error::not_found(format!("no user with id {user_id}"))
            }
            other => Error::internal(other.to_string()),
        }
    }
}

impl From<CropCatalogError> for Error {
    fn from(err: CropCatalogError) -> Self {
        Error::internal(err.to_string())
    }
}

impl From<LibraryRepositoryError> for Error {
    fn from(err: LibraryRepositoryError) -> Self {
        match err {
            LibraryRepositoryError::UserMissing { user_id } => {
                Error::not_found(format!("no user with id {user_id}"))
            }
            LibraryRepositoryError::CropMissing { name } => {
                Error::not_found(format!("no crop named {name}"))
            }
            other => Error::internal(other.to_string()),
        }
    }
}

impl From<ScheduleRepositoryError> for Error {
    fn from(err: ScheduleRepositoryError) -> Self {
        match err {
            ScheduleRepositoryError::UserMissing { user_id } => {
                Error::not_found(format!("no user with id {user_id}"))
            }
            ScheduleRepositoryError::CropMissing { name } => {
                Error::not_found(format!("no crop named {name}"))
            }
            ScheduleRepositoryError::TemplateMissing { name } => {
                Error::not_found(format!("no schedule template for crop {name}"))
            }
            other => Error::internal(other.to_string()),
        }
    }
}

impl From<NotificationRepositoryError> for Error {
    fn from(err: NotificationRepositoryError) -> Self {
        Error::internal(err.to_string())
    }
}

impl From<WeatherSourceError> for Error {
    fn from(err: WeatherSourceError) -> Self {
        match err {
            WeatherSourceError::CityNotFound { city } => {
                Error::not_found(format!("unknown city: {city}"))
            }
            other => Error::upstream(other.to_string()),
        }
    }
}

impl From<GeocodeSourceError> for Error {
    fn from(err: GeocodeSourceError) -> Self {
        match err {
            GeocodeSourceError::InvalidCoordinates {
                latitude,
                longitude,
            } => Error::invalid_request(format!("invalid coordinates: {latitude}, {longitude}")),
            other => Error::upstream(other.to_string()),
        }
    }
}

impl From<NurserySourceError> for Error {
    fn from(err: NurserySourceError) -> Self {
        Error::upstream(err.to_string())
    }
}
