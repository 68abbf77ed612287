//! OpenAPI documentation configuration.
//!
//! The generated specification feeds Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::recommendation::RecommendationQuery;
use crate::domain::{
    Alert, AlertKind, AlertTrigger, Crop, CropAttributes, CropScheduleTemplate, Error, ErrorCode,
    Location, Notification, NotificationPreferences, Nursery, ScheduleView, User, WeatherReading,
};
use crate::inbound::http::library::{LibraryEntryRequest, LibraryEntryResponse};
use crate::inbound::http::notifications::InboxCountResponse;
use crate::inbound::http::recommendations::{
    RecommendationRequest, RecommendationResponse, RecommendedCrop,
};
use crate::inbound::http::schedules::{ConfirmResponse, SchedulePairRequest};
use crate::inbound::http::users::{LoginRequest, SignupRequest};
use crate::inbound::http::weather::{GeocodeRequest, GeocodeResponse, WeatherRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PocketFarm backend API",
        description = "Gardening assistant: accounts, crop catalog, watering \
                       schedules, weather alerts, notifications, and nearby \
                       nursery lookup."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::signup,
        crate::inbound::http::users::login,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::crops::list_crops,
        crate::inbound::http::crops::get_crop,
        crate::inbound::http::crops::list_crop_schedules,
        crate::inbound::http::library::add_crop,
        crate::inbound::http::library::remove_crop,
        crate::inbound::http::library::list_library,
        crate::inbound::http::schedules::create_schedule,
        crate::inbound::http::schedules::list_schedules,
        crate::inbound::http::schedules::delete_schedule,
        crate::inbound::http::schedules::confirm_watering,
        crate::inbound::http::notifications::list_notifications,
        crate::inbound::http::notifications::mark_all_read,
        crate::inbound::http::notifications::clear_notifications,
        crate::inbound::http::notifications::get_preferences,
        crate::inbound::http::notifications::update_preferences,
        crate::inbound::http::weather::current_weather,
        crate::inbound::http::weather::reverse_geocode,
        crate::inbound::http::nurseries::find_nurseries,
        crate::inbound::http::recommendations::predict,
        crate::inbound::http::recommendations::recommendations,
        crate::inbound::http::health::livez,
        crate::inbound::http::health::readyz,
    ),
    components(schemas(
        Error,
        ErrorCode,
        User,
        Location,
        SignupRequest,
        LoginRequest,
        Crop,
        CropAttributes,
        CropScheduleTemplate,
        LibraryEntryRequest,
        LibraryEntryResponse,
        SchedulePairRequest,
        ScheduleView,
        ConfirmResponse,
        Notification,
        NotificationPreferences,
        InboxCountResponse,
        WeatherRequest,
        WeatherReading,
        Alert,
        AlertKind,
        AlertTrigger,
        GeocodeRequest,
        GeocodeResponse,
        Nursery,
        RecommendationQuery,
        RecommendationRequest,
        RecommendedCrop,
        RecommendationResponse,
    )),
    tags(
        (name = "users", description = "Account registration and lookup"),
        (name = "crops", description = "Crop catalog and cadence templates"),
        (name = "library", description = "Per-user crop libraries"),
        (name = "schedules", description = "Watering schedules"),
        (name = "notifications", description = "Inbox and preferences"),
        (name = "weather", description = "Weather readings and geocoding"),
        (name = "nurseries", description = "Nearby nursery lookup"),
        (name = "recommendations", description = "Crop recommendation engine"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
