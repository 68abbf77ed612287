//! Domain model and ports.

pub mod alert_service;
pub mod alerts;
pub mod crop;
pub mod error;
pub mod geo;
pub mod geocode_cache;
pub mod geocode_service;
pub mod notifications;
pub mod notifier;
pub mod nursery;
pub mod password;
pub mod ports;
pub mod recommendation;
pub mod sweep;
pub mod user;
pub mod watering;
pub mod watering_service;

pub use alert_service::WeatherAlertSweep;
pub use alerts::{Alert, AlertKind, AlertTrigger, WeatherReading};
pub use crop::{Crop, CropAttributes, CropId, CropScheduleTemplate};
pub use error::{Error, ErrorCode};
pub use geo::{Coordinates, GeocodedPlace};
pub use geocode_service::GeocodeService;
pub use notifications::{Notification, NotificationPreferences};
pub use notifier::Notifier;
pub use nursery::{Nursery, NurseryPoi};
pub use recommendation::RecommendationQuery;
pub use user::{AlertRecipient, AuthRecord, Location, NewUser, User, UserId};
pub use watering::{OverdueSchedule, ScheduleView, WateringSchedule};
pub use watering_service::OverdueWateringSweep;
