//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod crop_catalog;
mod geocode_source;
mod library_repository;
mod notification_repository;
mod nursery_source;
mod push_channel;
mod schedule_repository;
mod user_repository;
mod weather_source;

#[cfg(test)]
pub use crop_catalog::MockCropCatalog;
pub use crop_catalog::{CropCatalog, CropCatalogError, FixtureCropCatalog};
#[cfg(test)]
pub use geocode_source::MockGeocodeSource;
pub use geocode_source::{GeocodeSource, GeocodeSourceError};
#[cfg(test)]
pub use library_repository::MockLibraryRepository;
pub use library_repository::{LibraryAddOutcome, LibraryRepository, LibraryRepositoryError};
#[cfg(test)]
pub use notification_repository::MockNotificationRepository;
pub use notification_repository::{
    FixtureNotificationRepository, NotificationRepository, NotificationRepositoryError,
};
#[cfg(test)]
pub use nursery_source::MockNurserySource;
pub use nursery_source::{NurserySource, NurserySourceError};
#[cfg(test)]
pub use push_channel::MockPushChannel;
pub use push_channel::{FixturePushChannel, PushChannel, PushFrame};
#[cfg(test)]
pub use schedule_repository::MockScheduleRepository;
pub use schedule_repository::{
    ScheduleCreateOutcome, ScheduleRepository, ScheduleRepositoryError,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
#[cfg(test)]
pub use weather_source::MockWeatherSource;
pub use weather_source::{FixtureWeatherSource, WeatherSource, WeatherSourceError};
