//! SQLite persistence adapters.

mod diesel_crop_catalog;
mod diesel_library_repository;
mod diesel_notification_repository;
mod diesel_schedule_repository;
mod diesel_user_repository;
mod functions;
pub mod models;
pub mod pool;
pub mod schema;
pub mod seed;

pub use diesel_crop_catalog::DieselCropCatalog;
pub use diesel_library_repository::DieselLibraryRepository;
pub use diesel_notification_repository::DieselNotificationRepository;
pub use diesel_schedule_repository::DieselScheduleRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use seed::seed_catalog_if_empty;
