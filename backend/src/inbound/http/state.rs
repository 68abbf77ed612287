//! Shared application state handed to every HTTP handler.

use std::sync::Arc;

use crate::domain::ports::{
    CropCatalog, LibraryRepository, NotificationRepository, NurserySource, ScheduleRepository,
    UserRepository, WeatherSource,
};
use crate::domain::{GeocodeService, Notifier};

/// Port handles wired once at startup and cloned into workers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub catalog: Arc<dyn CropCatalog>,
    pub library: Arc<dyn LibraryRepository>,
    pub schedules: Arc<dyn ScheduleRepository>,
    pub inbox: Arc<dyn NotificationRepository>,
    pub weather: Arc<dyn WeatherSource>,
    pub nurseries: Arc<dyn NurserySource>,
    pub geocode: Arc<GeocodeService>,
    pub notifier: Arc<Notifier>,
}
