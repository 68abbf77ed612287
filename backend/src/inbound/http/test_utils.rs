//! Shared fixtures for HTTP handler tests.

use std::sync::Arc;

use crate::domain::geocode_cache::GeocodeCache;
use crate::domain::ports::{
    CropCatalog, FixtureCropCatalog, FixtureNotificationRepository, FixturePushChannel,
    FixtureUserRepository, FixtureWeatherSource, LibraryRepository, MockGeocodeSource,
    MockLibraryRepository, MockNurserySource, MockScheduleRepository, NotificationRepository,
    NurserySource, ScheduleRepository, UserRepository, WeatherSource,
};
use crate::domain::sweep::TokioSleeper;
use crate::domain::{Crop, CropAttributes, CropId, GeocodeService, Notifier};
use crate::inbound::http::state::AppState;

/// Ports a test wants to replace; everything else defaults to a fixture or an
/// expectation-free mock that panics if touched.
#[derive(Default)]
pub struct StateOverrides {
    pub users: Option<Arc<dyn UserRepository>>,
    pub catalog: Option<Arc<dyn CropCatalog>>,
    pub library: Option<Arc<dyn LibraryRepository>>,
    pub schedules: Option<Arc<dyn ScheduleRepository>>,
    pub inbox: Option<Arc<dyn NotificationRepository>>,
    pub weather: Option<Arc<dyn WeatherSource>>,
    pub nurseries: Option<Arc<dyn NurserySource>>,
    pub geocode: Option<Arc<GeocodeService>>,
    pub notifier: Option<Arc<Notifier>>,
}

pub fn test_state(overrides: StateOverrides) -> AppState {
    let inbox = overrides
        .inbox
        .unwrap_or_else(|| Arc::new(FixtureNotificationRepository));
    let notifier = overrides.notifier.unwrap_or_else(|| {
        Arc::new(Notifier::new(
            Arc::clone(&inbox),
            Arc::new(FixturePushChannel),
            Arc::new(TokioSleeper),
        ))
    });
    AppState {
        users: overrides
            .users
            .unwrap_or_else(|| Arc::new(FixtureUserRepository)),
        catalog: overrides
            .catalog
            .unwrap_or_else(|| Arc::new(FixtureCropCatalog)),
        library: overrides
            .library
            .unwrap_or_else(|| Arc::new(MockLibraryRepository::new())),
        schedules: overrides
            .schedules
            .unwrap_or_else(|| Arc::new(MockScheduleRepository::new())),
        inbox,
        weather: overrides
            .weather
            .unwrap_or_else(|| Arc::new(FixtureWeatherSource)),
        nurseries: overrides
            .nurseries
            .unwrap_or_else(|| Arc::new(MockNurserySource::new())),
        geocode: overrides.geocode.unwrap_or_else(|| {
            Arc::new(GeocodeService::new(
                Arc::new(MockGeocodeSource::new()),
                GeocodeCache::new(8),
            ))
        }),
        notifier,
    }
}

/// Minimal catalog entry used across handler tests.
pub fn sample_crop(name: &str) -> Crop {
    Crop {
        id: CropId::new(1),
        name: name.to_owned(),
        image_url: None,
        scientific_name: None,
        description: None,
        origin: None,
        growing_conditions: None,
        planting_info: None,
        care_instructions: None,
        storage_info: None,
        nutritional_info: None,
        culinary_info: None,
        attributes: CropAttributes {
            crop_name: name.to_owned(),
            sunlight: "Full".to_owned(),
            water_needs: "Medium".to_owned(),
            min_area_sq_m: 0.5,
            soil_type: "Loamy".to_owned(),
            drainage: "Well-drained".to_owned(),
            potted: true,
            companion_crop_1: Some("Basil".to_owned()),
            companion_crop_2: None,
            min_temp_c: 10.0,
            max_temp_c: 35.0,
            max_humidity_pct: 85.0,
            grow_from_month: 3,
            grow_to_month: 9,
        },
    }
}
