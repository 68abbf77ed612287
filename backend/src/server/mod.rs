//! Server construction: port wiring, route table, and background sweeps.

mod config;

pub use config::Config;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::geocode_cache::GeocodeCache;
use crate::domain::ports::PushChannel;
use crate::domain::sweep::{TaskSupervisor, TokioSleeper};
use crate::domain::{GeocodeService, Notifier, OverdueWateringSweep, WeatherAlertSweep};
use crate::inbound::http::{
    crops, health, library, notifications, nurseries, recommendations, schedules, users, weather,
    AppState,
};
use crate::inbound::ws::{self, SessionRegistry};
use crate::middleware::Trace;
use crate::outbound::persistence::{
    seed_catalog_if_empty, DbPool, DieselCropCatalog, DieselLibraryRepository,
    DieselNotificationRepository, DieselScheduleRepository, DieselUserRepository, PoolConfig,
};
use crate::outbound::{ChainedGeocodeSource, OverpassNurserySource, OwmWeatherSource};

fn io_other(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

/// Open the store, run migrations, seed the catalog, and wire every port.
pub async fn build_state(config: &Config) -> std::io::Result<(AppState, Arc<SessionRegistry>)> {
    let pool = DbPool::new(
        PoolConfig::new(config.database_path.clone()).with_max_size(config.pool_max_size),
    )
    .map_err(io_other)?;
    pool.run_migrations().map_err(io_other)?;
    let seeded = pool.run(seed_catalog_if_empty).await.map_err(io_other)?;
    if seeded > 0 {
        info!(crops = seeded, "seeded crop catalog");
    }

    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let catalog = Arc::new(DieselCropCatalog::new(pool.clone()));
    let library = Arc::new(DieselLibraryRepository::new(pool.clone()));
    let schedules = Arc::new(DieselScheduleRepository::new(pool.clone()));
    let inbox = Arc::new(DieselNotificationRepository::new(pool));

    let weather = Arc::new(
        OwmWeatherSource::new(
            config.weather_endpoint.clone(),
            config.weather_api_key.clone(),
        )
        .map_err(io_other)?,
    );
    let geocode_source = Arc::new(
        ChainedGeocodeSource::new(
            config.geocode_primary_endpoint.clone(),
            config.weather_api_key.clone(),
            config.geocode_fallback_endpoint.clone(),
        )
        .map_err(io_other)?,
    );
    let geocode = Arc::new(GeocodeService::new(
        geocode_source,
        GeocodeCache::new(config.geocode_cache_capacity),
    ));
    let nurseries = Arc::new(
        OverpassNurserySource::new(config.overpass_endpoint.clone()).map_err(io_other)?,
    );

    let registry = Arc::new(SessionRegistry::new());
    let push: Arc<dyn PushChannel> = registry.clone();
    let notifier = Arc::new(Notifier::new(
        inbox.clone(),
        push,
        Arc::new(TokioSleeper),
    ));

    let state = AppState {
        users,
        catalog,
        library,
        schedules,
        inbox,
        weather,
        nurseries,
        geocode,
        notifier,
    };
    Ok((state, registry))
}

/// Spawn the two background sweeps under their supervisors.
pub fn spawn_sweeps(config: &Config, state: &AppState, registry: &Arc<SessionRegistry>) {
    let push: Arc<dyn PushChannel> = registry.clone();
    let weather_sweep = WeatherAlertSweep::new(
        state.users.clone(),
        state.weather.clone(),
        state.inbox.clone(),
        push,
        state.notifier.clone(),
    );
    tokio::spawn(
        TaskSupervisor::new(
            weather_sweep,
            TokioSleeper,
            config.weather_sweep_interval(),
            config.sweep_retry_delay(),
        )
        .run(),
    );

    let watering_sweep = OverdueWateringSweep::new(
        state.schedules.clone(),
        state.users.clone(),
        state.inbox.clone(),
        state.notifier.clone(),
    );
    tokio::spawn(
        TaskSupervisor::new(
            watering_sweep,
            TokioSleeper,
            config.watering_sweep_interval(),
            config.sweep_retry_delay(),
        )
        .run(),
    );
}

fn build_app(
    state: web::Data<AppState>,
    registry: web::Data<SessionRegistry>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(users::signup)
        .service(users::login)
        .service(users::list_users)
        .service(users::delete_user)
        .service(crops::list_crops)
        .service(crops::list_crop_schedules)
        .service(crops::get_crop)
        .service(library::add_crop)
        .service(library::remove_crop)
        .service(library::list_library)
        .service(schedules::create_schedule)
        .service(schedules::confirm_watering)
        .service(schedules::list_schedules)
        .service(schedules::delete_schedule)
        .service(notifications::list_notifications)
        .service(notifications::mark_all_read)
        .service(notifications::clear_notifications)
        .service(notifications::get_preferences)
        .service(notifications::update_preferences)
        .service(weather::current_weather)
        .service(weather::reverse_geocode)
        .service(nurseries::find_nurseries)
        .service(recommendations::predict)
        .service(recommendations::recommendations);

    let app = App::new()
        .app_data(state)
        .app_data(registry)
        .wrap(Trace)
        .service(api)
        .service(ws::connect)
        .service(health::livez)
        .service(health::readyz);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind and start the HTTP server.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when the socket cannot be bound.
pub fn create_server(
    config: &Config,
    state: AppState,
    registry: Arc<SessionRegistry>,
) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let registry = web::Data::from(registry);
    let server = HttpServer::new(move || build_app(state.clone(), registry.clone()))
        .bind(config.bind_addr)?
        .run();
    Ok(server)
}
