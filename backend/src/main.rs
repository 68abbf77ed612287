//! Backend entry-point: config, store, background sweeps, HTTP server.

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use pocketfarm_backend::server::{build_state, create_server, spawn_sweeps, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = Config::parse();
    let (state, registry) = build_state(&config).await?;
    spawn_sweeps(&config, &state, &registry);

    info!(addr = %config.bind_addr, "starting server");
    create_server(&config, state, registry)?.await
}
