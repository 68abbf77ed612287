//! Shared fixtures for integration tests: a migrated, seeded, file-backed
//! store in a temporary directory.

use pocketfarm_backend::outbound::persistence::{
    seed_catalog_if_empty, DbPool, PoolConfig,
};
use tempfile::TempDir;

/// Build a pool over a fresh database file. The `TempDir` must outlive the
/// pool or the file disappears underneath it.
pub async fn seeded_pool() -> (TempDir, DbPool) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir
        .path()
        .join("pocketfarm.db")
        .to_string_lossy()
        .into_owned();
    let pool = DbPool::new(PoolConfig::new(path)).expect("build pool");
    pool.run_migrations().expect("run migrations");
    pool.run(seed_catalog_if_empty).await.expect("seed catalog");
    (dir, pool)
}
