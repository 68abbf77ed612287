//! Diesel-backed read-only crop catalog.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::crop::{Crop, CropAttributes, CropScheduleTemplate};
use crate::domain::ports::{CropCatalog, CropCatalogError};

use super::functions::lower;
use super::models::{CropRow, TemplateRow};
use super::pool::{DbPool, PoolError};
use super::schema::{crop_schedule_templates, crops};

pub struct DieselCropCatalog {
    pool: DbPool,
}

impl DieselCropCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(err: PoolError) -> CropCatalogError {
    match err {
        PoolError::Build { message } | PoolError::Checkout { message } => {
            CropCatalogError::connection(message)
        }
        other => CropCatalogError::query(other.to_string()),
    }
}

#[async_trait]
impl CropCatalog for DieselCropCatalog {
    async fn list(&self) -> Result<Vec<Crop>, CropCatalogError> {
        let rows = self
            .pool
            .run(|conn| {
                crops::table
                    .order(crops::name.asc())
                    .select(CropRow::as_select())
                    .load(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(rows.into_iter().map(CropRow::into_crop).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Crop>, CropCatalogError> {
        let needle = name.trim().to_lowercase();
        let row = self
            .pool
            .run(move |conn| {
                crops::table
                    .filter(lower(crops::name).eq(&needle))
                    .select(CropRow::as_select())
                    .first(conn)
                    .optional()
            })
            .await
            .map_err(map_pool_error)?;
        Ok(row.map(CropRow::into_crop))
    }

    async fn list_attributes(&self) -> Result<Vec<CropAttributes>, CropCatalogError> {
        let rows = self
            .pool
            .run(|conn| {
                crops::table
                    .order(crops::name.asc())
                    .select(CropRow::as_select())
                    .load(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(rows.into_iter().map(CropRow::into_attributes).collect())
    }

    async fn list_templates(&self) -> Result<Vec<CropScheduleTemplate>, CropCatalogError> {
        let rows = self
            .pool
            .run(|conn| {
                crop_schedule_templates::table
                    .order(crop_schedule_templates::crop_name.asc())
                    .select(TemplateRow::as_select())
                    .load(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(rows.into_iter().map(TemplateRow::into_template).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::pool::PoolConfig;
    use crate::outbound::persistence::seed::seed_catalog_if_empty;

    fn catalog() -> (tempfile::TempDir, DieselCropCatalog) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("test.db");
        let pool = DbPool::new(PoolConfig::new(path.to_string_lossy())).expect("pool builds");
        pool.run_migrations().expect("migrations apply");
        let mut conn = pool.get().expect("connection");
        seed_catalog_if_empty(&mut conn).expect("seed applies");
        (dir, DieselCropCatalog::new(pool))
    }

    #[actix_rt::test]
    async fn lookup_ignores_case() {
        let (_dir, catalog) = catalog();
        let crop = catalog
            .find_by_name("tOmAtO")
            .await
            .expect("lookup succeeds")
            .expect("tomato is seeded");
        assert_eq!(crop.name, "Tomato");
    }

    #[actix_rt::test]
    async fn unknown_name_misses() {
        let (_dir, catalog) = catalog();
        assert!(catalog
            .find_by_name("Triffid")
            .await
            .expect("lookup succeeds")
            .is_none());
    }

    #[actix_rt::test]
    async fn every_seeded_crop_has_a_template() {
        let (_dir, catalog) = catalog();
        let crops = catalog.list().await.expect("listing succeeds");
        let templates = catalog.list_templates().await.expect("listing succeeds");
        assert!(!crops.is_empty());
        for crop in &crops {
            assert!(
                templates.iter().any(|t| t.crop_name == crop.name),
                "{} has no cadence template",
                crop.name
            );
        }
    }
}
