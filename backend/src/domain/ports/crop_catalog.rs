//! Port for the read-only crop catalog.
//!
//! Name lookups are case-insensitive; the store enforces this with a
//! case-insensitive unique index on the crop name.

use async_trait::async_trait;

use crate::domain::crop::{Crop, CropAttributes, CropScheduleTemplate};

use super::define_port_error;

define_port_error! {
    /// Errors raised by crop catalog adapters.
    pub enum CropCatalogError {
        Connection { message: String } =>
            "crop catalog connection failed: {message}",
        Query { message: String } =>
            "crop catalog query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CropCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<Crop>, CropCatalogError>;

    /// Case-insensitive lookup by crop name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Crop>, CropCatalogError>;

    /// Matching attributes for every crop, for the recommendation evaluator.
    async fn list_attributes(&self) -> Result<Vec<CropAttributes>, CropCatalogError>;

    async fn list_templates(&self) -> Result<Vec<CropScheduleTemplate>, CropCatalogError>;
}

/// Fixture catalog with no crops.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCropCatalog;

#[async_trait]
impl CropCatalog for FixtureCropCatalog {
    async fn list(&self) -> Result<Vec<Crop>, CropCatalogError> {
        Ok(Vec::new())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Crop>, CropCatalogError> {
        Ok(None)
    }

    async fn list_attributes(&self) -> Result<Vec<CropAttributes>, CropCatalogError> {
        Ok(Vec::new())
    }

    async fn list_templates(&self) -> Result<Vec<CropScheduleTemplate>, CropCatalogError> {
        Ok(Vec::new())
    }
}
