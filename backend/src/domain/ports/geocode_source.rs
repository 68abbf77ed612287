//! Port for reverse geocoding.
//!
//! Adapters are expected to try a primary provider and fall back to a
//! secondary one before reporting failure.

use async_trait::async_trait;

use crate::domain::geo::{Coordinates, GeocodedPlace};

use super::define_port_error;

define_port_error! {
    /// Errors raised by geocode source adapters.
    pub enum GeocodeSourceError {
        /// Every configured provider failed.
        AllProvidersFailed { message: String } =>
            "reverse geocoding failed: {message}",
        /// The coordinates are outside valid bounds.
        InvalidCoordinates { latitude: f64, longitude: f64 } =>
            "invalid coordinates: {latitude}, {longitude}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeocodeSource: Send + Sync {
    /// Stable label for the provider chain, used in cache keys.
    fn provider_name(&self) -> &'static str;

    /// Resolve a coordinate pair to a place name.
    async fn reverse(&self, coords: Coordinates)
        -> Result<GeocodedPlace, GeocodeSourceError>;
}
