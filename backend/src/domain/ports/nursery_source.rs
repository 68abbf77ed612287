//! Port for the garden-centre POI provider.

use async_trait::async_trait;

use crate::domain::geo::Coordinates;
use crate::domain::nursery::NurseryPoi;

use super::define_port_error;

define_port_error! {
    /// Errors raised by nursery POI source adapters.
    pub enum NurserySourceError {
        Upstream { status: u16, message: String } =>
            "POI provider returned {status}: {message}",
        RateLimited { message: String } =>
            "POI provider rate limited: {message}",
        Unreachable { message: String } =>
            "POI provider unreachable: {message}",
        Decode { message: String } =>
            "POI response malformed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NurserySource: Send + Sync {
    /// Garden-centre POIs within `radius_m` metres of the point.
    async fn find_near(
        &self,
        coords: Coordinates,
        radius_m: u32,
    ) -> Result<Vec<NurseryPoi>, NurserySourceError>;
}
