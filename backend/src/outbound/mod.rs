//! Outbound adapters: persistence and external HTTP providers.

pub mod geocode;
pub mod overpass;
pub mod persistence;
pub mod weather;

pub use geocode::ChainedGeocodeSource;
pub use overpass::OverpassNurserySource;
pub use weather::OwmWeatherSource;
