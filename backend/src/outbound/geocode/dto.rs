//! Wire types for the two reverse-geocoding providers.

use serde::Deserialize;

use crate::domain::geo::GeocodedPlace;

/// Primary provider entry: name/state/country arrive directly.
#[derive(Debug, Deserialize)]
pub struct PrimaryEntryDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl PrimaryEntryDto {
    pub fn into_place(self) -> GeocodedPlace {
        GeocodedPlace {
            city: self.name,
            state: self.state,
            country: self.country,
        }
    }
}

/// Fallback provider response carrying a structured address.
#[derive(Debug, Deserialize)]
pub struct FallbackResponseDto {
    #[serde(default)]
    pub address: FallbackAddressDto,
}

#[derive(Debug, Default, Deserialize)]
pub struct FallbackAddressDto {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl FallbackResponseDto {
    /// City coalesces city, town, then village.
    pub fn into_place(self) -> GeocodedPlace {
        let address = self.address;
        GeocodedPlace {
            city: address.city.or(address.town).or(address.village),
            state: address.state,
            country: address.country,
        }
    }
}
