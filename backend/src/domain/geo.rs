//! Geographic primitives shared by geocoding and the nursery lookup.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components are finite and inside valid WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Resolved place name for a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedPlace {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn zero_distance_between_identical_points() {
        let p = Coordinates::new(9.9312, 76.2673);
        assert!(haversine_km(p, p) < 1e-9);
    }

    #[test]
    fn kochi_to_trivandrum_is_about_two_hundred_km() {
        let kochi = Coordinates::new(9.9312, 76.2673);
        let trivandrum = Coordinates::new(8.5241, 76.9366);
        let distance = haversine_km(kochi, trivandrum);
        assert!((distance - 173.0).abs() < 5.0, "got {distance}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinates::new(51.5074, -0.1278);
        let b = Coordinates::new(48.8566, 2.3522);
        let forward = haversine_km(a, b);
        let back = haversine_km(b, a);
        assert!((forward - back).abs() < 1e-9);
    }

    #[rstest]
    #[case(0.0, 0.0, true)]
    #[case(90.0, 180.0, true)]
    #[case(-90.0, -180.0, true)]
    #[case(91.0, 0.0, false)]
    #[case(0.0, 181.0, false)]
    #[case(f64::NAN, 0.0, false)]
    fn coordinate_bounds(#[case] lat: f64, #[case] lon: f64, #[case] expected: bool) {
        assert_eq!(Coordinates::new(lat, lon).is_valid(), expected);
    }
}
