//! Nearby nursery lookup results.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::geo::{haversine_km, Coordinates};

/// A garden-centre point of interest returned by the POI source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NurseryPoi {
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A nursery ranked by distance from the query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Nursery {
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub distance_km: f64,
}

/// Rank POIs by distance from `origin`, nearest first, keeping at most
/// `limit` entries. Distances are rounded to two decimal places.
pub fn rank_by_distance(origin: Coordinates, pois: Vec<NurseryPoi>, limit: usize) -> Vec<Nursery> {
    let mut ranked: Vec<Nursery> = pois
        .into_iter()
        .map(|poi| {
            let distance = haversine_km(origin, poi.coordinates);
            Nursery {
                name: poi.name,
                coordinates: poi.coordinates,
                address: poi.address,
                distance_km: (distance * 100.0).round() / 100.0,
            }
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(name: &str, lat: f64, lon: f64) -> NurseryPoi {
        NurseryPoi {
            name: name.to_owned(),
            coordinates: Coordinates::new(lat, lon),
            address: None,
        }
    }

    #[test]
    fn ranks_nearest_first() {
        let origin = Coordinates::new(9.93, 76.26);
        let ranked = rank_by_distance(
            origin,
            vec![
                poi("Far", 10.5, 76.9),
                poi("Near", 9.94, 76.27),
                poi("Mid", 10.0, 76.4),
            ],
            10,
        );
        let names: Vec<&str> = ranked.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Near", "Mid", "Far"]);
        assert!(ranked[0].distance_km < ranked[1].distance_km);
    }

    #[test]
    fn truncates_to_the_limit() {
        let origin = Coordinates::new(9.93, 76.26);
        let pois = (0..5).map(|i| poi("p", 9.93 + f64::from(i) * 0.01, 76.26)).collect();
        assert_eq!(rank_by_distance(origin, pois, 2).len(), 2);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let origin = Coordinates::new(0.0, 0.0);
        assert!(rank_by_distance(origin, Vec::new(), 10).is_empty());
    }
}
