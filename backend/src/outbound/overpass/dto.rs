//! Wire types for the Overpass POI provider.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::geo::Coordinates;
use crate::domain::nursery::NurseryPoi;

#[derive(Debug, Deserialize)]
pub struct OverpassResponseDto {
    #[serde(default)]
    pub elements: Vec<ElementDto>,
}

#[derive(Debug, Deserialize)]
pub struct ElementDto {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<CenterDto>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct CenterDto {
    pub lat: f64,
    pub lon: f64,
}

impl ElementDto {
    fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => self
                .center
                .as_ref()
                .map(|c| Coordinates::new(c.lat, c.lon)),
        }
    }

    fn name(&self) -> String {
        ["name", "brand", "shop", "amenity"]
            .iter()
            .find_map(|key| self.tags.get(*key))
            .cloned()
            .unwrap_or_else(|| "Unnamed".to_owned())
    }

    fn address(&self) -> Option<String> {
        let street = self.tags.get("addr:street");
        let city = self.tags.get("addr:city");
        match (street, city) {
            (Some(street), Some(city)) => Some(format!("{street}, {city}")),
            (Some(one), None) | (None, Some(one)) => Some(one.clone()),
            (None, None) => None,
        }
    }
}

impl OverpassResponseDto {
    /// Elements without usable coordinates are dropped.
    pub fn into_pois(self) -> Vec<NurseryPoi> {
        self.elements
            .into_iter()
            .filter_map(|element| {
                let coordinates = element.coordinates()?;
                Some(NurseryPoi {
                    name: element.name(),
                    coordinates,
                    address: element.address(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_and_ways_both_resolve_coordinates() {
        let body = r#"{
            "elements": [
                {"type": "node", "lat": 9.94, "lon": 76.27,
                 "tags": {"name": "Green Thumb", "shop": "garden_centre"}},
                {"type": "way", "center": {"lat": 9.95, "lon": 76.28},
                 "tags": {"brand": "Plantarium"}},
                {"type": "way", "tags": {"name": "No coordinates"}}
            ]
        }"#;
        let dto: OverpassResponseDto = serde_json::from_str(body).expect("valid payload");
        let pois = dto.into_pois();
        assert_eq!(pois.len(), 2);
        assert_eq!(pois[0].name, "Green Thumb");
        assert_eq!(pois[1].name, "Plantarium");
        assert_eq!(pois[1].coordinates.latitude, 9.95);
    }

    #[test]
    fn name_falls_back_through_the_tag_chain() {
        let body = r#"{
            "elements": [
                {"lat": 1.0, "lon": 1.0, "tags": {"shop": "garden_centre"}},
                {"lat": 2.0, "lon": 2.0, "tags": {}}
            ]
        }"#;
        let dto: OverpassResponseDto = serde_json::from_str(body).expect("valid payload");
        let pois = dto.into_pois();
        assert_eq!(pois[0].name, "garden_centre");
        assert_eq!(pois[1].name, "Unnamed");
    }

    #[test]
    fn address_joins_street_and_city() {
        let body = r#"{
            "elements": [
                {"lat": 1.0, "lon": 1.0,
                 "tags": {"name": "x", "addr:street": "MG Road", "addr:city": "Kochi"}}
            ]
        }"#;
        let dto: OverpassResponseDto = serde_json::from_str(body).expect("valid payload");
        assert_eq!(dto.into_pois()[0].address.as_deref(), Some("MG Road, Kochi"));
    }
}
