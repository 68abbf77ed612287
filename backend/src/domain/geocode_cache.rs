//! Bounded reverse-geocode cache.
//!
//! Keys are coordinates rounded to four decimal places (roughly 11 metres)
//! plus the provider that resolved them, so repeated lookups from the same
//! account hit the cache. Capacity is bounded with least-recently-used
//! eviction; a hit promotes its entry.

use std::collections::HashMap;

use super::geo::{Coordinates, GeocodedPlace};

/// Default capacity for the process-wide cache.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Rounded coordinate key, scoped to the provider that resolved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    lat_e4: i64,
    lon_e4: i64,
    provider: &'static str,
}

impl CacheKey {
    pub fn new(coords: Coordinates, provider: &'static str) -> Self {
        Self {
            lat_e4: (coords.latitude * 10_000.0).round() as i64,
            lon_e4: (coords.longitude * 10_000.0).round() as i64,
            provider,
        }
    }
}

/// LRU map from rounded coordinates to resolved places.
#[derive(Debug)]
pub struct GeocodeCache {
    capacity: usize,
    entries: HashMap<CacheKey, GeocodedPlace>,
    // Most recently used last.
    order: Vec<CacheKey>,
}

impl GeocodeCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key, promoting the entry on a hit.
    pub fn get(&mut self, key: CacheKey) -> Option<GeocodedPlace> {
        let place = self.entries.get(&key).cloned()?;
        self.touch(key);
        Some(place)
    }

    /// Insert a resolved place, evicting the least recently used entry when
    /// the cache is full.
    pub fn insert(&mut self, key: CacheKey, place: GeocodedPlace) {
        if self.entries.insert(key, place).is_some() {
            self.touch(key);
            return;
        }
        self.order.push(key);
        if self.entries.len() > self.capacity {
            let evicted = self.order.remove(0);
            self.entries.remove(&evicted);
        }
    }

    fn touch(&mut self, key: CacheKey) {
        if let Some(pos) = self.order.iter().position(|k| *k == key) {
            self.order.remove(pos);
            self.order.push(key);
        }
    }
}

impl Default for GeocodeCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(city: &str) -> GeocodedPlace {
        GeocodedPlace {
            city: Some(city.to_owned()),
            state: None,
            country: None,
        }
    }

    fn key(lat: f64, lon: f64) -> CacheKey {
        CacheKey::new(Coordinates::new(lat, lon), "primary")
    }

    #[test]
    fn nearby_coordinates_share_a_key() {
        let mut cache = GeocodeCache::new(10);
        cache.insert(key(9.93120, 76.26730), place("Kochi"));
        // Differs only past the fourth decimal place.
        let hit = cache.get(key(9.93123, 76.26728));
        assert_eq!(hit, Some(place("Kochi")));
    }

    #[test]
    fn distinct_coordinates_miss() {
        let mut cache = GeocodeCache::new(10);
        cache.insert(key(9.93, 76.26), place("Kochi"));
        assert!(cache.get(key(10.0, 76.26)).is_none());
    }

    #[test]
    fn providers_do_not_share_entries() {
        let mut cache = GeocodeCache::new(10);
        let coords = Coordinates::new(9.93, 76.26);
        cache.insert(CacheKey::new(coords, "primary"), place("Kochi"));
        assert!(cache.get(CacheKey::new(coords, "fallback")).is_none());
    }

    #[test]
    fn eviction_removes_the_least_recently_used_entry() {
        let mut cache = GeocodeCache::new(2);
        cache.insert(key(1.0, 1.0), place("a"));
        cache.insert(key(2.0, 2.0), place("b"));
        cache.insert(key(3.0, 3.0), place("c"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(key(1.0, 1.0)).is_none());
        assert!(cache.get(key(2.0, 2.0)).is_some());
        assert!(cache.get(key(3.0, 3.0)).is_some());
    }

    #[test]
    fn a_hit_promotes_the_entry() {
        let mut cache = GeocodeCache::new(2);
        cache.insert(key(1.0, 1.0), place("a"));
        cache.insert(key(2.0, 2.0), place("b"));
        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.get(key(1.0, 1.0)).is_some());
        cache.insert(key(3.0, 3.0), place("c"));

        assert!(cache.get(key(1.0, 1.0)).is_some());
        assert!(cache.get(key(2.0, 2.0)).is_none());
    }

    #[test]
    fn reinserting_updates_in_place_without_growth() {
        let mut cache = GeocodeCache::new(2);
        cache.insert(key(1.0, 1.0), place("old"));
        cache.insert(key(1.0, 1.0), place("new"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(key(1.0, 1.0)), Some(place("new")));
    }
}
