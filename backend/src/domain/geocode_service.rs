//! Reverse geocoding with a bounded in-process cache.

use std::sync::{Arc, Mutex};

use tracing::debug;

use super::geo::{Coordinates, GeocodedPlace};
use super::geocode_cache::{CacheKey, GeocodeCache};
use super::ports::{GeocodeSource, GeocodeSourceError};

pub struct GeocodeService {
    source: Arc<dyn GeocodeSource>,
    cache: Mutex<GeocodeCache>,
}

impl GeocodeService {
    pub fn new(source: Arc<dyn GeocodeSource>, cache: GeocodeCache) -> Self {
        Self {
            source,
            cache: Mutex::new(cache),
        }
    }

    /// Resolve coordinates to a place, consulting the cache first.
    pub async fn resolve(
        &self,
        coords: Coordinates,
    ) -> Result<GeocodedPlace, GeocodeSourceError> {
        if !coords.is_valid() {
            return Err(GeocodeSourceError::invalid_coordinates(
                coords.latitude,
                coords.longitude,
            ));
        }

        let key = CacheKey::new(coords, self.source.provider_name());
        if let Some(place) = self.lock_cache().get(key) {
            debug!(lat = coords.latitude, lon = coords.longitude, "geocode cache hit");
            return Ok(place);
        }

        let place = self.source.reverse(coords).await?;
        self.lock_cache().insert(key, place.clone());
        Ok(place)
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, GeocodeCache> {
        // Lock poisoning only happens after a panic mid-insert; the cache
        // content is still usable.
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockGeocodeSource;

    fn kochi() -> GeocodedPlace {
        GeocodedPlace {
            city: Some("Kochi".to_owned()),
            state: Some("Kerala".to_owned()),
            country: Some("India".to_owned()),
        }
    }

    #[actix_rt::test]
    async fn second_lookup_hits_the_cache() {
        let mut source = MockGeocodeSource::new();
        source.expect_provider_name().return_const("primary");
        source.expect_reverse().times(1).returning(|_| Ok(kochi()));
        let service = GeocodeService::new(Arc::new(source), GeocodeCache::new(10));

        let coords = Coordinates::new(9.9312, 76.2673);
        let first = service.resolve(coords).await.expect("first lookup");
        let second = service.resolve(coords).await.expect("cached lookup");
        assert_eq!(first, second);
    }

    #[actix_rt::test]
    async fn invalid_coordinates_are_rejected_without_a_provider_call() {
        let mut source = MockGeocodeSource::new();
        source.expect_provider_name().return_const("primary");
        let service = GeocodeService::new(Arc::new(source), GeocodeCache::new(10));

        let result = service.resolve(Coordinates::new(120.0, 0.0)).await;
        assert!(matches!(
            result,
            Err(GeocodeSourceError::InvalidCoordinates { .. })
        ));
    }

    #[actix_rt::test]
    async fn provider_failure_is_not_cached() {
        let mut source = MockGeocodeSource::new();
        source.expect_provider_name().return_const("primary");
        let mut calls = 0;
        source.expect_reverse().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(GeocodeSourceError::all_providers_failed("both timed out"))
            } else {
                Ok(kochi())
            }
        });
        let service = GeocodeService::new(Arc::new(source), GeocodeCache::new(10));

        let coords = Coordinates::new(9.9312, 76.2673);
        assert!(service.resolve(coords).await.is_err());
        assert!(service.resolve(coords).await.is_ok());
    }
}
