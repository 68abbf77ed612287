//! Nearby nursery API handler.
//!
//! ```text
//! GET /api/v1/nurseries?latitude=9.93&longitude=76.27
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::domain::nursery::rank_by_distance;
use crate::domain::{Coordinates, Error, Nursery};
use crate::inbound::http::state::AppState;
use crate::inbound::http::ApiResult;

const DEFAULT_RADIUS_M: u32 = 5_000;
const MAX_RADIUS_M: u32 = 50_000;
const RESULT_LIMIT: usize = 10;

/// Query parameters for the nursery search.
#[derive(Debug, Deserialize, Serialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct NurseryQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in metres; defaults to 5 km, capped at 50 km.
    #[serde(default)]
    pub radius: Option<u32>,
}

/// Find garden centres and plant nurseries near a coordinate, nearest first.
#[utoipa::path(
    get,
    path = "/api/v1/nurseries",
    params(NurseryQuery),
    responses(
        (status = 200, description = "Nearby nurseries", body = [Nursery]),
        (status = 400, description = "Invalid coordinates", body = Error),
        (status = 503, description = "POI provider unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["nurseries"],
    operation_id = "findNurseries"
)]
#[get("/nurseries")]
pub async fn find_nurseries(
    state: web::Data<AppState>,
    query: web::Query<NurseryQuery>,
) -> ApiResult<web::Json<Vec<Nursery>>> {
    let query = query.into_inner();
    let coords = Coordinates {
        latitude: query.latitude,
        longitude: query.longitude,
    };
    if !coords.is_valid() {
        return Err(Error::invalid_request(format!(
            "invalid coordinates: {}, {}",
            query.latitude, query.longitude
        )));
    }
    let radius = query.radius.unwrap_or(DEFAULT_RADIUS_M).min(MAX_RADIUS_M);
    let pois = state.nurseries.find_near(coords, radius).await?;
    Ok(web::Json(rank_by_distance(coords, pois, RESULT_LIMIT)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockNurserySource, NurserySourceError};
    use crate::domain::NurseryPoi;
    use crate::inbound::http::test_utils::{test_state, StateOverrides};
    use actix_web::{test as actix_test, App};
    use serde_json::Value;

    async fn call(
        nurseries: MockNurserySource,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let state = test_state(StateOverrides {
            nurseries: Some(std::sync::Arc::new(nurseries)),
            ..StateOverrides::default()
        });
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(find_nurseries)),
        )
        .await;
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
            .await
    }

    fn poi(name: &str, lat: f64, lon: f64) -> NurseryPoi {
        NurseryPoi {
            name: name.to_owned(),
            coordinates: Coordinates::new(lat, lon),
            address: None,
        }
    }

    #[actix_web::test]
    async fn results_come_back_nearest_first() {
        let mut nurseries = MockNurserySource::new();
        nurseries
            .expect_find_near()
            .withf(|_, radius| *radius == DEFAULT_RADIUS_M)
            .returning(|_, _| {
                Ok(vec![
                    poi("Far", 10.2, 76.5),
                    poi("Near", 9.94, 76.27),
                ])
            });

        let response = call(
            nurseries,
            "/api/v1/nurseries?latitude=9.93&longitude=76.27",
        )
        .await;
        assert!(response.status().is_success());
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("json");
        let names: Vec<&str> = body
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|n| n.get("name").and_then(Value::as_str))
            .collect();
        assert_eq!(names, vec!["Near", "Far"]);
    }

    #[actix_web::test]
    async fn the_radius_is_capped() {
        let mut nurseries = MockNurserySource::new();
        nurseries
            .expect_find_near()
            .withf(|_, radius| *radius == MAX_RADIUS_M)
            .returning(|_, _| Ok(Vec::new()));

        let response = call(
            nurseries,
            "/api/v1/nurseries?latitude=9.93&longitude=76.27&radius=900000",
        )
        .await;
        assert!(response.status().is_success());
    }

    #[actix_web::test]
    async fn invalid_coordinates_are_a_bad_request() {
        let response = call(
            MockNurserySource::new(),
            "/api/v1/nurseries?latitude=95.0&longitude=76.27",
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn a_rate_limited_provider_is_service_unavailable() {
        let mut nurseries = MockNurserySource::new();
        nurseries
            .expect_find_near()
            .returning(|_, _| Err(NurserySourceError::rate_limited("try later")));

        let response = call(
            nurseries,
            "/api/v1/nurseries?latitude=9.93&longitude=76.27",
        )
        .await;
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
