//! Notification inbox and preference API handlers.
//!
//! ```text
//! GET /api/v1/notifications/{user_id}
//! POST /api/v1/notifications/{user_id}/read
//! DELETE /api/v1/notifications/{user_id}
//! GET /api/v1/notification-preferences/{user_id}
//! PUT /api/v1/notification-preferences/{user_id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::Serialize;

use crate::domain::{Error, Notification, NotificationPreferences, UserId};
use crate::inbound::http::state::AppState;
use crate::inbound::http::ApiResult;

/// Row count body for bulk inbox mutations.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InboxCountResponse {
    pub affected: usize,
}

/// List a user's inbox, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/notifications/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Inbox entries", body = [Notification]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "listNotifications"
)]
#[get("/notifications/{user_id}")]
pub async fn list_notifications(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<Notification>>> {
    let entries = state.inbox.list(UserId::new(path.into_inner())).await?;
    Ok(web::Json(entries))
}

/// Mark every inbox entry read.
#[utoipa::path(
    post,
    path = "/api/v1/notifications/{user_id}/read",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Entries marked read", body = InboxCountResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "markNotificationsRead"
)]
#[post("/notifications/{user_id}/read")]
pub async fn mark_all_read(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<InboxCountResponse>> {
    let affected = state
        .inbox
        .mark_all_read(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(InboxCountResponse { affected }))
}

/// Delete every inbox entry.
#[utoipa::path(
    delete,
    path = "/api/v1/notifications/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Entries deleted", body = InboxCountResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "clearNotifications"
)]
#[delete("/notifications/{user_id}")]
pub async fn clear_notifications(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<InboxCountResponse>> {
    let affected = state.inbox.clear(UserId::new(path.into_inner())).await?;
    Ok(web::Json(InboxCountResponse { affected }))
}

/// Fetch a user's notification preferences.
#[utoipa::path(
    get,
    path = "/api/v1/notification-preferences/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Preferences", body = NotificationPreferences),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "getNotificationPreferences"
)]
#[get("/notification-preferences/{user_id}")]
pub async fn get_preferences(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<NotificationPreferences>> {
    let user_id = path.into_inner();
    let preferences = state
        .users
        .preferences(UserId::new(user_id))
        .await?
        .ok_or_else(|| Error::not_found(format!("no user with id {user_id}")))?;
    Ok(web::Json(preferences))
}

/// Replace a user's notification preferences.
#[utoipa::path(
    put,
    path = "/api/v1/notification-preferences/{user_id}",
    params(("user_id" = i32, Path, description = "User identifier")),
    request_body = NotificationPreferences,
    responses(
        (status = 200, description = "Preferences updated", body = NotificationPreferences),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "updateNotificationPreferences"
)]
#[put("/notification-preferences/{user_id}")]
pub async fn update_preferences(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    payload: web::Json<NotificationPreferences>,
) -> ApiResult<web::Json<NotificationPreferences>> {
    let user_id = UserId::new(path.into_inner());
    if state.users.find_by_id(user_id).await?.is_none() {
        return Err(Error::not_found(format!("no user with id {user_id}")));
    }
    let preferences = payload.into_inner();
    state.users.update_preferences(user_id, preferences).await?;
    Ok(web::Json(preferences))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockNotificationRepository, MockUserRepository};
    use crate::inbound::http::test_utils::{test_state, StateOverrides};
    use actix_web::{test as actix_test, App};
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    async fn call(
        overrides: StateOverrides,
        request: actix_test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let state = test_state(overrides);
        let app = actix_test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/api/v1")
                    .service(list_notifications)
                    .service(mark_all_read)
                    .service(clear_notifications)
                    .service(get_preferences)
                    .service(update_preferences),
            ),
        )
        .await;
        actix_test::call_service(&app, request.to_request()).await
    }

    #[actix_web::test]
    async fn inbox_listing_is_camel_case_json() {
        let mut inbox = MockNotificationRepository::new();
        inbox.expect_list().returning(|user_id| {
            Ok(vec![Notification {
                id: 1,
                user_id,
                message: "Time to water your Tomato!".to_owned(),
                timestamp: NaiveDate::from_ymd_opt(2026, 8, 27)
                    .and_then(|d| d.and_hms_opt(8, 0, 0))
                    .expect("valid timestamp"),
                read_status: false,
            }])
        });

        let overrides = StateOverrides {
            inbox: Some(std::sync::Arc::new(inbox)),
            ..StateOverrides::default()
        };
        let request = actix_test::TestRequest::get().uri("/api/v1/notifications/1");
        let response = call(overrides, request).await;
        assert!(response.status().is_success());
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("json");
        let first = &body.as_array().expect("array")[0];
        assert_eq!(first.get("readStatus").and_then(Value::as_bool), Some(false));
        assert!(first.get("read_status").is_none());
    }

    #[actix_web::test]
    async fn marking_read_reports_the_row_count() {
        let mut inbox = MockNotificationRepository::new();
        inbox.expect_mark_all_read().returning(|_| Ok(3));

        let overrides = StateOverrides {
            inbox: Some(std::sync::Arc::new(inbox)),
            ..StateOverrides::default()
        };
        let request = actix_test::TestRequest::post().uri("/api/v1/notifications/1/read");
        let response = call(overrides, request).await;
        assert!(response.status().is_success());
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("json");
        assert_eq!(body.get("affected").and_then(Value::as_u64), Some(3));
    }

    #[actix_web::test]
    async fn preferences_for_a_missing_user_are_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_preferences().returning(|_| Ok(None));

        let overrides = StateOverrides {
            users: Some(std::sync::Arc::new(users)),
            ..StateOverrides::default()
        };
        let request = actix_test::TestRequest::get().uri("/api/v1/notification-preferences/9");
        let response = call(overrides, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn updating_preferences_echoes_the_new_flags() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|user_id| {
            Ok(Some(crate::domain::User {
                id: user_id,
                name: "Asha".to_owned(),
                email: "asha@example.com".to_owned(),
                phone: None,
                location: crate::domain::Location::default(),
            }))
        });
        users
            .expect_update_preferences()
            .withf(|_, prefs| !prefs.watering_reminders && prefs.weather_alerts)
            .returning(|_, _| Ok(()));

        let overrides = StateOverrides {
            users: Some(std::sync::Arc::new(users)),
            ..StateOverrides::default()
        };
        let request = actix_test::TestRequest::put()
            .uri("/api/v1/notification-preferences/1")
            .set_json(json!({ "wateringReminders": false, "weatherAlerts": true }));
        let response = call(overrides, request).await;
        assert!(response.status().is_success());
        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("json");
        assert_eq!(
            body.get("wateringReminders").and_then(Value::as_bool),
            Some(false)
        );
    }
}
