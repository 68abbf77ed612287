//! WebSocket inbound adapter.

mod registry;
mod session;

pub use registry::{SessionHandle, SessionRegistry};

use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::domain::user::UserId;

/// Upgrade `GET /ws/{user_id}` to a WebSocket session in the user's room.
#[get("/ws/{user_id}")]
pub async fn connect(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<i32>,
    registry: web::Data<SessionRegistry>,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = UserId::new(path.into_inner());
    let (response, ws_session, msg_stream) = actix_ws::handle(&req, stream)?;

    let registry = registry.into_inner();
    let handle = registry.register(user_id, ws_session.clone()).await;
    actix_web::rt::spawn(session::run(
        ws_session, msg_stream, registry, user_id, handle,
    ));
    Ok(response)
}
