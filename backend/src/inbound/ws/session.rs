//! WebSocket session lifecycle.
//!
//! Each session is registered into its user's room, kept alive by a
//! ping/pong heartbeat, and unregistered when the client goes away or stops
//! answering pings. Clients only receive frames; inbound text is ignored.

use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_ws::{Message, MessageStream, Session};
use futures_util::StreamExt;
use tracing::debug;

use crate::domain::user::UserId;

use super::registry::{SessionHandle, SessionRegistry};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Drive one session until the client disconnects or times out.
pub async fn run(
    mut session: Session,
    mut stream: MessageStream,
    registry: Arc<SessionRegistry>,
    user_id: UserId,
    handle: SessionHandle,
) {
    let mut heartbeat = tokio::time::interval(HEARTBEAT_INTERVAL);
    let mut last_seen = Instant::now();

    loop {
        tokio::select! {
            _ = heartbeat.tick() => {
                if last_seen.elapsed() > CLIENT_TIMEOUT {
                    debug!(user_id = %user_id, "session timed out");
                    break;
                }
                if session.ping(b"").await.is_err() {
                    break;
                }
            }
            message = stream.next() => {
                match message {
                    Some(Ok(Message::Ping(bytes))) => {
                        last_seen = Instant::now();
                        if session.pong(&bytes).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Pong(_))) => {
                        last_seen = Instant::now();
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {
                        // Client frames carry nothing actionable.
                        last_seen = Instant::now();
                    }
                    Some(Err(_)) => break,
                }
            }
        }
    }

    registry.unregister(user_id, handle).await;
    let _ = session.close(None).await;
}
