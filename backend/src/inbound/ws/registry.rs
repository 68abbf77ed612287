//! Per-user session rooms.
//!
//! The registry is the concrete implementation of the domain push-channel
//! port: the sweeps and handlers push frames at user ids, and the registry
//! fans them out to whatever sessions that user currently has open. Sessions
//! that fail a send are dropped from the room.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use actix_ws::Session;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::domain::ports::{PushChannel, PushFrame};
use crate::domain::user::UserId;

/// Identifies one registered session within its room.
pub type SessionHandle = u64;

#[derive(Default)]
pub struct SessionRegistry {
    rooms: RwLock<HashMap<i32, Vec<(SessionHandle, Session)>>>,
    next_handle: AtomicU64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a session to the user's room.
    pub async fn register(&self, user_id: UserId, session: Session) -> SessionHandle {
        let handle = self.next_handle.fetch_add(1, Ordering::Relaxed);
        let mut rooms = self.rooms.write().await;
        rooms
            .entry(user_id.get())
            .or_default()
            .push((handle, session));
        debug!(user_id = %user_id, handle, "session joined room");
        handle
    }

    /// Remove a session from the user's room, dropping empty rooms.
    pub async fn unregister(&self, user_id: UserId, handle: SessionHandle) {
        let mut rooms = self.rooms.write().await;
        if let Some(sessions) = rooms.get_mut(&user_id.get()) {
            sessions.retain(|(id, _)| *id != handle);
            if sessions.is_empty() {
                rooms.remove(&user_id.get());
            }
        }
        debug!(user_id = %user_id, handle, "session left room");
    }

    /// Number of open sessions across all rooms.
    pub async fn session_count(&self) -> usize {
        self.rooms.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl PushChannel for SessionRegistry {
    async fn push(&self, user_id: UserId, frame: PushFrame) {
        let payload = match serde_json::to_string(&frame) {
            Ok(payload) => payload,
            Err(err) => {
                error!(error = %err, "push frame failed to serialize");
                return;
            }
        };

        let targets: Vec<(SessionHandle, Session)> = {
            let rooms = self.rooms.read().await;
            match rooms.get(&user_id.get()) {
                Some(sessions) => sessions.clone(),
                None => return,
            }
        };

        let mut dead = Vec::new();
        for (handle, mut session) in targets {
            if session.text(payload.clone()).await.is_err() {
                dead.push(handle);
            }
        }
        if !dead.is_empty() {
            let mut rooms = self.rooms.write().await;
            if let Some(sessions) = rooms.get_mut(&user_id.get()) {
                sessions.retain(|(id, _)| !dead.contains(id));
                if sessions.is_empty() {
                    rooms.remove(&user_id.get());
                }
            }
        }
    }
}
