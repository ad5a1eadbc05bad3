//! In-memory registry of live websocket connections.
//!
//! A user may hold several connections at once (tabs, devices). Emits serialize the event
//! once and push the text to every sender of the target users; delivery is best effort and
//! senders whose receiving end is gone are pruned.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::sync::{mpsc, RwLock};

use crate::server::realtime::event::ServerEvent;

type Senders = HashMap<u64, mpsc::UnboundedSender<String>>;

/// Handle returned when a connection joins the hub.
pub struct Registration {
    /// Identifies this connection among the user's connections.
    pub connection_id: u64,
    /// Receives encoded events addressed to the user.
    pub receiver: mpsc::UnboundedReceiver<String>,
    /// Whether this is the user's only live connection.
    pub first: bool,
}

/// Shared connection registry. Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct Hub {
    connections: Arc<RwLock<HashMap<i32, Senders>>>,
    next_id: Arc<AtomicU64>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connection for `user_id`.
    pub async fn register(&self, user_id: i32) -> Registration {
        let (sender, receiver) = mpsc::unbounded_channel();
        let connection_id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let mut connections = self.connections.write().await;
        let senders = connections.entry(user_id).or_default();
        senders.insert(connection_id, sender);

        Registration {
            connection_id,
            receiver,
            first: senders.len() == 1,
        }
    }

    /// Removes a connection.
    ///
    /// # Returns
    /// - `true` - The user has no live connections left
    /// - `false` - Other connections of the user remain
    pub async fn unregister(&self, user_id: i32, connection_id: u64) -> bool {
        let mut connections = self.connections.write().await;

        let Some(senders) = connections.get_mut(&user_id) else {
            return false;
        };

        if senders.remove(&connection_id).is_none() {
            return false;
        }

        if senders.is_empty() {
            connections.remove(&user_id);
            true
        } else {
            false
        }
    }

    /// Pushes an event to every connection of one user.
    pub async fn emit(&self, user_id: i32, event: &ServerEvent) {
        self.emit_many(&[user_id], event).await;
    }

    /// Pushes an event to every connection of each listed user.
    pub async fn emit_many(&self, user_ids: &[i32], event: &ServerEvent) {
        let text = match event.to_text() {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Failed to encode {} event: {}", event.event, e);
                return;
            }
        };

        let mut dead = Vec::new();
        {
            let connections = self.connections.read().await;
            for user_id in user_ids {
                let Some(senders) = connections.get(user_id) else {
                    continue;
                };
                for (connection_id, sender) in senders {
                    if sender.send(text.clone()).is_err() {
                        dead.push((*user_id, *connection_id));
                    }
                }
            }
        }

        for (user_id, connection_id) in dead {
            tracing::debug!(
                "Pruning closed connection {} of user {}",
                connection_id,
                user_id
            );
            self.unregister(user_id, connection_id).await;
        }
    }
}
