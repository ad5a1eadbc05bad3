//! Websocket endpoint and per-connection loop.
//!
//! Each connection runs one task that multiplexes three sources:
//! - frames from the client, decoded into [`ClientEvent`]s
//! - events the hub addresses to the user
//! - the keepalive timer, which also enforces the idle timeout

use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::time::Instant;

use crate::server::{
    data::connection::ConnectionRepository,
    error::AppError,
    middleware::auth::AuthGuard,
    realtime::event::{ClientEvent, ServerEvent},
    service::room::chat::ChatService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct WsQuery {
    pub token: Option<String>,
}

/// Upgrades an authenticated request to a websocket.
///
/// The bearer token travels in the `token` query parameter because browsers cannot set
/// headers on websocket requests.
///
/// # Returns
/// - `101 Switching Protocols` - Token is valid
/// - `401 Unauthorized` - Token missing, unknown or expired
pub async fn ws_handler(
    State(state): State<AppState>,
    Query(query): Query<WsQuery>,
    ws: WebSocketUpgrade,
) -> Result<Response, AppError> {
    let user = AuthGuard::with_token(&state.db, query.token.as_deref())
        .require()
        .await?;

    let max_message_bytes = state.config.ws.max_message_bytes;

    Ok(ws
        .max_message_size(max_message_bytes)
        .on_upgrade(move |socket| handle_socket(socket, state, user.id)))
}

async fn handle_socket(socket: WebSocket, state: AppState, user_id: i32) {
    let (mut sink, mut stream) = socket.split();
    let mut registration = state.hub.register(user_id).await;

    tracing::info!(
        "Websocket connection {} opened for user {}",
        registration.connection_id,
        user_id
    );

    if registration.first {
        broadcast_presence(&state, user_id, true).await;
    }

    let ping_interval = Duration::from_secs(state.config.ws.ping_interval_secs.max(1));
    let idle_timeout = Duration::from_secs(state.config.ws.idle_timeout_secs.max(1));

    let mut last_activity = Instant::now();
    let mut next_ping = Instant::now() + ping_interval;

    loop {
        tokio::select! {
            maybe_msg = stream.next() => {
                let Some(msg) = maybe_msg else {
                    break;
                };

                let text = match msg {
                    Ok(Message::Text(text)) => text.to_string(),
                    Ok(Message::Binary(data)) => match String::from_utf8(data.to_vec()) {
                        Ok(text) => text,
                        Err(_) => {
                            tracing::debug!("Ignoring non-UTF8 binary frame from user {}", user_id);
                            last_activity = Instant::now();
                            continue;
                        }
                    },
                    Ok(Message::Ping(data)) => {
                        last_activity = Instant::now();
                        if let Err(e) = sink.send(Message::Pong(data)).await {
                            tracing::warn!("Failed to send pong to user {}: {}", user_id, e);
                            break;
                        }
                        continue;
                    }
                    Ok(Message::Pong(_)) => {
                        last_activity = Instant::now();
                        continue;
                    }
                    Ok(Message::Close(_)) => {
                        tracing::debug!("User {} closed websocket", user_id);
                        break;
                    }
                    Err(e) => {
                        tracing::debug!("Websocket error for user {}: {}", user_id, e);
                        break;
                    }
                };

                last_activity = Instant::now();

                if let Some(reply) = dispatch(&state, user_id, &text).await {
                    match reply.to_text() {
                        Ok(reply) => {
                            if let Err(e) = sink.send(Message::Text(reply.into())).await {
                                tracing::warn!("Failed to reply to user {}: {}", user_id, e);
                                break;
                            }
                        }
                        Err(e) => tracing::error!("Failed to encode {} reply: {}", reply.event, e),
                    }
                }
            }

            outbound = registration.receiver.recv() => {
                let Some(text) = outbound else {
                    break;
                };

                if let Err(e) = sink.send(Message::Text(text.into())).await {
                    tracing::debug!("Failed to deliver event to user {}: {}", user_id, e);
                    break;
                }
            }

            _ = tokio::time::sleep_until(next_ping) => {
                if last_activity.elapsed() > idle_timeout {
                    tracing::info!(
                        "Closing websocket of user {} after {}s idle",
                        user_id,
                        idle_timeout.as_secs()
                    );
                    let _ = sink.send(Message::Close(None)).await;
                    break;
                }

                if let Err(e) = sink.send(Message::Ping(axum::body::Bytes::new())).await {
                    tracing::debug!("Failed to ping user {}: {}", user_id, e);
                    break;
                }

                next_ping = Instant::now() + ping_interval;
            }
        }
    }

    let last = state
        .hub
        .unregister(user_id, registration.connection_id)
        .await;
    if last {
        broadcast_presence(&state, user_id, false).await;
    }

    tracing::info!(
        "Websocket connection {} closed for user {}",
        registration.connection_id,
        user_id
    );
}

/// Handles one client frame and returns the event to send back to this connection, if any.
async fn dispatch(state: &AppState, user_id: i32, text: &str) -> Option<ServerEvent> {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!("Unreadable websocket event from user {}: {}", user_id, e);
            return Some(ServerEvent::error("Unrecognised event"));
        }
    };

    let chat = ChatService::new(&state.db, &state.hub);
    let result = match event {
        ClientEvent::Ping => return Some(ServerEvent::pong()),
        ClientEvent::TypingStart { room_id } => chat.relay_typing(room_id, user_id, true).await,
        ClientEvent::TypingStop { room_id } => chat.relay_typing(room_id, user_id, false).await,
        ClientEvent::RoomMessage { room_id, content } => {
            chat.send(room_id, user_id, &content).await.map(|_| ())
        }
    };

    result.err().map(|e| ServerEvent::error(client_message(e)))
}

/// Maps an error to the message a client may see, logging server-side failures.
fn client_message(error: AppError) -> String {
    match error {
        AppError::NotFound(message)
        | AppError::BadRequest(message)
        | AppError::Conflict(message) => message,
        AppError::AuthErr(e) => {
            tracing::debug!("Websocket event denied: {}", e);
            "You do not have permission to do that".to_string()
        }
        e => {
            tracing::error!("Websocket event failed: {}", e);
            "Internal server error".to_string()
        }
    }
}

/// Tells the user's accepted friends that they came online or went offline.
async fn broadcast_presence(state: &AppState, user_id: i32, online: bool) {
    match ConnectionRepository::new(&state.db)
        .get_friend_ids(user_id)
        .await
    {
        Ok(friend_ids) => {
            state
                .hub
                .emit_many(&friend_ids, &ServerEvent::presence(online, user_id))
                .await;
        }
        Err(e) => tracing::warn!(
            "Failed to load friends of user {} for presence: {}",
            user_id,
            e
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_client_safe_messages() {
        assert_eq!(
            client_message(AppError::NotFound("Room not found".to_string())),
            "Room not found"
        );
        assert_eq!(
            client_message(AppError::AuthErr(
                crate::server::error::auth::AuthError::AccessDenied(1, "not a member".to_string())
            )),
            "You do not have permission to do that"
        );
        assert_eq!(
            client_message(AppError::InternalError("boom".to_string())),
            "Internal server error"
        );
    }
}
