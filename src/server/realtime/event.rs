//! Websocket event envelope.
//!
//! Every frame is a JSON object `{"event": "<name>", "data": {...}}`. Server events are built
//! through the constructors on `ServerEvent`; client events are decoded into `ClientEvent`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::model::{
    connection::ConnectionDto, notification::NotificationDto, room::AccessRequestDto,
    room::RoomMessageDto,
};

pub const ROOM_MESSAGE: &str = "room:message";
pub const TYPING_START: &str = "typing:start";
pub const TYPING_STOP: &str = "typing:stop";
pub const ROOM_ACCESS_REQUESTED: &str = "room:access_requested";
pub const ROOM_ACCESS_APPROVED: &str = "room:access_approved";
pub const ROOM_ACCESS_DENIED: &str = "room:access_denied";
pub const NOTIFICATION_NEW: &str = "notification:new";
pub const CONNECTION_REQUEST: &str = "connection:request";
pub const CONNECTION_ACCEPTED: &str = "connection:accepted";
pub const PRESENCE_ONLINE: &str = "presence:online";
pub const PRESENCE_OFFLINE: &str = "presence:offline";
pub const PONG: &str = "pong";
pub const ERROR: &str = "error";

/// Event pushed from the server to connected clients.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServerEvent {
    pub event: &'static str,
    pub data: Value,
}

impl ServerEvent {
    /// Builds an event from any serializable payload. Payloads that fail to serialize
    /// are sent as `null`.
    pub fn new(event: &'static str, data: impl Serialize) -> Self {
        Self {
            event,
            data: serde_json::to_value(data).unwrap_or_default(),
        }
    }

    /// Encodes the event as a websocket text frame.
    pub fn to_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn room_message(message: &RoomMessageDto) -> Self {
        Self::new(ROOM_MESSAGE, message)
    }

    pub fn typing(started: bool, room_id: i32, user_id: i32) -> Self {
        let event = if started { TYPING_START } else { TYPING_STOP };
        Self::new(event, json!({ "room_id": room_id, "user_id": user_id }))
    }

    pub fn room_access_requested(request: &AccessRequestDto) -> Self {
        Self::new(ROOM_ACCESS_REQUESTED, request)
    }

    pub fn room_access_decided(approved: bool, room_id: i32, room_name: &str) -> Self {
        let event = if approved {
            ROOM_ACCESS_APPROVED
        } else {
            ROOM_ACCESS_DENIED
        };
        Self::new(event, json!({ "room_id": room_id, "room_name": room_name }))
    }

    pub fn notification_new(notification: &NotificationDto) -> Self {
        Self::new(NOTIFICATION_NEW, notification)
    }

    pub fn connection_request(connection: &ConnectionDto) -> Self {
        Self::new(CONNECTION_REQUEST, connection)
    }

    pub fn connection_accepted(connection: &ConnectionDto) -> Self {
        Self::new(CONNECTION_ACCEPTED, connection)
    }

    pub fn presence(online: bool, user_id: i32) -> Self {
        let event = if online {
            PRESENCE_ONLINE
        } else {
            PRESENCE_OFFLINE
        };
        Self::new(event, json!({ "user_id": user_id }))
    }

    pub fn pong() -> Self {
        Self::new(PONG, json!({}))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ERROR, json!({ "message": message.into() }))
    }
}

/// Event sent by a client over its websocket.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", content = "data")]
pub enum ClientEvent {
    #[serde(rename = "typing:start")]
    TypingStart { room_id: i32 },
    #[serde(rename = "typing:stop")]
    TypingStop { room_id: i32 },
    #[serde(rename = "room:message")]
    RoomMessage { room_id: i32, content: String },
    #[serde(rename = "ping")]
    Ping,
}
