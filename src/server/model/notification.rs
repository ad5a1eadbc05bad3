use chrono::{DateTime, Utc};

use crate::model::notification::NotificationDto;

/// Notification kinds emitted by the server.
pub mod kind {
    pub const CONNECTION_REQUEST: &str = "connection_request";
    pub const CONNECTION_ACCEPTED: &str = "connection_accepted";
    pub const ROOM_ACCESS_REQUESTED: &str = "room_access_requested";
    pub const ROOM_ACCESS_APPROVED: &str = "room_access_approved";
    pub const ROOM_ACCESS_DENIED: &str = "room_access_denied";
    pub const POST_COMMENT: &str = "post_comment";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            kind: self.kind,
            title: self.title,
            body: self.body,
            link: self.link,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            title: entity.title,
            body: entity.body,
            link: entity.link,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for notifying a user.
#[derive(Debug, Clone)]
pub struct NotifyParams {
    pub user_id: i32,
    pub kind: &'static str,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
}
