//! Notification factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating notifications. Defaults to an unread `system` notification.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    kind: String,
    title: String,
    body: String,
    is_read: bool,
}

impl<'a> NotificationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            kind: "system".to_string(),
            title: format!("Notification {}", id),
            body: "Something happened".to_string(),
            is_read: false,
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn is_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set(self.kind),
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            link: ActiveValue::Set(None),
            is_read: ActiveValue::Set(self.is_read),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification for `user_id`.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
