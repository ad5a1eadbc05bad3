//! Notification inbox and live pushes.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{
        notification::{Notification, NotifyParams},
        Paginated,
    },
    realtime::{event::ServerEvent, hub::Hub},
    util::pagination::total_pages,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a Hub,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a Hub) -> Self {
        Self { db, hub }
    }

    /// Stores a notification and pushes `notification:new` to the user's live connections
    pub async fn notify(&self, param: NotifyParams) -> Result<Notification, AppError> {
        let notification = NotificationRepository::new(self.db).create(param).await?;

        tracing::debug!(
            "Notified user {} ({})",
            notification.user_id,
            notification.kind
        );

        self.hub
            .emit(
                notification.user_id,
                &ServerEvent::notification_new(&notification.clone().into_dto()),
            )
            .await;

        Ok(notification)
    }

    /// Lists the user's notifications, newest first
    pub async fn list(
        &self,
        user_id: i32,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Notification>, AppError> {
        let (items, total) = NotificationRepository::new(self.db)
            .get_paginated(user_id, unread_only, page, per_page)
            .await?;

        Ok(Paginated {
            items,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .count_unread(user_id)
            .await?)
    }

    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(id, user_id)
            .await?
            .ok_or_else(notification_not_found)
    }

    /// Marks every unread notification read and returns how many changed
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let deleted = NotificationRepository::new(self.db)
            .delete(id, user_id)
            .await?;
        if !deleted {
            return Err(notification_not_found());
        }

        Ok(())
    }
}

fn notification_not_found() -> AppError {
    AppError::NotFound("Notification not found".to_string())
}
