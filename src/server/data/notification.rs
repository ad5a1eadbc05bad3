//! Notification data repository. Every query is scoped to the owning user.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{Notification, NotifyParams};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unread notification
    pub async fn create(&self, param: NotifyParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            kind: ActiveValue::Set(param.kind.to_string()),
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            link: ActiveValue::Set(param.link),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets a page of a user's notifications, newest first
    ///
    /// # Arguments
    /// - `user_id` - Owner of the notifications
    /// - `unread_only` - Skip notifications already marked read
    /// - `page` - Zero-based page number
    /// - `per_page` - Page size
    pub async fn get_paginated(
        &self,
        user_id: i32,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64), DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));

        if unread_only {
            query = query.filter(entity::notification::Column::IsRead.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let notifications = paginator.fetch_page(page).await?;

        Ok((
            notifications
                .into_iter()
                .map(Notification::from_entity)
                .collect(),
            total,
        ))
    }

    /// Counts a user's unread notifications
    pub async fn count_unread(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Marks one notification read
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The updated notification
    /// - `Ok(None)` - Notification missing or owned by someone else
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(notification) = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::notification::ActiveModel = notification.into();
        active_model.is_read = ActiveValue::Set(true);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Notification::from_entity(entity)))
    }

    /// Marks every unread notification of a user read
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications changed
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a notification owned by `user_id`
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
