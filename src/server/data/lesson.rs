//! Lesson data repository.
//!
//! Every read and write is scoped by owner, so a lesson that belongs to someone else looks
//! exactly like a missing one.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::lesson::{CreateLessonParams, Lesson, UpdateLessonParams};

pub struct LessonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new lesson
    pub async fn create(&self, param: CreateLessonParams) -> Result<Lesson, DbErr> {
        let now = Utc::now();
        let entity = entity::lesson::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lesson::from_entity(entity))
    }

    /// Gets a lesson by ID if it is owned by `user_id`
    pub async fn find_owned(&self, id: i32, user_id: i32) -> Result<Option<Lesson>, DbErr> {
        let entity = entity::prelude::Lesson::find_by_id(id)
            .filter(entity::lesson::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Lesson::from_entity))
    }

    /// Gets a page of the user's lessons, newest first
    ///
    /// # Returns
    /// - `Ok((lessons, total))` - Lessons on the requested page and the total lesson count
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Lesson>, u64), DbErr> {
        let paginator = entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::UserId.eq(user_id))
            .order_by_desc(entity::lesson::Column::CreatedAt)
            .order_by_desc(entity::lesson::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let lessons = paginator.fetch_page(page).await?;

        Ok((
            lessons.into_iter().map(Lesson::from_entity).collect(),
            total,
        ))
    }

    /// Applies a partial update to an owned lesson
    ///
    /// # Returns
    /// - `Ok(Some(Lesson))` - The updated lesson
    /// - `Ok(None)` - Lesson missing or not owned by `user_id`
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        param: UpdateLessonParams,
    ) -> Result<Option<Lesson>, DbErr> {
        let Some(lesson) = entity::prelude::Lesson::find_by_id(id)
            .filter(entity::lesson::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::lesson::ActiveModel = lesson.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(notes) = param.notes {
            active_model.notes = ActiveValue::Set(Some(notes));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Lesson::from_entity(entity)))
    }

    /// Deletes an owned lesson. Files, cards and exercises cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Lesson deleted
    /// - `Ok(false)` - Lesson missing or not owned by `user_id`
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Lesson::delete_many()
            .filter(entity::lesson::Column::Id.eq(id))
            .filter(entity::lesson::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
