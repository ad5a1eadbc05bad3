//! Flashcard data repository.
//!
//! Ownership of a card is the ownership of its lesson, so owner-scoped lookups join the
//! lesson table.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::flashcard::{
    CreateFlashcardParams, Flashcard, Schedule, UpdateFlashcardParams,
};

pub struct FlashcardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlashcardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a card with the initial schedule, due immediately.
    pub async fn create(&self, param: CreateFlashcardParams) -> Result<Flashcard, DbErr> {
        let now = Utc::now();
        let schedule = Schedule::default();
        let entity = entity::flashcard::ActiveModel {
            lesson_id: ActiveValue::Set(param.lesson_id),
            front: ActiveValue::Set(param.front),
            back: ActiveValue::Set(param.back),
            ease_factor: ActiveValue::Set(schedule.ease_factor),
            interval_days: ActiveValue::Set(schedule.interval_days),
            repetitions: ActiveValue::Set(schedule.repetitions),
            due_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Flashcard::from_entity(entity))
    }

    /// Gets a card by ID if its lesson is owned by `user_id`.
    pub async fn find_owned(&self, id: i32, user_id: i32) -> Result<Option<Flashcard>, DbErr> {
        let entity = entity::prelude::Flashcard::find_by_id(id)
            .join(
                JoinType::InnerJoin,
                entity::flashcard::Relation::Lesson.def(),
            )
            .filter(entity::lesson::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Flashcard::from_entity))
    }

    /// Gets every card of a lesson in creation order.
    pub async fn get_by_lesson_id(&self, lesson_id: i32) -> Result<Vec<Flashcard>, DbErr> {
        let entities = entity::prelude::Flashcard::find()
            .filter(entity::flashcard::Column::LessonId.eq(lesson_id))
            .order_by_asc(entity::flashcard::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flashcard::from_entity).collect())
    }

    /// Gets cards across the user's lessons that are due at `now`, oldest due first.
    pub async fn get_due(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Flashcard>, DbErr> {
        let entities = entity::prelude::Flashcard::find()
            .join(
                JoinType::InnerJoin,
                entity::flashcard::Relation::Lesson.def(),
            )
            .filter(entity::lesson::Column::UserId.eq(user_id))
            .filter(entity::flashcard::Column::DueAt.lte(now))
            .order_by_asc(entity::flashcard::Column::DueAt)
            .order_by_asc(entity::flashcard::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flashcard::from_entity).collect())
    }

    /// Updates the front and/or back text of a card.
    pub async fn update_content(
        &self,
        id: i32,
        param: UpdateFlashcardParams,
    ) -> Result<Flashcard, DbErr> {
        let card = entity::prelude::Flashcard::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Flashcard with id {} not found",
                id
            )))?;

        let mut active_model: entity::flashcard::ActiveModel = card.into();
        if let Some(front) = param.front {
            active_model.front = ActiveValue::Set(front);
        }
        if let Some(back) = param.back {
            active_model.back = ActiveValue::Set(back);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Flashcard::from_entity(entity))
    }

    /// Stores a new schedule and due date for a card.
    pub async fn update_schedule(
        &self,
        id: i32,
        schedule: Schedule,
        due_at: DateTime<Utc>,
    ) -> Result<Flashcard, DbErr> {
        let card = entity::prelude::Flashcard::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Flashcard with id {} not found",
                id
            )))?;

        let mut active_model: entity::flashcard::ActiveModel = card.into();
        active_model.ease_factor = ActiveValue::Set(schedule.ease_factor);
        active_model.interval_days = ActiveValue::Set(schedule.interval_days);
        active_model.repetitions = ActiveValue::Set(schedule.repetitions);
        active_model.due_at = ActiveValue::Set(due_at);

        let entity = active_model.update(self.db).await?;

        Ok(Flashcard::from_entity(entity))
    }

    /// Deletes a card. Reviews cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Flashcard::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
