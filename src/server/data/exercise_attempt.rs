use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::exercise::{CreateAttemptParams, ExerciseAttempt},
};

pub struct ExerciseAttemptRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExerciseAttemptRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a graded (or pending) attempt
    pub async fn create(&self, param: CreateAttemptParams) -> Result<ExerciseAttempt, AppError> {
        let entity = entity::exercise_attempt::ActiveModel {
            exercise_id: ActiveValue::Set(param.exercise_id),
            user_id: ActiveValue::Set(param.user_id),
            answer: ActiveValue::Set(param.answer),
            is_correct: ActiveValue::Set(param.is_correct),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            points_awarded: ActiveValue::Set(param.points_awarded),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ExerciseAttempt::from_entity(entity)
    }

    /// Gets a user's attempts at an exercise, newest first
    pub async fn get_by_exercise_and_user(
        &self,
        exercise_id: i32,
        user_id: i32,
    ) -> Result<Vec<ExerciseAttempt>, AppError> {
        let entities = entity::prelude::ExerciseAttempt::find()
            .filter(entity::exercise_attempt::Column::ExerciseId.eq(exercise_id))
            .filter(entity::exercise_attempt::Column::UserId.eq(user_id))
            .order_by_desc(entity::exercise_attempt::Column::CreatedAt)
            .order_by_desc(entity::exercise_attempt::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(ExerciseAttempt::from_entity)
            .collect()
    }
}
