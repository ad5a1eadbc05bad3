//! Exercise data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    error::AppError,
    model::exercise::{CreateExerciseParams, Exercise, UpdateExerciseParams},
};

pub struct ExerciseRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Encodes options as a JSON array, storing NULL for exercises without options.
fn encode_options(options: &[String]) -> Result<Option<String>, DbErr> {
    if options.is_empty() {
        return Ok(None);
    }

    serde_json::to_string(options)
        .map(Some)
        .map_err(|e| DbErr::Custom(format!("Failed to encode exercise options: {}", e)))
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new exercise
    pub async fn create(&self, param: CreateExerciseParams) -> Result<Exercise, AppError> {
        let entity = entity::lesson_exercise::ActiveModel {
            lesson_id: ActiveValue::Set(param.lesson_id),
            exercise_type: ActiveValue::Set(param.exercise_type.as_str().to_string()),
            question: ActiveValue::Set(param.question),
            options: ActiveValue::Set(encode_options(&param.options)?),
            correct_answer: ActiveValue::Set(param.correct_answer),
            points: ActiveValue::Set(param.points),
            position: ActiveValue::Set(param.position),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Exercise::from_entity(entity)
    }

    /// Gets an exercise by ID if its lesson is owned by `user_id`
    pub async fn find_owned(&self, id: i32, user_id: i32) -> Result<Option<Exercise>, AppError> {
        let entity = entity::prelude::LessonExercise::find_by_id(id)
            .join(
                JoinType::InnerJoin,
                entity::lesson_exercise::Relation::Lesson.def(),
            )
            .filter(entity::lesson::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        entity.map(Exercise::from_entity).transpose()
    }

    /// Gets all exercises of a lesson ordered by position, ties broken by ID
    pub async fn get_by_lesson_id(&self, lesson_id: i32) -> Result<Vec<Exercise>, AppError> {
        let entities = entity::prelude::LessonExercise::find()
            .filter(entity::lesson_exercise::Column::LessonId.eq(lesson_id))
            .order_by_asc(entity::lesson_exercise::Column::Position)
            .order_by_asc(entity::lesson_exercise::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Exercise::from_entity).collect()
    }

    /// Applies a partial update to an exercise
    pub async fn update(&self, id: i32, param: UpdateExerciseParams) -> Result<Exercise, AppError> {
        let exercise = entity::prelude::LessonExercise::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Exercise with id {} not found",
                id
            )))?;

        let mut active_model: entity::lesson_exercise::ActiveModel = exercise.into();
        if let Some(question) = param.question {
            active_model.question = ActiveValue::Set(question);
        }
        if let Some(options) = param.options {
            active_model.options = ActiveValue::Set(encode_options(&options)?);
        }
        if let Some(correct_answer) = param.correct_answer {
            active_model.correct_answer = ActiveValue::Set(Some(correct_answer));
        }
        if let Some(points) = param.points {
            active_model.points = ActiveValue::Set(points);
        }
        if let Some(position) = param.position {
            active_model.position = ActiveValue::Set(position);
        }

        let entity = active_model.update(self.db).await?;

        Exercise::from_entity(entity)
    }

    /// Deletes an exercise. Attempts cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::LessonExercise::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
