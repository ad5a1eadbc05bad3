//! Exercise factory for creating test lesson exercises.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating exercises inside a lesson.
///
/// Defaults to a multiple choice exercise with options `["A", "B", "C"]` and correct answer
/// `"B"`.
pub struct ExerciseFactory<'a> {
    db: &'a DatabaseConnection,
    lesson_id: i32,
    exercise_type: String,
    question: String,
    options: Option<Vec<String>>,
    correct_answer: Option<String>,
    points: i32,
    position: i32,
}

impl<'a> ExerciseFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, lesson_id: i32) -> Self {
        Self {
            db,
            lesson_id,
            exercise_type: "multiple_choice".to_string(),
            question: format!("Question {}", next_id()),
            options: Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]),
            correct_answer: Some("B".to_string()),
            points: 10,
            position: 0,
        }
    }

    pub fn exercise_type(mut self, exercise_type: impl Into<String>) -> Self {
        self.exercise_type = exercise_type.into();
        self
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn options(mut self, options: Option<Vec<String>>) -> Self {
        self.options = options;
        self
    }

    pub fn correct_answer(mut self, correct_answer: Option<String>) -> Self {
        self.correct_answer = correct_answer;
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub async fn build(self) -> Result<entity::lesson_exercise::Model, DbErr> {
        let options = self
            .options
            .map(|options| serde_json::to_string(&options))
            .transpose()
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::lesson_exercise::ActiveModel {
            lesson_id: ActiveValue::Set(self.lesson_id),
            exercise_type: ActiveValue::Set(self.exercise_type),
            question: ActiveValue::Set(self.question),
            options: ActiveValue::Set(options),
            correct_answer: ActiveValue::Set(self.correct_answer),
            points: ActiveValue::Set(self.points),
            position: ActiveValue::Set(self.position),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default multiple choice exercise in the given lesson.
pub async fn create_exercise(
    db: &DatabaseConnection,
    lesson_id: i32,
) -> Result<entity::lesson_exercise::Model, DbErr> {
    ExerciseFactory::new(db, lesson_id).build().await
}
