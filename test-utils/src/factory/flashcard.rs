//! Flashcard factory for creating test flashcard entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating flashcards inside a lesson.
///
/// New cards default to the initial schedule: ease 2.5, no repetitions, due now.
pub struct FlashcardFactory<'a> {
    db: &'a DatabaseConnection,
    lesson_id: i32,
    front: String,
    back: String,
    ease_factor: f64,
    interval_days: i32,
    repetitions: i32,
    due_at: DateTime<Utc>,
}

impl<'a> FlashcardFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, lesson_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            lesson_id,
            front: format!("Question {}", id),
            back: format!("Answer {}", id),
            ease_factor: 2.5,
            interval_days: 0,
            repetitions: 0,
            due_at: Utc::now(),
        }
    }

    pub fn front(mut self, front: impl Into<String>) -> Self {
        self.front = front.into();
        self
    }

    pub fn back(mut self, back: impl Into<String>) -> Self {
        self.back = back.into();
        self
    }

    /// Sets the schedule state directly.
    pub fn schedule(mut self, ease_factor: f64, interval_days: i32, repetitions: i32) -> Self {
        self.ease_factor = ease_factor;
        self.interval_days = interval_days;
        self.repetitions = repetitions;
        self
    }

    pub fn due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = due_at;
        self
    }

    pub async fn build(self) -> Result<entity::flashcard::Model, DbErr> {
        entity::flashcard::ActiveModel {
            lesson_id: ActiveValue::Set(self.lesson_id),
            front: ActiveValue::Set(self.front),
            back: ActiveValue::Set(self.back),
            ease_factor: ActiveValue::Set(self.ease_factor),
            interval_days: ActiveValue::Set(self.interval_days),
            repetitions: ActiveValue::Set(self.repetitions),
            due_at: ActiveValue::Set(self.due_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flashcard with default values in the given lesson.
pub async fn create_flashcard(
    db: &DatabaseConnection,
    lesson_id: i32,
) -> Result<entity::flashcard::Model, DbErr> {
    FlashcardFactory::new(db, lesson_id).build().await
}
