//! Lesson factory for creating test lesson entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lessons owned by a user.
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    description: Option<String>,
    notes: Option<String>,
}

impl<'a> LessonFactory<'a> {
    /// Creates a new LessonFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Lesson {id}"`
    /// - description: `None`
    /// - notes: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            title: format!("Lesson {}", next_id()),
            description: None,
            notes: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        let now = Utc::now();
        entity::lesson::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lesson with default values for the given owner.
pub async fn create_lesson(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db, user_id).build().await
}
