//! Flashcards within lessons and their review scheduling.

pub mod schedule;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{flashcard::FlashcardRepository, flashcard_review::FlashcardReviewRepository},
    error::AppError,
    model::flashcard::{CreateFlashcardParams, Flashcard, UpdateFlashcardParams},
    service::{
        flashcard::schedule::{due_after, next_schedule, MAX_QUALITY, MIN_QUALITY},
        lesson::LessonService,
        progress::XP_PER_REVIEW_QUALITY,
        user::UserService,
    },
};

/// Upper bound for the due cards query.
pub const MAX_DUE_LIMIT: u64 = 100;

pub struct FlashcardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlashcardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a card to an owned lesson. New cards are due immediately.
    pub async fn create(
        &self,
        user_id: i32,
        mut param: CreateFlashcardParams,
    ) -> Result<Flashcard, AppError> {
        LessonService::new(self.db)
            .get(param.lesson_id, user_id)
            .await?;

        param.front = require_text("Front", &param.front)?;
        param.back = require_text("Back", &param.back)?;

        Ok(FlashcardRepository::new(self.db).create(param).await?)
    }

    pub async fn list(&self, lesson_id: i32, user_id: i32) -> Result<Vec<Flashcard>, AppError> {
        LessonService::new(self.db).get(lesson_id, user_id).await?;

        Ok(FlashcardRepository::new(self.db)
            .get_by_lesson_id(lesson_id)
            .await?)
    }

    /// Gets a card from one of the caller's lessons
    ///
    /// # Returns
    /// - `Ok(Flashcard)` - The card
    /// - `Err(AppError::NotFound)` - Card missing or in someone else's lesson
    pub async fn get(&self, id: i32, user_id: i32) -> Result<Flashcard, AppError> {
        FlashcardRepository::new(self.db)
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Flashcard not found".to_string()))
    }

    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        mut param: UpdateFlashcardParams,
    ) -> Result<Flashcard, AppError> {
        self.get(id, user_id).await?;

        if let Some(front) = param.front.as_deref() {
            param.front = Some(require_text("Front", front)?);
        }
        if let Some(back) = param.back.as_deref() {
            param.back = Some(require_text("Back", back)?);
        }

        Ok(FlashcardRepository::new(self.db)
            .update_content(id, param)
            .await?)
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        self.get(id, user_id).await?;

        FlashcardRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Gets the caller's cards that are due now, oldest due first
    pub async fn due(&self, user_id: i32, limit: u64) -> Result<Vec<Flashcard>, AppError> {
        let limit = limit.clamp(1, MAX_DUE_LIMIT);

        Ok(FlashcardRepository::new(self.db)
            .get_due(user_id, Utc::now(), limit)
            .await?)
    }

    /// Records a review and reschedules the card
    ///
    /// # Arguments
    /// - `id` - Card being reviewed
    /// - `user_id` - Reviewer, who must own the card's lesson
    /// - `quality` - Recall rating from 1 to 5
    ///
    /// # Returns
    /// - `Ok(Flashcard)` - The card with its new schedule
    /// - `Err(AppError::BadRequest)` - Quality outside 1-5
    /// - `Err(AppError::NotFound)` - Card missing or not owned
    pub async fn review(&self, id: i32, user_id: i32, quality: i32) -> Result<Flashcard, AppError> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(AppError::BadRequest(format!(
                "Quality must be between {} and {}",
                MIN_QUALITY, MAX_QUALITY
            )));
        }

        let card = self.get(id, user_id).await?;

        let now = Utc::now();
        let schedule = next_schedule(card.schedule, quality);
        let card = FlashcardRepository::new(self.db)
            .update_schedule(id, schedule, due_after(&schedule, now)?)
            .await?;

        FlashcardReviewRepository::new(self.db)
            .create(id, user_id, quality)
            .await?;

        UserService::new(self.db)
            .award_xp(user_id, XP_PER_REVIEW_QUALITY * quality)
            .await?;

        Ok(card)
    }
}

fn require_text(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(value.to_string())
}
