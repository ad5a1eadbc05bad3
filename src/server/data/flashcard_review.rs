use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Append-only log of flashcard reviews.
pub struct FlashcardReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlashcardReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one review of a card.
    pub async fn create(
        &self,
        flashcard_id: i32,
        user_id: i32,
        quality: i32,
    ) -> Result<entity::flashcard_review::Model, DbErr> {
        entity::flashcard_review::ActiveModel {
            flashcard_id: ActiveValue::Set(flashcard_id),
            user_id: ActiveValue::Set(user_id),
            quality: ActiveValue::Set(quality),
            reviewed_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
