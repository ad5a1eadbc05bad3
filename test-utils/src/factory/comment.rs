//! Comment factory for community tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment by `author_id` on `post_id`.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
    author_id: i32,
    body: &str,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        author_id: ActiveValue::Set(author_id),
        body: ActiveValue::Set(body.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
