//! Post factory for community tests.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating forum posts.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        Self {
            db,
            author_id,
            title: format!("Post {}", next_id()),
            body: "Post body".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for `author_id`.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
