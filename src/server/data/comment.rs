use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        post_id: i32,
        author_id: i32,
        body: String,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            author_id: ActiveValue::Set(author_id),
            body: ActiveValue::Set(body),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id).one(self.db).await
    }

    /// Gets the comments of a post, oldest first
    pub async fn get_by_post_id(&self, post_id: i32) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_by_post_id(&self, post_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .count(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
