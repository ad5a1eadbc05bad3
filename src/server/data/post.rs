use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::post::{CreatePostParams, Post, UpdatePostParams};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new post
    pub async fn create(&self, param: CreatePostParams) -> Result<Post, DbErr> {
        let now = Utc::now();
        let entity = entity::post::ActiveModel {
            author_id: ActiveValue::Set(param.author_id),
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Gets a page of the feed, newest first
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Post>, u64), DbErr> {
        let paginator = entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let posts = paginator.fetch_page(page).await?;

        Ok((posts.into_iter().map(Post::from_entity).collect(), total))
    }

    /// Applies a partial update to a post
    pub async fn update(&self, id: i32, param: UpdatePostParams) -> Result<Post, DbErr> {
        let post = entity::prelude::Post::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Post with id {} not found",
                id
            )))?;

        let mut active_model: entity::post::ActiveModel = post.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(body) = param.body {
            active_model.body = ActiveValue::Set(body);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Post::from_entity(entity))
    }

    /// Deletes a post. Comments and reactions cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Post::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
