//! Community feed: posts, comments and reactions.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        comment::CommentRepository, post::PostRepository, reaction::ReactionRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        notification::{kind, NotifyParams},
        post::{Comment, CreatePostParams, Post, PostView, ReactionKind, UpdatePostParams},
        Paginated,
    },
    realtime::hub::Hub,
    service::notification::NotificationService,
    util::pagination::total_pages,
};

const TITLE_MAX_CHARS: usize = 200;
const BODY_MAX_CHARS: usize = 20_000;
const COMMENT_MAX_CHARS: usize = 4000;

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a Hub,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a Hub) -> Self {
        Self { db, hub }
    }

    /// Gets a page of the feed, newest first, as seen by `viewer_id`
    pub async fn feed(
        &self,
        viewer_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<PostView>, AppError> {
        let (posts, total) = PostRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        let mut items = Vec::with_capacity(posts.len());
        for post in posts {
            items.push(self.view(post, viewer_id).await?);
        }

        Ok(Paginated {
            items,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn create(&self, mut param: CreatePostParams) -> Result<PostView, AppError> {
        param.title = require_text("Title", &param.title, TITLE_MAX_CHARS)?;
        param.body = require_text("Body", &param.body, BODY_MAX_CHARS)?;

        let viewer_id = param.author_id;
        let post = PostRepository::new(self.db).create(param).await?;

        tracing::debug!("User {} created post {}", post.author_id, post.id);

        self.view(post, viewer_id).await
    }

    pub async fn get(&self, id: i32, viewer_id: i32) -> Result<PostView, AppError> {
        let post = self.find(id).await?;

        self.view(post, viewer_id).await
    }

    /// Updates a post written by the caller
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        mut param: UpdatePostParams,
    ) -> Result<PostView, AppError> {
        self.find_authored(id, user_id).await?;

        if let Some(title) = param.title.as_deref() {
            param.title = Some(require_text("Title", title, TITLE_MAX_CHARS)?);
        }
        if let Some(body) = param.body.as_deref() {
            param.body = Some(require_text("Body", body, BODY_MAX_CHARS)?);
        }

        let post = PostRepository::new(self.db).update(id, param).await?;

        self.view(post, user_id).await
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        self.find_authored(id, user_id).await?;

        PostRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Lists a post's comments, oldest first
    pub async fn comments(&self, post_id: i32) -> Result<Vec<Comment>, AppError> {
        self.find(post_id).await?;

        let entities = CommentRepository::new(self.db)
            .get_by_post_id(post_id)
            .await?;

        let mut author_ids: Vec<i32> = entities.iter().map(|comment| comment.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let authors = UserRepository::new(self.db).find_by_ids(author_ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let author_name = authors
                    .get(&entity.author_id)
                    .map(|user| user.display_name.clone())
                    .unwrap_or_default();
                Comment::from_entity(entity, author_name)
            })
            .collect())
    }

    /// Adds a comment, notifying the post author when someone else comments
    pub async fn add_comment(
        &self,
        post_id: i32,
        user_id: i32,
        body: &str,
    ) -> Result<Comment, AppError> {
        let body = require_text("Comment", body, COMMENT_MAX_CHARS)?;
        let post = self.find(post_id).await?;

        let author = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let entity = CommentRepository::new(self.db)
            .create(post_id, user_id, body)
            .await?;

        if post.author_id != user_id {
            NotificationService::new(self.db, self.hub)
                .notify(NotifyParams {
                    user_id: post.author_id,
                    kind: kind::POST_COMMENT,
                    title: "New comment".to_string(),
                    body: format!("{} commented on \"{}\"", author.display_name, post.title),
                    link: Some(format!("/community/posts/{}", post.id)),
                })
                .await?;
        }

        Ok(Comment::from_entity(entity, author.display_name))
    }

    /// Deletes a comment. Allowed for the comment author and the post author.
    pub async fn delete_comment(&self, comment_id: i32, user_id: i32) -> Result<(), AppError> {
        let comment_repo = CommentRepository::new(self.db);
        let comment = comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.author_id != user_id {
            let post = self.find(comment.post_id).await?;
            if post.author_id != user_id {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!("not the author of comment {} or its post", comment_id),
                )
                .into());
            }
        }

        comment_repo.delete(comment_id).await?;

        Ok(())
    }

    /// Sets the caller's reaction on a post, replacing any earlier one
    pub async fn set_reaction(
        &self,
        post_id: i32,
        user_id: i32,
        reaction: &str,
    ) -> Result<PostView, AppError> {
        let reaction = ReactionKind::parse(reaction.trim())
            .ok_or_else(|| AppError::BadRequest(format!("Unknown reaction '{}'", reaction)))?;
        let post = self.find(post_id).await?;

        ReactionRepository::new(self.db)
            .upsert(post_id, user_id, reaction)
            .await?;

        self.view(post, user_id).await
    }

    /// Removes the caller's reaction from a post, if any
    pub async fn clear_reaction(&self, post_id: i32, user_id: i32) -> Result<PostView, AppError> {
        let post = self.find(post_id).await?;

        ReactionRepository::new(self.db)
            .delete(post_id, user_id)
            .await?;

        self.view(post, user_id).await
    }

    async fn find(&self, id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    async fn find_authored(&self, id: i32, user_id: i32) -> Result<Post, AppError> {
        let post = self.find(id).await?;

        if post.author_id != user_id {
            return Err(
                AuthError::AccessDenied(user_id, format!("not the author of post {}", id)).into(),
            );
        }

        Ok(post)
    }

    /// Gathers author name, comment count and reactions for one post.
    async fn view(&self, post: Post, viewer_id: i32) -> Result<PostView, AppError> {
        let author_name = UserRepository::new(self.db)
            .find_by_id(post.author_id)
            .await?
            .map(|user| user.display_name)
            .unwrap_or_default();

        let comment_count = CommentRepository::new(self.db)
            .count_by_post_id(post.id)
            .await?;

        let reaction_repo = ReactionRepository::new(self.db);
        let reactions = reaction_repo.count_by_post_id(post.id).await?;
        let my_reaction = reaction_repo.find_kind(post.id, viewer_id).await?;

        Ok(PostView {
            post,
            author_name,
            comment_count,
            reactions,
            my_reaction,
        })
    }
}

fn require_text(field: &str, value: &str, max_chars: usize) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() || value.chars().count() > max_chars {
        return Err(AppError::BadRequest(format!(
            "{} must be between 1 and {} characters",
            field, max_chars
        )));
    }

    Ok(value.to_string())
}
