use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct ReactionCountsDto {
    pub like: u64,
    pub love: u64,
    pub insightful: u64,
    pub funny: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PostDto {
    pub id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comment_count: u64,
    pub reactions: ReactionCountsDto,
    /// The caller's own reaction kind, if any.
    pub my_reaction: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreatePostDto {
    pub title: String,
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub body: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PaginatedPostsDto {
    pub items: Vec<PostDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub post_id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateCommentDto {
    pub body: String,
}

/// One of `like`, `love`, `insightful`, `funny`.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SetReactionDto {
    pub kind: String,
}
