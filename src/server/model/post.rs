//! Community post, comment and reaction domain models.

use chrono::{DateTime, Utc};

use crate::model::post::{CommentDto, CreatePostDto, PostDto, ReactionCountsDto, UpdatePostDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Like,
    Love,
    Insightful,
    Funny,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Insightful => "insightful",
            Self::Funny => "funny",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "like" => Some(Self::Like),
            "love" => Some(Self::Love),
            "insightful" => Some(Self::Insightful),
            "funny" => Some(Self::Funny),
            _ => None,
        }
    }
}

/// Per-kind reaction totals for one post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionCounts {
    pub like: u64,
    pub love: u64,
    pub insightful: u64,
    pub funny: u64,
}

impl ReactionCounts {
    pub fn add(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::Like => self.like += 1,
            ReactionKind::Love => self.love += 1,
            ReactionKind::Insightful => self.insightful += 1,
            ReactionKind::Funny => self.funny += 1,
        }
    }

    pub fn into_dto(self) -> ReactionCountsDto {
        ReactionCountsDto {
            like: self.like,
            love: self.love,
            insightful: self.insightful,
            funny: self.funny,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            title: entity.title,
            body: entity.body,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A post with its author name, engagement counts and the caller's reaction.
#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    pub post: Post,
    pub author_name: String,
    pub comment_count: u64,
    pub reactions: ReactionCounts,
    pub my_reaction: Option<ReactionKind>,
}

impl PostView {
    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.post.id,
            author_id: self.post.author_id,
            author_name: self.author_name,
            title: self.post.title,
            body: self.post.body,
            created_at: self.post.created_at,
            updated_at: self.post.updated_at,
            comment_count: self.comment_count,
            reactions: self.reactions.into_dto(),
            my_reaction: self.my_reaction.map(|kind| kind.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub author_id: i32,
    pub title: String,
    pub body: String,
}

impl CreatePostParams {
    pub fn from_dto(author_id: i32, dto: CreatePostDto) -> Self {
        Self {
            author_id,
            title: dto.title,
            body: dto.body,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePostParams {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl UpdatePostParams {
    pub fn from_dto(dto: UpdatePostDto) -> Self {
        Self {
            title: dto.title,
            body: dto.body,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model, author_name: String) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            author_id: entity.author_id,
            author_name,
            body: entity.body,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            post_id: self.post_id,
            author_id: self.author_id,
            author_name: self.author_name,
            body: self.body,
            created_at: self.created_at,
        }
    }
}
