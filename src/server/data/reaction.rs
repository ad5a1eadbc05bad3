//! Post reaction data repository. A user holds at most one reaction per post.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::post::{ReactionCounts, ReactionKind},
};

pub struct ReactionRepository<'a> {
    db: &'a DatabaseConnection,
}

fn parse_kind(value: &str) -> Result<ReactionKind, AppError> {
    ReactionKind::parse(value).ok_or_else(|| {
        InternalError::UnknownStoredValue {
            field: "reaction.kind",
            value: value.to_string(),
        }
        .into()
    })
}

impl<'a> ReactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the user's reaction on a post, replacing any previous kind
    pub async fn upsert(
        &self,
        post_id: i32,
        user_id: i32,
        kind: ReactionKind,
    ) -> Result<(), DbErr> {
        let existing = entity::prelude::Reaction::find()
            .filter(entity::reaction::Column::PostId.eq(post_id))
            .filter(entity::reaction::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        match existing {
            Some(reaction) => {
                let mut active_model: entity::reaction::ActiveModel = reaction.into();
                active_model.kind = ActiveValue::Set(kind.as_str().to_string());
                active_model.update(self.db).await?;
            }
            None => {
                entity::reaction::ActiveModel {
                    post_id: ActiveValue::Set(post_id),
                    user_id: ActiveValue::Set(user_id),
                    kind: ActiveValue::Set(kind.as_str().to_string()),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Removes the user's reaction on a post
    ///
    /// # Returns
    /// - `Ok(true)` - A reaction was removed
    /// - `Ok(false)` - The user had not reacted
    pub async fn delete(&self, post_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reaction::delete_many()
            .filter(entity::reaction::Column::PostId.eq(post_id))
            .filter(entity::reaction::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the user's reaction on a post, if any
    pub async fn find_kind(
        &self,
        post_id: i32,
        user_id: i32,
    ) -> Result<Option<ReactionKind>, AppError> {
        let reaction = entity::prelude::Reaction::find()
            .filter(entity::reaction::Column::PostId.eq(post_id))
            .filter(entity::reaction::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        reaction.map(|r| parse_kind(&r.kind)).transpose()
    }

    /// Totals the reactions on a post by kind
    pub async fn count_by_post_id(&self, post_id: i32) -> Result<ReactionCounts, AppError> {
        let reactions = entity::prelude::Reaction::find()
            .filter(entity::reaction::Column::PostId.eq(post_id))
            .all(self.db)
            .await?;

        let mut counts = ReactionCounts::default();
        for reaction in reactions {
            counts.add(parse_kind(&reaction.kind)?);
        }

        Ok(counts)
    }
}
