use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::session::AuthSession;

/// Bearer token sessions keyed by token digest.
pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new session for `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<AuthSession, DbErr> {
        let entity = entity::auth_session::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token_hash: ActiveValue::Set(token_hash),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AuthSession::from_entity(entity))
    }

    /// Finds a session by token digest that has not expired at `now`.
    pub async fn find_active(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<AuthSession>, DbErr> {
        let entity = entity::prelude::AuthSession::find()
            .filter(entity::auth_session::Column::TokenHash.eq(token_hash))
            .filter(entity::auth_session::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await?;

        Ok(entity.map(AuthSession::from_entity))
    }

    /// Deletes the session with the given token digest.
    ///
    /// # Returns
    /// - `Ok(true)` - A session was deleted
    /// - `Ok(false)` - No session matched
    pub async fn delete_by_hash(&self, token_hash: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AuthSession::delete_many()
            .filter(entity::auth_session::Column::TokenHash.eq(token_hash))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every session that expired at or before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of sessions removed
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::AuthSession::delete_many()
            .filter(entity::auth_session::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
