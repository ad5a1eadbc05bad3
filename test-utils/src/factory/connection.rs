//! Connection factory for creating friend graph edges.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating connection edges between two users.
///
/// Defaults to a `pending` edge.
pub struct ConnectionFactory<'a> {
    db: &'a DatabaseConnection,
    requester_id: i32,
    addressee_id: i32,
    status: String,
}

impl<'a> ConnectionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, requester_id: i32, addressee_id: i32) -> Self {
        Self {
            db,
            requester_id,
            addressee_id,
            status: "pending".to_string(),
        }
    }

    /// Sets the edge status (`pending`, `accepted`, `rejected` or `blocked`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::connection::Model, DbErr> {
        let now = Utc::now();
        entity::connection::ActiveModel {
            requester_id: ActiveValue::Set(self.requester_id),
            addressee_id: ActiveValue::Set(self.addressee_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending connection from `requester_id` to `addressee_id`.
pub async fn create_connection(
    db: &DatabaseConnection,
    requester_id: i32,
    addressee_id: i32,
) -> Result<entity::connection::Model, DbErr> {
    ConnectionFactory::new(db, requester_id, addressee_id)
        .build()
        .await
}
