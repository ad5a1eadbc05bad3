//! Connection (friend graph) data repository.
//!
//! Edges are directed from requester to addressee. At most one row exists per ordered
//! pair; the service layer keeps a single edge per unordered pair.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::connection::{Connection, ConnectionStatus},
};

pub struct ConnectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConnectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an edge from `requester_id` to `addressee_id`
    pub async fn create(
        &self,
        requester_id: i32,
        addressee_id: i32,
        status: ConnectionStatus,
    ) -> Result<Connection, AppError> {
        let now = Utc::now();
        let entity = entity::connection::ActiveModel {
            requester_id: ActiveValue::Set(requester_id),
            addressee_id: ActiveValue::Set(addressee_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Connection::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Connection>, AppError> {
        let entity = entity::prelude::Connection::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Connection::from_entity).transpose()
    }

    /// Gets the edges between two users in either direction
    pub async fn find_between(&self, a: i32, b: i32) -> Result<Vec<Connection>, AppError> {
        let entities = entity::prelude::Connection::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::connection::Column::RequesterId.eq(a))
                            .add(entity::connection::Column::AddresseeId.eq(b)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::connection::Column::RequesterId.eq(b))
                            .add(entity::connection::Column::AddresseeId.eq(a)),
                    ),
            )
            .all(self.db)
            .await?;

        entities.into_iter().map(Connection::from_entity).collect()
    }

    /// Sets the status of an edge, optionally re-pointing it from a new requester.
    ///
    /// # Arguments
    /// - `id` - Edge to update
    /// - `status` - New status
    /// - `direction` - `Some((requester_id, addressee_id))` to rewrite the direction
    pub async fn update_status(
        &self,
        id: i32,
        status: ConnectionStatus,
        direction: Option<(i32, i32)>,
    ) -> Result<Connection, AppError> {
        let connection = entity::prelude::Connection::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Connection with id {} not found",
                id
            )))?;

        let mut active_model: entity::connection::ActiveModel = connection.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        if let Some((requester_id, addressee_id)) = direction {
            active_model.requester_id = ActiveValue::Set(requester_id);
            active_model.addressee_id = ActiveValue::Set(addressee_id);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Connection::from_entity(entity)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Connection::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets accepted edges touching `user_id`, most recently changed first
    pub async fn get_accepted(&self, user_id: i32) -> Result<Vec<Connection>, AppError> {
        let entities = entity::prelude::Connection::find()
            .filter(entity::connection::Column::Status.eq(ConnectionStatus::Accepted.as_str()))
            .filter(
                Condition::any()
                    .add(entity::connection::Column::RequesterId.eq(user_id))
                    .add(entity::connection::Column::AddresseeId.eq(user_id)),
            )
            .order_by_desc(entity::connection::Column::UpdatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Connection::from_entity).collect()
    }

    /// Gets pending requests addressed to `user_id`, newest first
    pub async fn get_incoming_pending(&self, user_id: i32) -> Result<Vec<Connection>, AppError> {
        let entities = entity::prelude::Connection::find()
            .filter(entity::connection::Column::Status.eq(ConnectionStatus::Pending.as_str()))
            .filter(entity::connection::Column::AddresseeId.eq(user_id))
            .order_by_desc(entity::connection::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Connection::from_entity).collect()
    }

    /// Gets pending requests sent by `user_id`, newest first
    pub async fn get_outgoing_pending(&self, user_id: i32) -> Result<Vec<Connection>, AppError> {
        let entities = entity::prelude::Connection::find()
            .filter(entity::connection::Column::Status.eq(ConnectionStatus::Pending.as_str()))
            .filter(entity::connection::Column::RequesterId.eq(user_id))
            .order_by_desc(entity::connection::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Connection::from_entity).collect()
    }

    /// Gets the IDs of every accepted friend of `user_id`
    pub async fn get_friend_ids(&self, user_id: i32) -> Result<Vec<i32>, AppError> {
        Ok(self
            .get_accepted(user_id)
            .await?
            .into_iter()
            .map(|connection| connection.other_party(user_id))
            .collect())
    }
}
