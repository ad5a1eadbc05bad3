use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::room::{AccessRequest, AccessRequestStatus},
};

/// Requests to join private rooms. One row per (room, user); a denied request is reopened
/// rather than duplicated.
pub struct AccessRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a pending request for `user_id`, reusing an earlier decided row if present
    pub async fn open(&self, room_id: i32, user_id: i32) -> Result<AccessRequest, AppError> {
        let existing = entity::prelude::RoomAccessRequest::find()
            .filter(entity::room_access_request::Column::RoomId.eq(room_id))
            .filter(entity::room_access_request::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(request) => {
                let mut active_model: entity::room_access_request::ActiveModel = request.into();
                active_model.status =
                    ActiveValue::Set(AccessRequestStatus::Pending.as_str().to_string());
                active_model.created_at = ActiveValue::Set(Utc::now());
                active_model.decided_at = ActiveValue::Set(None);
                active_model.update(self.db).await?
            }
            None => {
                entity::room_access_request::ActiveModel {
                    room_id: ActiveValue::Set(room_id),
                    user_id: ActiveValue::Set(user_id),
                    status: ActiveValue::Set(AccessRequestStatus::Pending.as_str().to_string()),
                    created_at: ActiveValue::Set(Utc::now()),
                    decided_at: ActiveValue::Set(None),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        AccessRequest::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<AccessRequest>, AppError> {
        let entity = entity::prelude::RoomAccessRequest::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(AccessRequest::from_entity).transpose()
    }

    /// Gets the request a user made for a room, whatever its status
    pub async fn find(
        &self,
        room_id: i32,
        user_id: i32,
    ) -> Result<Option<AccessRequest>, AppError> {
        let entity = entity::prelude::RoomAccessRequest::find()
            .filter(entity::room_access_request::Column::RoomId.eq(room_id))
            .filter(entity::room_access_request::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        entity.map(AccessRequest::from_entity).transpose()
    }

    /// Gets pending requests for a room, oldest first
    pub async fn get_pending_by_room_id(
        &self,
        room_id: i32,
    ) -> Result<Vec<AccessRequest>, AppError> {
        let entities = entity::prelude::RoomAccessRequest::find()
            .filter(entity::room_access_request::Column::RoomId.eq(room_id))
            .filter(
                entity::room_access_request::Column::Status
                    .eq(AccessRequestStatus::Pending.as_str()),
            )
            .order_by_asc(entity::room_access_request::Column::CreatedAt)
            .order_by_asc(entity::room_access_request::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(AccessRequest::from_entity)
            .collect()
    }

    /// Records the owner's decision on a request
    pub async fn decide(
        &self,
        id: i32,
        status: AccessRequestStatus,
    ) -> Result<AccessRequest, AppError> {
        let request = entity::prelude::RoomAccessRequest::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Access request with id {} not found",
                id
            )))?;

        let mut active_model: entity::room_access_request::ActiveModel = request.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.decided_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active_model.update(self.db).await?;

        AccessRequest::from_entity(entity)
    }
}
