//! Chat room data repositories.
//!
//! `RoomRepository` handles the room rows themselves; membership, access requests and
//! messages live in their own submodules.

pub mod access_request;
pub mod member;
pub mod message;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::room::{CreateRoomParams, Room, RoomVisibility, UpdateRoomParams},
};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room. The owner membership is added separately.
    pub async fn create(&self, param: CreateRoomParams) -> Result<Room, AppError> {
        let entity = entity::room::ActiveModel {
            owner_id: ActiveValue::Set(param.owner_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            visibility: ActiveValue::Set(param.visibility.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Room::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, AppError> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        entity.map(Room::from_entity).transpose()
    }

    /// Gets a page of rooms that are public or listed in `member_room_ids`, newest first
    ///
    /// # Returns
    /// - `Ok((rooms, total))` - Rooms on the requested page and the total visible count
    /// - `Err(AppError)` - Database or decoding error
    pub async fn get_visible_paginated(
        &self,
        member_room_ids: Vec<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Room>, u64), AppError> {
        let paginator = entity::prelude::Room::find()
            .filter(
                Condition::any()
                    .add(entity::room::Column::Visibility.eq(RoomVisibility::Public.as_str()))
                    .add(entity::room::Column::Id.is_in(member_room_ids)),
            )
            .order_by_desc(entity::room::Column::CreatedAt)
            .order_by_desc(entity::room::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rooms = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Room::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((rooms, total))
    }

    /// Applies a partial update to a room
    pub async fn update(&self, id: i32, param: UpdateRoomParams) -> Result<Room, AppError> {
        let room = entity::prelude::Room::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Room with id {} not found",
                id
            )))?;

        let mut active_model: entity::room::ActiveModel = room.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(visibility) = param.visibility {
            active_model.visibility = ActiveValue::Set(visibility.as_str().to_string());
        }

        let entity = active_model.update(self.db).await?;

        Room::from_entity(entity)
    }

    /// Deletes a room. Members, requests and messages cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Room::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
