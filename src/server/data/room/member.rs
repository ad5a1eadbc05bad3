use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::room::{RoomMember, RoomRole},
};

pub struct RoomMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a user to a room with the given role
    pub async fn add(
        &self,
        room_id: i32,
        user_id: i32,
        role: RoomRole,
    ) -> Result<RoomMember, AppError> {
        let entity = entity::room_member::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        RoomMember::from_entity(entity)
    }

    /// Gets a user's membership in a room, if any
    pub async fn find(&self, room_id: i32, user_id: i32) -> Result<Option<RoomMember>, AppError> {
        let entity = entity::prelude::RoomMember::find()
            .filter(entity::room_member::Column::RoomId.eq(room_id))
            .filter(entity::room_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        entity.map(RoomMember::from_entity).transpose()
    }

    /// Gets all members of a room in join order
    pub async fn get_by_room_id(&self, room_id: i32) -> Result<Vec<RoomMember>, AppError> {
        let entities = entity::prelude::RoomMember::find()
            .filter(entity::room_member::Column::RoomId.eq(room_id))
            .order_by_asc(entity::room_member::Column::JoinedAt)
            .order_by_asc(entity::room_member::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(RoomMember::from_entity).collect()
    }

    /// Gets the user IDs of every member of a room
    pub async fn get_user_ids(&self, room_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::RoomMember::find()
            .select_only()
            .column(entity::room_member::Column::UserId)
            .filter(entity::room_member::Column::RoomId.eq(room_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the IDs of every room a user belongs to
    pub async fn get_room_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::RoomMember::find()
            .select_only()
            .column(entity::room_member::Column::RoomId)
            .filter(entity::room_member::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Removes a user from a room
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - User was not a member
    pub async fn remove(&self, room_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RoomMember::delete_many()
            .filter(entity::room_member::Column::RoomId.eq(room_id))
            .filter(entity::room_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
