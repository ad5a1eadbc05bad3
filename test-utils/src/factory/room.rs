//! Room factories for creating rooms and memberships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating rooms.
///
/// Only inserts the room row; use `RoomMemberFactory` or
/// `helpers::create_room_with_owner` to add the owner membership.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    description: Option<String>,
    visibility: String,
}

impl<'a> RoomFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            name: format!("Room {}", next_id()),
            description: None,
            visibility: "public".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            visibility: ActiveValue::Set(self.visibility),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating room memberships. Defaults to the `member` role.
pub struct RoomMemberFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    user_id: i32,
    role: String,
}

impl<'a> RoomMemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, room_id: i32, user_id: i32) -> Self {
        Self {
            db,
            room_id,
            user_id,
            role: "member".to_string(),
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub async fn build(self) -> Result<entity::room_member::Model, DbErr> {
        entity::room_member::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            user_id: ActiveValue::Set(self.user_id),
            role: ActiveValue::Set(self.role),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public room owned by `owner_id` without a membership row.
pub async fn create_room(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, owner_id).build().await
}

/// Adds `user_id` to `room_id` as a regular member.
pub async fn create_room_member(
    db: &DatabaseConnection,
    room_id: i32,
    user_id: i32,
) -> Result<entity::room_member::Model, DbErr> {
    RoomMemberFactory::new(db, room_id, user_id).build().await
}
