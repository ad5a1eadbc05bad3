//! Room visibility and role checks shared by the room services.
//!
//! A room the caller may not see is reported as missing. Members who try owner actions
//! and non-members of public rooms who try member actions are denied with 403.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::room::{member::RoomMemberRepository, RoomRepository},
    error::{auth::AuthError, AppError},
    model::room::{RoomAccess, RoomVisibility},
};

pub struct RoomAccessChecker<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomAccessChecker<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a room together with the caller's role in it.
    ///
    /// # Returns
    /// - `Ok(RoomAccess)` - Room is public or the caller is a member
    /// - `Err(AppError::NotFound)` - Room missing, or private and the caller is not a member
    pub async fn visible(&self, room_id: i32, user_id: i32) -> Result<RoomAccess, AppError> {
        let room = RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(room_not_found)?;

        let role = RoomMemberRepository::new(self.db)
            .find(room_id, user_id)
            .await?
            .map(|member| member.role);

        if room.visibility == RoomVisibility::Private && role.is_none() {
            return Err(room_not_found());
        }

        Ok(RoomAccess { room, role })
    }

    /// Loads a room the caller belongs to.
    ///
    /// # Returns
    /// - `Err(AuthError::AccessDenied)` - Public room the caller has not joined
    pub async fn member(&self, room_id: i32, user_id: i32) -> Result<RoomAccess, AppError> {
        let access = self.visible(room_id, user_id).await?;

        if !access.is_member() {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("not a member of room {}", room_id),
            )
            .into());
        }

        Ok(access)
    }

    /// Loads a room the caller owns.
    ///
    /// # Returns
    /// - `Err(AuthError::AccessDenied)` - Caller can see the room but does not own it
    pub async fn owner(&self, room_id: i32, user_id: i32) -> Result<RoomAccess, AppError> {
        let access = self.visible(room_id, user_id).await?;

        if !access.is_owner() {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("not the owner of room {}", room_id),
            )
            .into());
        }

        Ok(access)
    }
}

pub(super) fn room_not_found() -> AppError {
    AppError::NotFound("Room not found".to_string())
}
