//! User domain models and parameters.
//!
//! Users own lessons and rooms, connect with each other and accumulate XP. The password
//! hash travels with the domain model for login checks but is never part of any DTO.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{ProfileDto, ProgressDto, UserDto},
    server::service::progress::level_for_xp,
};

/// Registered user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub display_name: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub bio: Option<String>,
    pub xp: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts to the account DTO shown to the user themself.
    pub fn into_dto(self) -> UserDto {
        let level = level_for_xp(self.xp).level;
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            display_name: self.display_name,
            bio: self.bio,
            xp: self.xp,
            level,
            created_at: self.created_at,
        }
    }

    /// Converts to the public profile DTO.
    pub fn into_profile_dto(self) -> ProfileDto {
        let level = level_for_xp(self.xp).level;
        ProfileDto {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            bio: self.bio,
            xp: self.xp,
            level,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            display_name: entity.display_name,
            password_hash: entity.password_hash,
            bio: entity.bio,
            xp: entity.xp,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
}

/// Profile fields the user may change. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

/// Where a given XP total sits in the level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub xp: i32,
    pub level: i32,
    pub current_level_xp: i32,
    pub next_level_xp: Option<i32>,
}

impl Progress {
    pub fn into_dto(self) -> ProgressDto {
        ProgressDto {
            xp: self.xp,
            level: self.level,
            current_level_xp: self.current_level_xp,
            next_level_xp: self.next_level_xp,
        }
    }
}
