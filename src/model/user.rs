use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The authenticated user's own account.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub xp: i32,
    pub level: i32,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user, safe to show to anyone.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub xp: i32,
    pub level: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateProfileDto {
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PaginatedProfilesDto {
    pub items: Vec<ProfileDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// XP and level standing.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ProgressDto {
    pub xp: i32,
    pub level: i32,
    /// XP threshold of the current level.
    pub current_level_xp: i32,
    /// XP threshold of the next level, absent at the maximum level.
    pub next_level_xp: Option<i32>,
}
