use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::ProfileDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// `public` or `private`.
    pub visibility: String,
    pub created_at: DateTime<Utc>,
    /// The caller's role in the room, absent when not a member.
    pub my_role: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateRoomDto {
    pub name: String,
    pub description: Option<String>,
    pub visibility: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateRoomDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PaginatedRoomsDto {
    pub items: Vec<RoomDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct RoomMemberDto {
    pub room_id: i32,
    pub role: String,
    pub joined_at: DateTime<Utc>,
    pub user: ProfileDto,
}

/// Result of a join call: `joined` for public rooms, `requested` for private ones.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct JoinRoomDto {
    pub status: String,
    pub request_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AccessRequestDto {
    pub id: i32,
    pub room_id: i32,
    /// `pending`, `approved` or `denied`.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
    pub user: ProfileDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct RoomMessageDto {
    pub id: i32,
    pub room_id: i32,
    pub sender_id: i32,
    pub sender_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SendMessageDto {
    pub content: String,
}
