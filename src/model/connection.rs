use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::ProfileDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ConnectionDto {
    pub id: i32,
    pub requester_id: i32,
    pub addressee_id: i32,
    /// One of `pending`, `accepted`, `rejected`, `blocked`.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateConnectionDto {
    pub addressee_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct BlockUserDto {
    pub user_id: i32,
}

/// A connection edge together with the profile of the user on the other side.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ConnectionWithUserDto {
    pub connection: ConnectionDto,
    pub user: ProfileDto,
}
