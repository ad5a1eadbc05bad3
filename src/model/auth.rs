use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Defaults to the username when omitted.
    pub display_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LoginDto {
    /// Username or email address.
    pub login: String,
    pub password: String,
}

/// Bearer token issued on register or login.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserDto,
}
