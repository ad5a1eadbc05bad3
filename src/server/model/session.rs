use chrono::{DateTime, Utc};

/// A bearer token session. Only the token digest is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub id: i32,
    pub user_id: i32,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn from_entity(entity: entity::auth_session::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            expires_at: entity.expires_at,
        }
    }
}

/// A freshly issued token. The plain token is only ever returned once.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
