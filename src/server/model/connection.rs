//! Connection (friend graph) domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::connection::{ConnectionDto, ConnectionWithUserDto},
    server::{
        error::{internal::InternalError, AppError},
        model::user::User,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Rejected,
    Blocked,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Blocked => "blocked",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }
}

/// A directed edge from requester to addressee.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: i32,
    pub requester_id: i32,
    pub addressee_id: i32,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Connection {
    /// Whether `user_id` is either end of the edge.
    pub fn involves(&self, user_id: i32) -> bool {
        self.requester_id == user_id || self.addressee_id == user_id
    }

    /// The user at the other end of the edge from `user_id`.
    pub fn other_party(&self, user_id: i32) -> i32 {
        if self.requester_id == user_id {
            self.addressee_id
        } else {
            self.requester_id
        }
    }

    pub fn into_dto(self) -> ConnectionDto {
        ConnectionDto {
            id: self.id,
            requester_id: self.requester_id,
            addressee_id: self.addressee_id,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::connection::Model) -> Result<Self, AppError> {
        let status = ConnectionStatus::parse(&entity.status).ok_or_else(|| {
            InternalError::UnknownStoredValue {
                field: "connection.status",
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            requester_id: entity.requester_id,
            addressee_id: entity.addressee_id,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// An edge paired with the profile of the other party.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionWithUser {
    pub connection: Connection,
    pub user: User,
}

impl ConnectionWithUser {
    pub fn into_dto(self) -> ConnectionWithUserDto {
        ConnectionWithUserDto {
            connection: self.connection.into_dto(),
            user: self.user.into_profile_dto(),
        }
    }
}
