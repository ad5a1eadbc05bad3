//! Chat room domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::room::{
        AccessRequestDto, CreateRoomDto, RoomDto, RoomMemberDto, RoomMessageDto, UpdateRoomDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        model::user::User,
    },
};

/// Longest chat message accepted, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomVisibility {
    Public,
    Private,
}

impl RoomVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomRole {
    Owner,
    Member,
}

impl RoomRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Member => "member",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(Self::Owner),
            "member" => Some(Self::Member),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRequestStatus {
    Pending,
    Approved,
    Denied,
}

impl AccessRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "denied" => Some(Self::Denied),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub visibility: RoomVisibility,
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Converts to a DTO annotated with the caller's role, if any.
    pub fn into_dto(self, my_role: Option<RoomRole>) -> RoomDto {
        RoomDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            description: self.description,
            visibility: self.visibility.as_str().to_string(),
            created_at: self.created_at,
            my_role: my_role.map(|role| role.as_str().to_string()),
        }
    }

    pub fn from_entity(entity: entity::room::Model) -> Result<Self, AppError> {
        let visibility = RoomVisibility::parse(&entity.visibility).ok_or_else(|| {
            InternalError::UnknownStoredValue {
                field: "room.visibility",
                value: entity.visibility.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            visibility,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub visibility: RoomVisibility,
}

impl CreateRoomParams {
    /// Builds creation params. Visibility defaults to public.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Unknown visibility
    pub fn from_dto(owner_id: i32, dto: CreateRoomDto) -> Result<Self, AppError> {
        let visibility = match dto.visibility.as_deref() {
            Some(value) => parse_visibility(value)?,
            None => RoomVisibility::Public,
        };

        Ok(Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            visibility,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<RoomVisibility>,
}

impl UpdateRoomParams {
    pub fn from_dto(dto: UpdateRoomDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name,
            description: dto.description,
            visibility: dto
                .visibility
                .as_deref()
                .map(parse_visibility)
                .transpose()?,
        })
    }
}

fn parse_visibility(value: &str) -> Result<RoomVisibility, AppError> {
    RoomVisibility::parse(value.trim())
        .ok_or_else(|| AppError::BadRequest(format!("Unknown room visibility '{}'", value)))
}

/// What the caller is allowed to see and do in a room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomAccess {
    pub room: Room,
    pub role: Option<RoomRole>,
}

impl RoomAccess {
    pub fn is_member(&self) -> bool {
        self.role.is_some()
    }

    pub fn is_owner(&self) -> bool {
        self.role == Some(RoomRole::Owner)
    }

    pub fn into_dto(self) -> RoomDto {
        self.room.into_dto(self.role)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomMember {
    pub id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub role: RoomRole,
    pub joined_at: DateTime<Utc>,
}

impl RoomMember {
    pub fn from_entity(entity: entity::room_member::Model) -> Result<Self, AppError> {
        let role =
            RoomRole::parse(&entity.role).ok_or_else(|| InternalError::UnknownStoredValue {
                field: "room_member.role",
                value: entity.role.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            room_id: entity.room_id,
            user_id: entity.user_id,
            role,
            joined_at: entity.joined_at,
        })
    }
}

/// A membership row joined with the member's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomMemberWithUser {
    pub member: RoomMember,
    pub user: User,
}

impl RoomMemberWithUser {
    pub fn into_dto(self) -> RoomMemberDto {
        RoomMemberDto {
            room_id: self.member.room_id,
            role: self.member.role.as_str().to_string(),
            joined_at: self.member.joined_at,
            user: self.user.into_profile_dto(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccessRequest {
    pub id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub status: AccessRequestStatus,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl AccessRequest {
    pub fn from_entity(entity: entity::room_access_request::Model) -> Result<Self, AppError> {
        let status = AccessRequestStatus::parse(&entity.status).ok_or_else(|| {
            InternalError::UnknownStoredValue {
                field: "room_access_request.status",
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            room_id: entity.room_id,
            user_id: entity.user_id,
            status,
            created_at: entity.created_at,
            decided_at: entity.decided_at,
        })
    }

    pub fn into_dto(self, user: User) -> AccessRequestDto {
        AccessRequestDto {
            id: self.id,
            room_id: self.room_id,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            decided_at: self.decided_at,
            user: user.into_profile_dto(),
        }
    }
}

/// Outcome of asking to join a room.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    Joined,
    Requested(AccessRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomMessage {
    pub id: i32,
    pub room_id: i32,
    pub sender_id: i32,
    pub sender_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl RoomMessage {
    pub fn into_dto(self) -> RoomMessageDto {
        RoomMessageDto {
            id: self.id,
            room_id: self.room_id,
            sender_id: self.sender_id,
            sender_name: self.sender_name,
            content: self.content,
            created_at: self.created_at,
        }
    }

    /// Builds a message from its row and the sender's display name.
    pub fn from_entity(entity: entity::room_message::Model, sender_name: String) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            sender_id: entity.sender_id,
            sender_name,
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}
