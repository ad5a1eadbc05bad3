//! Chat rooms, membership and access requests.

pub mod access;
pub mod chat;

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        room::{
            access_request::AccessRequestRepository, member::RoomMemberRepository, RoomRepository,
        },
        user::UserRepository,
    },
    error::AppError,
    model::{
        notification::{kind, NotifyParams},
        room::{
            AccessRequest, AccessRequestStatus, CreateRoomParams, JoinOutcome, RoomAccess,
            RoomMemberWithUser, RoomRole, RoomVisibility, UpdateRoomParams,
        },
        user::User,
        Paginated,
    },
    realtime::{event::ServerEvent, hub::Hub},
    service::{
        notification::NotificationService,
        room::access::{room_not_found, RoomAccessChecker},
    },
    util::pagination::total_pages,
};

const NAME_MAX_CHARS: usize = 100;

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a Hub,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a Hub) -> Self {
        Self { db, hub }
    }

    /// Creates a room and makes its creator the owner member
    pub async fn create(&self, mut param: CreateRoomParams) -> Result<RoomAccess, AppError> {
        param.name = validate_name(&param.name)?;

        let room = RoomRepository::new(self.db).create(param).await?;
        RoomMemberRepository::new(self.db)
            .add(room.id, room.owner_id, RoomRole::Owner)
            .await?;

        tracing::info!(
            "User {} created room {} ({})",
            room.owner_id,
            room.id,
            room.name
        );

        Ok(RoomAccess {
            room,
            role: Some(RoomRole::Owner),
        })
    }

    /// Lists public rooms plus the private rooms the caller belongs to, newest first
    pub async fn list(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<RoomAccess>, AppError> {
        let member_room_ids = RoomMemberRepository::new(self.db)
            .get_room_ids_for_user(user_id)
            .await?;
        let joined: HashSet<i32> = member_room_ids.iter().copied().collect();

        let (rooms, total) = RoomRepository::new(self.db)
            .get_visible_paginated(member_room_ids, page, per_page)
            .await?;

        let items = rooms
            .into_iter()
            .map(|room| {
                let role = if room.owner_id == user_id {
                    Some(RoomRole::Owner)
                } else if joined.contains(&room.id) {
                    Some(RoomRole::Member)
                } else {
                    None
                };
                RoomAccess { room, role }
            })
            .collect();

        Ok(Paginated {
            items,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn get(&self, id: i32, user_id: i32) -> Result<RoomAccess, AppError> {
        RoomAccessChecker::new(self.db).visible(id, user_id).await
    }

    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        mut param: UpdateRoomParams,
    ) -> Result<RoomAccess, AppError> {
        let access = RoomAccessChecker::new(self.db).owner(id, user_id).await?;

        if let Some(name) = param.name.as_deref() {
            param.name = Some(validate_name(name)?);
        }

        let room = RoomRepository::new(self.db).update(id, param).await?;

        Ok(RoomAccess {
            room,
            role: access.role,
        })
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        RoomAccessChecker::new(self.db).owner(id, user_id).await?;

        RoomRepository::new(self.db).delete(id).await?;

        tracing::info!("User {} deleted room {}", user_id, id);

        Ok(())
    }

    /// Joins a public room or asks the owner for access to a private one
    ///
    /// # Returns
    /// - `Ok(JoinOutcome::Joined)` - Caller is now a member
    /// - `Ok(JoinOutcome::Requested(_))` - A pending access request was opened
    /// - `Err(AppError::NotFound)` - Room does not exist
    /// - `Err(AppError::Conflict)` - Already a member or already requested
    pub async fn join(&self, id: i32, user_id: i32) -> Result<JoinOutcome, AppError> {
        let room = RoomRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(room_not_found)?;

        let member_repo = RoomMemberRepository::new(self.db);
        if member_repo.find(id, user_id).await?.is_some() {
            return Err(AppError::Conflict(
                "You are already a member of this room".to_string(),
            ));
        }

        if room.visibility == RoomVisibility::Public {
            member_repo.add(id, user_id, RoomRole::Member).await?;

            tracing::debug!("User {} joined room {}", user_id, id);

            return Ok(JoinOutcome::Joined);
        }

        let request_repo = AccessRequestRepository::new(self.db);
        if let Some(existing) = request_repo.find(id, user_id).await? {
            if existing.status == AccessRequestStatus::Pending {
                return Err(AppError::Conflict(
                    "Access request already pending".to_string(),
                ));
            }
        }

        let requester = self.find_user(user_id).await?;
        let request = request_repo.open(id, user_id).await?;

        NotificationService::new(self.db, self.hub)
            .notify(NotifyParams {
                user_id: room.owner_id,
                kind: kind::ROOM_ACCESS_REQUESTED,
                title: "Room access requested".to_string(),
                body: format!("{} asked to join {}", requester.display_name, room.name),
                link: Some(format!("/rooms/{}/requests", room.id)),
            })
            .await?;

        self.hub
            .emit(
                room.owner_id,
                &ServerEvent::room_access_requested(&request.clone().into_dto(requester)),
            )
            .await;

        Ok(JoinOutcome::Requested(request))
    }

    /// Lists pending access requests of an owned room with the requesters' profiles
    pub async fn access_requests(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Vec<(AccessRequest, User)>, AppError> {
        RoomAccessChecker::new(self.db).owner(id, user_id).await?;

        let requests = AccessRequestRepository::new(self.db)
            .get_pending_by_room_id(id)
            .await?;
        let users = UserRepository::new(self.db)
            .find_by_ids(requests.iter().map(|request| request.user_id).collect())
            .await?;

        Ok(requests
            .into_iter()
            .filter_map(|request| {
                let user = users.get(&request.user_id)?.clone();
                Some((request, user))
            })
            .collect())
    }

    /// Approves or denies a pending access request of an owned room
    ///
    /// # Returns
    /// - `Ok(AccessRequest)` - The decided request
    /// - `Err(AppError::NotFound)` - Request or room not visible to the caller
    /// - `Err(AuthError::AccessDenied)` - Caller is a member but not the owner
    /// - `Err(AppError::Conflict)` - Request was already decided
    pub async fn decide(
        &self,
        request_id: i32,
        user_id: i32,
        approve: bool,
    ) -> Result<AccessRequest, AppError> {
        let request_repo = AccessRequestRepository::new(self.db);
        let request = request_repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Access request not found".to_string()))?;

        let access = RoomAccessChecker::new(self.db)
            .owner(request.room_id, user_id)
            .await?;

        if request.status != AccessRequestStatus::Pending {
            return Err(AppError::Conflict(
                "Access request was already decided".to_string(),
            ));
        }

        let status = if approve {
            AccessRequestStatus::Approved
        } else {
            AccessRequestStatus::Denied
        };
        let request = request_repo.decide(request_id, status).await?;

        if approve {
            let member_repo = RoomMemberRepository::new(self.db);
            if member_repo
                .find(request.room_id, request.user_id)
                .await?
                .is_none()
            {
                member_repo
                    .add(request.room_id, request.user_id, RoomRole::Member)
                    .await?;
            }
        }

        let room = access.room;
        let (notification_kind, title, body) = if approve {
            (
                kind::ROOM_ACCESS_APPROVED,
                "Room access approved",
                format!("You can now chat in {}", room.name),
            )
        } else {
            (
                kind::ROOM_ACCESS_DENIED,
                "Room access denied",
                format!("Your request to join {} was denied", room.name),
            )
        };

        NotificationService::new(self.db, self.hub)
            .notify(NotifyParams {
                user_id: request.user_id,
                kind: notification_kind,
                title: title.to_string(),
                body,
                link: approve.then(|| format!("/rooms/{}", room.id)),
            })
            .await?;

        self.hub
            .emit(
                request.user_id,
                &ServerEvent::room_access_decided(approve, room.id, &room.name),
            )
            .await;

        tracing::debug!(
            "User {} {} access request {} for room {}",
            user_id,
            status.as_str(),
            request.id,
            room.id
        );

        Ok(request)
    }

    /// Leaves a room. The owner cannot leave their own room.
    pub async fn leave(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let access = RoomAccessChecker::new(self.db).member(id, user_id).await?;

        if access.is_owner() {
            return Err(AppError::BadRequest(
                "The owner cannot leave the room".to_string(),
            ));
        }

        RoomMemberRepository::new(self.db)
            .remove(id, user_id)
            .await?;

        Ok(())
    }

    /// Lists members of a room the caller belongs to, in join order
    pub async fn members(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Vec<RoomMemberWithUser>, AppError> {
        RoomAccessChecker::new(self.db).member(id, user_id).await?;

        let members = RoomMemberRepository::new(self.db)
            .get_by_room_id(id)
            .await?;
        let users = UserRepository::new(self.db)
            .find_by_ids(members.iter().map(|member| member.user_id).collect())
            .await?;

        Ok(members
            .into_iter()
            .filter_map(|member| {
                let user = users.get(&member.user_id)?.clone();
                Some(RoomMemberWithUser { member, user })
            })
            .collect())
    }

    async fn find_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > NAME_MAX_CHARS {
        return Err(AppError::BadRequest(format!(
            "Room name must be between 1 and {} characters",
            NAME_MAX_CHARS
        )));
    }

    Ok(name.to_string())
}
