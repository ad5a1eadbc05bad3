//! Persisted room chat and typing indicators.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        room::{member::RoomMemberRepository, message::RoomMessageRepository},
        user::UserRepository,
    },
    error::AppError,
    model::room::{RoomMessage, MAX_MESSAGE_CHARS},
    realtime::{event::ServerEvent, hub::Hub},
    service::room::access::RoomAccessChecker,
};

pub const DEFAULT_MESSAGE_LIMIT: u64 = 50;
pub const MAX_MESSAGE_LIMIT: u64 = 100;

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a Hub,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a Hub) -> Self {
        Self { db, hub }
    }

    /// Gets a page of messages, newest first
    ///
    /// # Arguments
    /// - `room_id` - Room to read, which the caller must belong to
    /// - `user_id` - Caller
    /// - `before` - Only messages older than this message ID
    /// - `limit` - Page size, clamped to 1-100
    pub async fn messages(
        &self,
        room_id: i32,
        user_id: i32,
        before: Option<i32>,
        limit: u64,
    ) -> Result<Vec<RoomMessage>, AppError> {
        RoomAccessChecker::new(self.db)
            .member(room_id, user_id)
            .await?;

        let entities = RoomMessageRepository::new(self.db)
            .get_page(room_id, before, limit.clamp(1, MAX_MESSAGE_LIMIT))
            .await?;

        let mut sender_ids: Vec<i32> = entities.iter().map(|message| message.sender_id).collect();
        sender_ids.sort_unstable();
        sender_ids.dedup();
        let senders = UserRepository::new(self.db).find_by_ids(sender_ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let sender_name = senders
                    .get(&entity.sender_id)
                    .map(|user| user.display_name.clone())
                    .unwrap_or_default();
                RoomMessage::from_entity(entity, sender_name)
            })
            .collect())
    }

    /// Stores a message and pushes `room:message` to every connected member, sender included
    ///
    /// # Returns
    /// - `Ok(RoomMessage)` - The stored message
    /// - `Err(AppError::BadRequest)` - Empty or overlong content
    /// - `Err(AppError::NotFound)` / `Err(AuthError::AccessDenied)` - Caller is not a member
    pub async fn send(
        &self,
        room_id: i32,
        user_id: i32,
        content: &str,
    ) -> Result<RoomMessage, AppError> {
        let content = content.trim();
        if content.is_empty() || content.chars().count() > MAX_MESSAGE_CHARS {
            return Err(AppError::BadRequest(format!(
                "Message must be between 1 and {} characters",
                MAX_MESSAGE_CHARS
            )));
        }

        RoomAccessChecker::new(self.db)
            .member(room_id, user_id)
            .await?;

        let sender = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let entity = RoomMessageRepository::new(self.db)
            .create(room_id, user_id, content.to_string())
            .await?;
        let message = RoomMessage::from_entity(entity, sender.display_name);

        let member_ids = RoomMemberRepository::new(self.db)
            .get_user_ids(room_id)
            .await?;
        self.hub
            .emit_many(
                &member_ids,
                &ServerEvent::room_message(&message.clone().into_dto()),
            )
            .await;

        Ok(message)
    }

    /// Relays a typing indicator to the other members of a room
    pub async fn relay_typing(
        &self,
        room_id: i32,
        user_id: i32,
        started: bool,
    ) -> Result<(), AppError> {
        RoomAccessChecker::new(self.db)
            .member(room_id, user_id)
            .await?;

        let others: Vec<i32> = RoomMemberRepository::new(self.db)
            .get_user_ids(room_id)
            .await?
            .into_iter()
            .filter(|member_id| *member_id != user_id)
            .collect();

        self.hub
            .emit_many(&others, &ServerEvent::typing(started, room_id, user_id))
            .await;

        Ok(())
    }
}
