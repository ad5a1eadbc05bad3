use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct RoomMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a chat message
    pub async fn create(
        &self,
        room_id: i32,
        sender_id: i32,
        content: String,
    ) -> Result<entity::room_message::Model, DbErr> {
        entity::room_message::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            sender_id: ActiveValue::Set(sender_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets up to `limit` messages of a room, newest first
    ///
    /// # Arguments
    /// - `room_id` - Room to read
    /// - `before` - Only messages with an ID lower than this cursor
    /// - `limit` - Maximum number of messages
    pub async fn get_page(
        &self,
        room_id: i32,
        before: Option<i32>,
        limit: u64,
    ) -> Result<Vec<entity::room_message::Model>, DbErr> {
        let mut query = entity::prelude::RoomMessage::find()
            .filter(entity::room_message::Column::RoomId.eq(room_id));

        if let Some(before) = before {
            query = query.filter(entity::room_message::Column::Id.lt(before));
        }

        query
            .order_by_desc(entity::room_message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
