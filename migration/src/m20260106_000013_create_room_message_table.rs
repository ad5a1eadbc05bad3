use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260105_000001_create_user_table::User, m20260106_000010_create_room_table::Room};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomMessage::Id))
                    .col(integer(RoomMessage::RoomId))
                    .col(integer(RoomMessage::SenderId))
                    .col(text(RoomMessage::Content))
                    .col(
                        timestamp_with_time_zone(RoomMessage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_message_room_id")
                            .from(RoomMessage::Table, RoomMessage::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_message_sender_id")
                            .from(RoomMessage::Table, RoomMessage::SenderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_message_room_id")
                    .table(RoomMessage::Table)
                    .col(RoomMessage::RoomId)
                    .col(RoomMessage::Id)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomMessage {
    Table,
    Id,
    RoomId,
    SenderId,
    Content,
    CreatedAt,
}
