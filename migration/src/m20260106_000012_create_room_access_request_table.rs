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
                    .table(RoomAccessRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomAccessRequest::Id))
                    .col(integer(RoomAccessRequest::RoomId))
                    .col(integer(RoomAccessRequest::UserId))
                    .col(string_len(RoomAccessRequest::Status, 16))
                    .col(
                        timestamp_with_time_zone(RoomAccessRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(RoomAccessRequest::DecidedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_access_request_room_id")
                            .from(RoomAccessRequest::Table, RoomAccessRequest::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_access_request_user_id")
                            .from(RoomAccessRequest::Table, RoomAccessRequest::UserId)
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
                    .name("idx_room_access_request_pair")
                    .table(RoomAccessRequest::Table)
                    .col(RoomAccessRequest::RoomId)
                    .col(RoomAccessRequest::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomAccessRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomAccessRequest {
    Table,
    Id,
    RoomId,
    UserId,
    Status,
    CreatedAt,
    DecidedAt,
}
