use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000005_create_flashcard_table::Flashcard,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlashcardReview::Table)
                    .if_not_exists()
                    .col(pk_auto(FlashcardReview::Id))
                    .col(integer(FlashcardReview::FlashcardId))
                    .col(integer(FlashcardReview::UserId))
                    .col(integer(FlashcardReview::Quality))
                    .col(
                        timestamp_with_time_zone(FlashcardReview::ReviewedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flashcard_review_flashcard_id")
                            .from(FlashcardReview::Table, FlashcardReview::FlashcardId)
                            .to(Flashcard::Table, Flashcard::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flashcard_review_user_id")
                            .from(FlashcardReview::Table, FlashcardReview::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlashcardReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlashcardReview {
    Table,
    Id,
    FlashcardId,
    UserId,
    Quality,
    ReviewedAt,
}
