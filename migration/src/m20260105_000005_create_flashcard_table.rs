use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_lesson_table::Lesson;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flashcard::Table)
                    .if_not_exists()
                    .col(pk_auto(Flashcard::Id))
                    .col(integer(Flashcard::LessonId))
                    .col(text(Flashcard::Front))
                    .col(text(Flashcard::Back))
                    .col(double(Flashcard::EaseFactor).default(2.5))
                    .col(integer(Flashcard::IntervalDays).default(0))
                    .col(integer(Flashcard::Repetitions).default(0))
                    .col(timestamp_with_time_zone(Flashcard::DueAt))
                    .col(
                        timestamp_with_time_zone(Flashcard::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flashcard_lesson_id")
                            .from(Flashcard::Table, Flashcard::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flashcard_due_at")
                    .table(Flashcard::Table)
                    .col(Flashcard::DueAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flashcard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flashcard {
    Table,
    Id,
    LessonId,
    Front,
    Back,
    EaseFactor,
    IntervalDays,
    Repetitions,
    DueAt,
    CreatedAt,
}
