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
                    .table(LessonFile::Table)
                    .if_not_exists()
                    .col(pk_auto(LessonFile::Id))
                    .col(integer(LessonFile::LessonId))
                    .col(string(LessonFile::FileName))
                    .col(text(LessonFile::FileUrl))
                    .col(string_null(LessonFile::MimeType))
                    .col(
                        timestamp_with_time_zone(LessonFile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_file_lesson_id")
                            .from(LessonFile::Table, LessonFile::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LessonFile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LessonFile {
    Table,
    Id,
    LessonId,
    FileName,
    FileUrl,
    MimeType,
    CreatedAt,
}
