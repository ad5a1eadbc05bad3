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
                    .table(LessonExercise::Table)
                    .if_not_exists()
                    .col(pk_auto(LessonExercise::Id))
                    .col(integer(LessonExercise::LessonId))
                    .col(string_len(LessonExercise::ExerciseType, 32))
                    .col(text(LessonExercise::Question))
                    .col(text_null(LessonExercise::Options))
                    .col(text_null(LessonExercise::CorrectAnswer))
                    .col(integer(LessonExercise::Points).default(10))
                    .col(integer(LessonExercise::Position).default(0))
                    .col(
                        timestamp_with_time_zone(LessonExercise::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_exercise_lesson_id")
                            .from(LessonExercise::Table, LessonExercise::LessonId)
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
            .drop_table(Table::drop().table(LessonExercise::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LessonExercise {
    Table,
    Id,
    LessonId,
    ExerciseType,
    Question,
    Options,
    CorrectAnswer,
    Points,
    Position,
    CreatedAt,
}
