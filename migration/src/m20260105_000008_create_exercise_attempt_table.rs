use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User,
    m20260105_000007_create_lesson_exercise_table::LessonExercise,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExerciseAttempt::Table)
                    .if_not_exists()
                    .col(pk_auto(ExerciseAttempt::Id))
                    .col(integer(ExerciseAttempt::ExerciseId))
                    .col(integer(ExerciseAttempt::UserId))
                    .col(text(ExerciseAttempt::Answer))
                    .col(boolean(ExerciseAttempt::IsCorrect).default(false))
                    .col(string_len(ExerciseAttempt::Status, 16))
                    .col(integer(ExerciseAttempt::PointsAwarded).default(0))
                    .col(
                        timestamp_with_time_zone(ExerciseAttempt::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercise_attempt_exercise_id")
                            .from(ExerciseAttempt::Table, ExerciseAttempt::ExerciseId)
                            .to(LessonExercise::Table, LessonExercise::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exercise_attempt_user_id")
                            .from(ExerciseAttempt::Table, ExerciseAttempt::UserId)
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
            .drop_table(Table::drop().table(ExerciseAttempt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExerciseAttempt {
    Table,
    Id,
    ExerciseId,
    UserId,
    Answer,
    IsCorrect,
    Status,
    PointsAwarded,
    CreatedAt,
}
