pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_auth_session_table;
mod m20260105_000003_create_lesson_table;
mod m20260105_000004_create_lesson_file_table;
mod m20260105_000005_create_flashcard_table;
mod m20260105_000006_create_flashcard_review_table;
mod m20260105_000007_create_lesson_exercise_table;
mod m20260105_000008_create_exercise_attempt_table;
mod m20260106_000009_create_connection_table;
mod m20260106_000010_create_room_table;
mod m20260106_000011_create_room_member_table;
mod m20260106_000012_create_room_access_request_table;
mod m20260106_000013_create_room_message_table;
mod m20260107_000014_create_notification_table;
mod m20260107_000015_create_post_table;
mod m20260107_000016_create_comment_table;
mod m20260107_000017_create_reaction_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_auth_session_table::Migration),
            Box::new(m20260105_000003_create_lesson_table::Migration),
            Box::new(m20260105_000004_create_lesson_file_table::Migration),
            Box::new(m20260105_000005_create_flashcard_table::Migration),
            Box::new(m20260105_000006_create_flashcard_review_table::Migration),
            Box::new(m20260105_000007_create_lesson_exercise_table::Migration),
            Box::new(m20260105_000008_create_exercise_attempt_table::Migration),
            Box::new(m20260106_000009_create_connection_table::Migration),
            Box::new(m20260106_000010_create_room_table::Migration),
            Box::new(m20260106_000011_create_room_member_table::Migration),
            Box::new(m20260106_000012_create_room_access_request_table::Migration),
            Box::new(m20260106_000013_create_room_message_table::Migration),
            Box::new(m20260107_000014_create_notification_table::Migration),
            Box::new(m20260107_000015_create_post_table::Migration),
            Box::new(m20260107_000016_create_comment_table::Migration),
            Box::new(m20260107_000017_create_reaction_table::Migration),
        ]
    }
}
