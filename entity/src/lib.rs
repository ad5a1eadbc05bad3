//! SeaORM entity definitions for the StudyHub schema.
//!
//! The tables mirror the migrations in the `migration` crate. Status and kind
//! columns are stored as plain strings and parsed into typed enums by the
//! server's domain models.

pub mod prelude;

pub mod auth_session;
pub mod comment;
pub mod connection;
pub mod exercise_attempt;
pub mod flashcard;
pub mod flashcard_review;
pub mod lesson;
pub mod lesson_exercise;
pub mod lesson_file;
pub mod notification;
pub mod post;
pub mod reaction;
pub mod room;
pub mod room_access_request;
pub mod room_member;
pub mod room_message;
pub mod user;
