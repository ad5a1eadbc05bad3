//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Repositories whose rows
//! carry enum-like string columns return `AppError` so decoding failures surface as internal
//! errors; the rest return `DbErr` directly.

pub mod comment;
pub mod connection;
pub mod exercise;
pub mod exercise_attempt;
pub mod flashcard;
pub mod flashcard_review;
pub mod lesson;
pub mod lesson_file;
pub mod notification;
pub mod post;
pub mod reaction;
pub mod room;
pub mod session;
pub mod user;

#[cfg(test)]
mod test;
