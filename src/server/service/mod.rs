//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, state transitions, grading and scheduling
//! - **Orchestration**: Coordinating multiple repository calls, notifications and realtime emits
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod connection;
pub mod exercise;
pub mod flashcard;
pub mod lesson;
pub mod notification;
pub mod post;
pub mod progress;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
