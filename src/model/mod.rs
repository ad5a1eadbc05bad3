//! API data transfer objects.
//!
//! DTOs are the JSON shapes exchanged with clients. They derive `ToSchema` so the OpenAPI
//! document stays in sync with the handlers, and are produced from server domain models at the
//! controller boundary.

pub mod api;
pub mod auth;
pub mod connection;
pub mod exercise;
pub mod flashcard;
pub mod lesson;
pub mod notification;
pub mod post;
pub mod room;
pub mod user;
