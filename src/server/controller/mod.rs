//! HTTP request handlers.
//!
//! Controllers extract request data, authenticate through [`AuthGuard`], convert DTOs into
//! domain params, call a service and wrap the result in the success envelope.
//!
//! [`AuthGuard`]: crate::server::middleware::auth::AuthGuard

pub mod auth;
pub mod connection;
pub mod exercise;
pub mod flashcard;
pub mod health;
pub mod lesson;
pub mod notification;
pub mod param;
pub mod post;
pub mod room;
pub mod user;
