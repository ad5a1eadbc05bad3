//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Enum-like columns stored as strings are
//! parsed into Rust enums here so the rest of the server works with typed values.

pub mod connection;
pub mod exercise;
pub mod flashcard;
pub mod lesson;
pub mod notification;
pub mod post;
pub mod room;
pub mod session;
pub mod user;

/// A single page of results together with paging metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Maps each item, keeping paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
