//! Query parameters shared by several endpoints.

use serde::Deserialize;

use crate::server::util::pagination::{clamp_per_page, DEFAULT_PER_PAGE};

/// `page` is zero-based; `entries` is capped at 100.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParams {
    pub fn per_page(&self) -> u64 {
        clamp_per_page(self.entries)
    }
}

fn default_entries() -> u64 {
    DEFAULT_PER_PAGE
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

#[derive(Deserialize)]
pub struct NotificationListParams {
    #[serde(default)]
    pub unread_only: bool,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

/// Cursor for reading chat history backwards.
#[derive(Deserialize)]
pub struct MessageHistoryParams {
    pub before: Option<i32>,
    #[serde(default = "default_message_limit")]
    pub limit: u64,
}

fn default_message_limit() -> u64 {
    crate::server::service::room::chat::DEFAULT_MESSAGE_LIMIT
}

#[derive(Deserialize)]
pub struct DueParams {
    #[serde(default = "default_entries")]
    pub limit: u64,
}
