use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PaginatedNotificationsDto {
    pub items: Vec<NotificationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UnreadCountDto {
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MarkedReadDto {
    pub updated: u64,
}
