use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LessonDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateLessonDto {
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
}

/// Partial lesson update. Omitted fields are left unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateLessonDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PaginatedLessonsDto {
    pub items: Vec<LessonDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LessonFileDto {
    pub id: i32,
    pub lesson_id: i32,
    pub file_name: String,
    pub file_url: String,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateLessonFileDto {
    pub file_name: String,
    pub file_url: String,
    pub mime_type: Option<String>,
}
