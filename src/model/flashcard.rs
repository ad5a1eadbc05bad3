use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct FlashcardDto {
    pub id: i32,
    pub lesson_id: i32,
    pub front: String,
    pub back: String,
    pub ease_factor: f64,
    pub interval_days: i32,
    pub repetitions: i32,
    pub due_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateFlashcardDto {
    pub front: String,
    pub back: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateFlashcardDto {
    pub front: Option<String>,
    pub back: Option<String>,
}

/// Review rating on a 1 (forgot) to 5 (perfect recall) scale.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ReviewFlashcardDto {
    pub quality: i32,
}
