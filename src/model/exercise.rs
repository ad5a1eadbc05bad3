use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Exercise as shown to its owner, including the answer key.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ExerciseDto {
    pub id: i32,
    pub lesson_id: i32,
    /// One of `multiple_choice`, `true_false`, `short_answer`, `essay`.
    pub exercise_type: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: Option<String>,
    pub points: i32,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateExerciseDto {
    pub exercise_type: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// For multiple choice, an option's text or its zero-based index. Text matches are
    /// tried first, so numeral options are matched by their text.
    pub correct_answer: Option<String>,
    pub points: Option<i32>,
    pub position: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateExerciseDto {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
    pub points: Option<i32>,
    pub position: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SubmitAttemptDto {
    pub answer: String,
}

/// Outcome of grading a submitted answer.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AttemptResultDto {
    pub attempt_id: i32,
    pub is_correct: bool,
    /// `graded` or `pending` (essays await manual review).
    pub status: String,
    pub points_awarded: i32,
    /// Present for graded exercises only.
    pub correct_answer: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AttemptDto {
    pub id: i32,
    pub exercise_id: i32,
    pub answer: String,
    pub is_correct: bool,
    pub status: String,
    pub points_awarded: i32,
    pub created_at: DateTime<Utc>,
}
