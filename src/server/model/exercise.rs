//! Exercise domain models and parameters.
//!
//! Options are persisted as a JSON array of strings in a text column and decoded here.
//! Exercise types and attempt statuses are persisted as lowercase snake case strings.

use chrono::{DateTime, Utc};

use crate::{
    model::exercise::{
        AttemptDto, AttemptResultDto, CreateExerciseDto, ExerciseDto, UpdateExerciseDto,
    },
    server::error::{internal::InternalError, AppError},
};

/// Points awarded for a correct answer when the creator does not set any.
pub const DEFAULT_EXERCISE_POINTS: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
}

impl ExerciseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::TrueFalse => "true_false",
            Self::ShortAnswer => "short_answer",
            Self::Essay => "essay",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "multiple_choice" => Some(Self::MultipleChoice),
            "true_false" => Some(Self::TrueFalse),
            "short_answer" => Some(Self::ShortAnswer),
            "essay" => Some(Self::Essay),
            _ => None,
        }
    }
}

/// Grading state of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStatus {
    Graded,
    /// Awaiting manual review (essays).
    Pending,
}

impl AttemptStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Graded => "graded",
            Self::Pending => "pending",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "graded" => Some(Self::Graded),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: i32,
    pub lesson_id: i32,
    pub exercise_type: ExerciseType,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: Option<String>,
    pub points: i32,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl Exercise {
    pub fn into_dto(self) -> ExerciseDto {
        ExerciseDto {
            id: self.id,
            lesson_id: self.lesson_id,
            exercise_type: self.exercise_type.as_str().to_string(),
            question: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
            points: self.points,
            position: self.position,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an exercise domain model.
    ///
    /// # Returns
    /// - `Ok(Exercise)` - The converted exercise
    /// - `Err(AppError::InternalErr)` - Stored type or options could not be decoded
    pub fn from_entity(entity: entity::lesson_exercise::Model) -> Result<Self, AppError> {
        let exercise_type = ExerciseType::parse(&entity.exercise_type).ok_or_else(|| {
            InternalError::UnknownStoredValue {
                field: "lesson_exercise.exercise_type",
                value: entity.exercise_type.clone(),
            }
        })?;

        let options = match entity.options.as_deref() {
            Some(raw) => serde_json::from_str::<Vec<String>>(raw).map_err(|source| {
                InternalError::InvalidExerciseOptions {
                    exercise_id: entity.id,
                    source,
                }
            })?,
            None => Vec::new(),
        };

        Ok(Self {
            id: entity.id,
            lesson_id: entity.lesson_id,
            exercise_type,
            question: entity.question,
            options,
            correct_answer: entity.correct_answer,
            points: entity.points,
            position: entity.position,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateExerciseParams {
    pub lesson_id: i32,
    pub exercise_type: ExerciseType,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: Option<String>,
    pub points: i32,
    pub position: i32,
}

impl CreateExerciseParams {
    /// Builds creation params from the request body.
    ///
    /// # Returns
    /// - `Ok(CreateExerciseParams)` - Params with defaults applied
    /// - `Err(AppError::BadRequest)` - Unknown exercise type
    pub fn from_dto(lesson_id: i32, dto: CreateExerciseDto) -> Result<Self, AppError> {
        let exercise_type = ExerciseType::parse(dto.exercise_type.trim()).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown exercise type '{}'", dto.exercise_type))
        })?;

        Ok(Self {
            lesson_id,
            exercise_type,
            question: dto.question,
            options: dto.options,
            correct_answer: dto.correct_answer,
            points: dto.points.unwrap_or(DEFAULT_EXERCISE_POINTS),
            position: dto.position.unwrap_or(0),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateExerciseParams {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
    pub points: Option<i32>,
    pub position: Option<i32>,
}

impl UpdateExerciseParams {
    pub fn from_dto(dto: UpdateExerciseDto) -> Self {
        Self {
            question: dto.question,
            options: dto.options,
            correct_answer: dto.correct_answer,
            points: dto.points,
            position: dto.position,
        }
    }
}

/// A stored answer submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseAttempt {
    pub id: i32,
    pub exercise_id: i32,
    pub user_id: i32,
    pub answer: String,
    pub is_correct: bool,
    pub status: AttemptStatus,
    pub points_awarded: i32,
    pub created_at: DateTime<Utc>,
}

impl ExerciseAttempt {
    pub fn into_dto(self) -> AttemptDto {
        AttemptDto {
            id: self.id,
            exercise_id: self.exercise_id,
            answer: self.answer,
            is_correct: self.is_correct,
            status: self.status.as_str().to_string(),
            points_awarded: self.points_awarded,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::exercise_attempt::Model) -> Result<Self, AppError> {
        let status = AttemptStatus::parse(&entity.status).ok_or_else(|| {
            InternalError::UnknownStoredValue {
                field: "exercise_attempt.status",
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            exercise_id: entity.exercise_id,
            user_id: entity.user_id,
            answer: entity.answer,
            is_correct: entity.is_correct,
            status,
            points_awarded: entity.points_awarded,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateAttemptParams {
    pub exercise_id: i32,
    pub user_id: i32,
    pub answer: String,
    pub is_correct: bool,
    pub status: AttemptStatus,
    pub points_awarded: i32,
}

/// Graded attempt returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptResult {
    pub attempt: ExerciseAttempt,
    pub correct_answer: Option<String>,
}

impl AttemptResult {
    pub fn into_dto(self) -> AttemptResultDto {
        AttemptResultDto {
            attempt_id: self.attempt.id,
            is_correct: self.attempt.is_correct,
            status: self.attempt.status.as_str().to_string(),
            points_awarded: self.attempt.points_awarded,
            correct_answer: self.correct_answer,
        }
    }
}
