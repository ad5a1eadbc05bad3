//! Flashcard domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::flashcard::{CreateFlashcardDto, FlashcardDto, UpdateFlashcardDto};

/// Ease factor assigned to new cards.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// A front/back card with its spaced repetition state.
#[derive(Debug, Clone, PartialEq)]
pub struct Flashcard {
    pub id: i32,
    pub lesson_id: i32,
    pub front: String,
    pub back: String,
    pub schedule: Schedule,
    pub due_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Flashcard {
    pub fn into_dto(self) -> FlashcardDto {
        FlashcardDto {
            id: self.id,
            lesson_id: self.lesson_id,
            front: self.front,
            back: self.back,
            ease_factor: self.schedule.ease_factor,
            interval_days: self.schedule.interval_days,
            repetitions: self.schedule.repetitions,
            due_at: self.due_at,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::flashcard::Model) -> Self {
        Self {
            id: entity.id,
            lesson_id: entity.lesson_id,
            front: entity.front,
            back: entity.back,
            schedule: Schedule {
                ease_factor: entity.ease_factor,
                interval_days: entity.interval_days,
                repetitions: entity.repetitions,
            },
            due_at: entity.due_at,
            created_at: entity.created_at,
        }
    }
}

/// Spaced repetition state of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    pub ease_factor: f64,
    pub interval_days: i32,
    pub repetitions: i32,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            ease_factor: INITIAL_EASE_FACTOR,
            interval_days: 0,
            repetitions: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFlashcardParams {
    pub lesson_id: i32,
    pub front: String,
    pub back: String,
}

impl CreateFlashcardParams {
    pub fn from_dto(lesson_id: i32, dto: CreateFlashcardDto) -> Self {
        Self {
            lesson_id,
            front: dto.front,
            back: dto.back,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFlashcardParams {
    pub front: Option<String>,
    pub back: Option<String>,
}

impl UpdateFlashcardParams {
    pub fn from_dto(dto: UpdateFlashcardDto) -> Self {
        Self {
            front: dto.front,
            back: dto.back,
        }
    }
}
