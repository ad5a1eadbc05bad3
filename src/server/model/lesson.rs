//! Lesson domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::lesson::{
    CreateLessonDto, CreateLessonFileDto, LessonDto, LessonFileDto, UpdateLessonDto,
};

/// A user-owned study unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lesson {
    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::lesson::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            description: entity.description,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLessonParams {
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
}

impl CreateLessonParams {
    pub fn from_dto(user_id: i32, dto: CreateLessonDto) -> Self {
        Self {
            user_id,
            title: dto.title,
            description: dto.description,
            notes: dto.notes,
        }
    }
}

/// Partial lesson update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateLessonParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

impl UpdateLessonParams {
    pub fn from_dto(dto: UpdateLessonDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            notes: dto.notes,
        }
    }
}

/// File attached to a lesson. The server only stores the link, not the content.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonFile {
    pub id: i32,
    pub lesson_id: i32,
    pub file_name: String,
    pub file_url: String,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LessonFile {
    pub fn into_dto(self) -> LessonFileDto {
        LessonFileDto {
            id: self.id,
            lesson_id: self.lesson_id,
            file_name: self.file_name,
            file_url: self.file_url,
            mime_type: self.mime_type,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::lesson_file::Model) -> Self {
        Self {
            id: entity.id,
            lesson_id: entity.lesson_id,
            file_name: entity.file_name,
            file_url: entity.file_url,
            mime_type: entity.mime_type,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLessonFileParams {
    pub lesson_id: i32,
    pub file_name: String,
    pub file_url: String,
    pub mime_type: Option<String>,
}

impl CreateLessonFileParams {
    pub fn from_dto(lesson_id: i32, dto: CreateLessonFileDto) -> Self {
        Self {
            lesson_id,
            file_name: dto.file_name,
            file_url: dto.file_url,
            mime_type: dto.mime_type,
        }
    }
}
