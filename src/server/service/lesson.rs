use sea_orm::DatabaseConnection;

use crate::server::{
    data::{lesson::LessonRepository, lesson_file::LessonFileRepository},
    error::AppError,
    model::{
        lesson::{
            CreateLessonFileParams, CreateLessonParams, Lesson, LessonFile, UpdateLessonParams,
        },
        Paginated,
    },
    util::pagination::total_pages,
};

const TITLE_MAX_CHARS: usize = 200;

pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a lesson owned by `param.user_id`
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The created lesson
    /// - `Err(AppError::BadRequest)` - Empty or overlong title
    pub async fn create(&self, mut param: CreateLessonParams) -> Result<Lesson, AppError> {
        param.title = validate_title(&param.title)?;

        let lesson = LessonRepository::new(self.db).create(param).await?;

        tracing::debug!("User {} created lesson {}", lesson.user_id, lesson.id);

        Ok(lesson)
    }

    /// Gets a lesson owned by the caller
    ///
    /// # Returns
    /// - `Ok(Lesson)` - The lesson
    /// - `Err(AppError::NotFound)` - Lesson missing or owned by someone else
    pub async fn get(&self, id: i32, user_id: i32) -> Result<Lesson, AppError> {
        LessonRepository::new(self.db)
            .find_owned(id, user_id)
            .await?
            .ok_or_else(lesson_not_found)
    }

    /// Lists the caller's lessons, newest first
    pub async fn list(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Lesson>, AppError> {
        let (items, total) = LessonRepository::new(self.db)
            .get_by_user_paginated(user_id, page, per_page)
            .await?;

        Ok(Paginated {
            items,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        mut param: UpdateLessonParams,
    ) -> Result<Lesson, AppError> {
        if let Some(title) = param.title.as_deref() {
            param.title = Some(validate_title(title)?);
        }

        LessonRepository::new(self.db)
            .update(id, user_id, param)
            .await?
            .ok_or_else(lesson_not_found)
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let deleted = LessonRepository::new(self.db).delete(id, user_id).await?;
        if !deleted {
            return Err(lesson_not_found());
        }

        tracing::debug!("User {} deleted lesson {}", user_id, id);

        Ok(())
    }

    /// Attaches a file link to an owned lesson
    pub async fn add_file(
        &self,
        user_id: i32,
        param: CreateLessonFileParams,
    ) -> Result<LessonFile, AppError> {
        self.get(param.lesson_id, user_id).await?;

        if param.file_name.trim().is_empty() || param.file_url.trim().is_empty() {
            return Err(AppError::BadRequest(
                "File name and URL are required".to_string(),
            ));
        }

        Ok(LessonFileRepository::new(self.db).create(param).await?)
    }

    pub async fn list_files(
        &self,
        lesson_id: i32,
        user_id: i32,
    ) -> Result<Vec<LessonFile>, AppError> {
        self.get(lesson_id, user_id).await?;

        Ok(LessonFileRepository::new(self.db)
            .get_by_lesson_id(lesson_id)
            .await?)
    }

    pub async fn delete_file(
        &self,
        lesson_id: i32,
        file_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        self.get(lesson_id, user_id).await?;

        let deleted = LessonFileRepository::new(self.db)
            .delete(file_id, lesson_id)
            .await?;
        if !deleted {
            return Err(AppError::NotFound("File not found".to_string()));
        }

        Ok(())
    }
}

fn lesson_not_found() -> AppError {
    AppError::NotFound("Lesson not found".to_string())
}

fn validate_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > TITLE_MAX_CHARS {
        return Err(AppError::BadRequest(format!(
            "Title must be between 1 and {} characters",
            TITLE_MAX_CHARS
        )));
    }

    Ok(title.to_string())
}
