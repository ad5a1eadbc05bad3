//! Exercises within lessons, attempts and grading.

pub mod grading;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{exercise::ExerciseRepository, exercise_attempt::ExerciseAttemptRepository},
    error::AppError,
    model::exercise::{
        AttemptResult, AttemptStatus, CreateAttemptParams, CreateExerciseParams, Exercise,
        ExerciseAttempt, UpdateExerciseParams,
    },
    service::{
        exercise::grading::{grade, validate_definition},
        lesson::LessonService,
        user::UserService,
    },
};

pub struct ExerciseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExerciseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an exercise to an owned lesson
    ///
    /// # Returns
    /// - `Ok(Exercise)` - The created exercise
    /// - `Err(AppError::NotFound)` - Lesson missing or not owned
    /// - `Err(AppError::BadRequest)` - Definition cannot be graded
    pub async fn create(
        &self,
        user_id: i32,
        mut param: CreateExerciseParams,
    ) -> Result<Exercise, AppError> {
        LessonService::new(self.db)
            .get(param.lesson_id, user_id)
            .await?;

        param.question = param.question.trim().to_string();
        validate_definition(
            param.exercise_type,
            &param.question,
            &param.options,
            param.correct_answer.as_deref(),
            param.points,
        )?;

        ExerciseRepository::new(self.db).create(param).await
    }

    /// Lists a lesson's exercises ordered by position, then ID
    pub async fn list(&self, lesson_id: i32, user_id: i32) -> Result<Vec<Exercise>, AppError> {
        LessonService::new(self.db).get(lesson_id, user_id).await?;

        ExerciseRepository::new(self.db)
            .get_by_lesson_id(lesson_id)
            .await
    }

    pub async fn get(&self, id: i32, user_id: i32) -> Result<Exercise, AppError> {
        ExerciseRepository::new(self.db)
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Exercise not found".to_string()))
    }

    /// Applies a partial update, validating the merged definition
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        param: UpdateExerciseParams,
    ) -> Result<Exercise, AppError> {
        let current = self.get(id, user_id).await?;

        let question = param
            .question
            .as_deref()
            .map(str::trim)
            .unwrap_or(&current.question);
        let options = param.options.as_ref().unwrap_or(&current.options);
        let correct_answer = param
            .correct_answer
            .as_deref()
            .or(current.correct_answer.as_deref());
        let points = param.points.unwrap_or(current.points);

        validate_definition(
            current.exercise_type,
            question,
            options,
            correct_answer,
            points,
        )?;

        let param = UpdateExerciseParams {
            question: param.question.map(|question| question.trim().to_string()),
            ..param
        };

        ExerciseRepository::new(self.db).update(id, param).await
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        self.get(id, user_id).await?;

        ExerciseRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Grades and stores an answer, awarding XP when it is correct
    ///
    /// # Returns
    /// - `Ok(AttemptResult)` - Stored attempt plus the answer key for graded exercises
    /// - `Err(AppError::BadRequest)` - Empty answer
    /// - `Err(AppError::NotFound)` - Exercise missing or not owned
    pub async fn attempt(
        &self,
        id: i32,
        user_id: i32,
        answer: String,
    ) -> Result<AttemptResult, AppError> {
        if answer.trim().is_empty() {
            return Err(AppError::BadRequest("Answer must not be empty".to_string()));
        }

        let exercise = self.get(id, user_id).await?;
        let result = grade(&exercise, &answer);

        let attempt = ExerciseAttemptRepository::new(self.db)
            .create(CreateAttemptParams {
                exercise_id: exercise.id,
                user_id,
                answer,
                is_correct: result.is_correct,
                status: result.status,
                points_awarded: result.points_awarded,
            })
            .await?;

        if result.points_awarded > 0 {
            UserService::new(self.db)
                .award_xp(user_id, result.points_awarded)
                .await?;
        }

        let correct_answer = match result.status {
            AttemptStatus::Graded => exercise.correct_answer,
            AttemptStatus::Pending => None,
        };

        Ok(AttemptResult {
            attempt,
            correct_answer,
        })
    }

    /// Gets the caller's attempts at an exercise, newest first
    pub async fn attempts(&self, id: i32, user_id: i32) -> Result<Vec<ExerciseAttempt>, AppError> {
        self.get(id, user_id).await?;

        ExerciseAttemptRepository::new(self.db)
            .get_by_exercise_and_user(id, user_id)
            .await
    }
}
