use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        exercise::{
            AttemptDto, AttemptResultDto, CreateExerciseDto, ExerciseDto, SubmitAttemptDto,
            UpdateExerciseDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::exercise::{CreateExerciseParams, Exercise, ExerciseAttempt, UpdateExerciseParams},
        service::exercise::ExerciseService,
        state::AppState,
    },
};

/// Tag for grouping exercise endpoints in OpenAPI documentation
pub static EXERCISE_TAG: &str = "exercise";

/// Add an exercise to a lesson.
///
/// Multiple choice exercises need at least two options and a correct answer that names
/// an option by text or zero-based index. True/false exercises need a boolean-like
/// answer, short answer exercises need an answer and essays need none.
///
/// # Returns
/// - `201 Created` - The new exercise
/// - `400 Bad Request` - Unknown type or inconsistent answer key
/// - `404 Not Found` - Lesson missing or not owned
#[utoipa::path(
    post,
    path = "/api/lessons/{id}/exercises",
    tag = EXERCISE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Lesson ID")),
    request_body = CreateExerciseDto,
    responses(
        (status = 201, description = "Exercise created", body = ApiResponse<ExerciseDto>),
        (status = 400, description = "Invalid exercise definition", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_exercise(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lesson_id): Path<i32>,
    Json(payload): Json<CreateExerciseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let params = CreateExerciseParams::from_dto(lesson_id, payload)?;
    let exercise = ExerciseService::new(&state.db)
        .create(user.id, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(exercise.into_dto())),
    ))
}

/// List a lesson's exercises ordered by position.
#[utoipa::path(
    get,
    path = "/api/lessons/{id}/exercises",
    tag = EXERCISE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Lesson ID")),
    responses(
        (status = 200, description = "Lesson exercises", body = ApiResponse<Vec<ExerciseDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson_exercises(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let exercises = ExerciseService::new(&state.db)
        .list(lesson_id, user.id)
        .await?
        .into_iter()
        .map(Exercise::into_dto)
        .collect::<Vec<_>>();

    Ok(Json(ApiResponse::ok(exercises)))
}

#[utoipa::path(
    get,
    path = "/api/exercises/{id}",
    tag = EXERCISE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Exercise ID")),
    responses(
        (status = 200, description = "The exercise", body = ApiResponse<ExerciseDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Exercise not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_exercise(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let exercise = ExerciseService::new(&state.db).get(id, user.id).await?;

    Ok(Json(ApiResponse::ok(exercise.into_dto())))
}

/// Update an exercise. The exercise type cannot change.
#[utoipa::path(
    patch,
    path = "/api/exercises/{id}",
    tag = EXERCISE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Exercise ID")),
    request_body = UpdateExerciseDto,
    responses(
        (status = 200, description = "Exercise updated", body = ApiResponse<ExerciseDto>),
        (status = 400, description = "Invalid exercise definition", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Exercise not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_exercise(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateExerciseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let params = UpdateExerciseParams::from_dto(payload);
    let exercise = ExerciseService::new(&state.db)
        .update(id, user.id, params)
        .await?;

    Ok(Json(ApiResponse::ok(exercise.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/exercises/{id}",
    tag = EXERCISE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Exercise ID")),
    responses(
        (status = 204, description = "Exercise deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Exercise not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_exercise(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    ExerciseService::new(&state.db).delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Submit an answer for automatic grading.
///
/// Correct answers award the exercise's points as XP. Essays are stored as pending.
#[utoipa::path(
    post,
    path = "/api/exercises/{id}/attempts",
    tag = EXERCISE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Exercise ID")),
    request_body = SubmitAttemptDto,
    responses(
        (status = 201, description = "Attempt graded", body = ApiResponse<AttemptResultDto>),
        (status = 400, description = "Empty answer", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Exercise not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_attempt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SubmitAttemptDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let result = ExerciseService::new(&state.db)
        .attempt(id, user.id, payload.answer)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(result.into_dto())),
    ))
}

/// List the signed-in user's attempts at an exercise, newest first.
#[utoipa::path(
    get,
    path = "/api/exercises/{id}/attempts",
    tag = EXERCISE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Exercise ID")),
    responses(
        (status = 200, description = "Previous attempts", body = ApiResponse<Vec<AttemptDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Exercise not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attempts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let attempts = ExerciseService::new(&state.db)
        .attempts(id, user.id)
        .await?
        .into_iter()
        .map(ExerciseAttempt::into_dto)
        .collect::<Vec<_>>();

    Ok(Json(ApiResponse::ok(attempts)))
}
