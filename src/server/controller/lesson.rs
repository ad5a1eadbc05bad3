use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        lesson::{
            CreateLessonDto, CreateLessonFileDto, LessonDto, LessonFileDto, PaginatedLessonsDto,
            UpdateLessonDto,
        },
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::lesson::{CreateLessonFileParams, CreateLessonParams, Lesson, UpdateLessonParams},
        service::lesson::LessonService,
        state::AppState,
    },
};

/// Tag for grouping lesson endpoints in OpenAPI documentation
pub static LESSON_TAG: &str = "lesson";

/// Create a lesson owned by the signed-in user.
///
/// # Returns
/// - `201 Created` - The new lesson
/// - `400 Bad Request` - Empty or overlong title
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    post,
    path = "/api/lessons",
    tag = LESSON_TAG,
    security(("bearer" = [])),
    request_body = CreateLessonDto,
    responses(
        (status = 201, description = "Lesson created", body = ApiResponse<LessonDto>),
        (status = 400, description = "Invalid lesson data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let params = CreateLessonParams::from_dto(user.id, payload);
    let lesson = LessonService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(lesson.into_dto())),
    ))
}

/// List the signed-in user's lessons, newest first.
#[utoipa::path(
    get,
    path = "/api/lessons",
    tag = LESSON_TAG,
    security(("bearer" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of lessons", body = ApiResponse<PaginatedLessonsDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lessons(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let page = LessonService::new(&state.db)
        .list(user.id, params.page, params.per_page())
        .await?
        .map(Lesson::into_dto);

    Ok(Json(ApiResponse::ok(PaginatedLessonsDto {
        items: page.items,
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    })))
}

/// Get one of the signed-in user's lessons.
///
/// Lessons owned by other users are reported as not found.
#[utoipa::path(
    get,
    path = "/api/lessons/{id}",
    tag = LESSON_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Lesson ID")),
    responses(
        (status = 200, description = "The lesson", body = ApiResponse<LessonDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let lesson = LessonService::new(&state.db).get(id, user.id).await?;

    Ok(Json(ApiResponse::ok(lesson.into_dto())))
}

/// Update a lesson's title, description or notes.
#[utoipa::path(
    patch,
    path = "/api/lessons/{id}",
    tag = LESSON_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Lesson ID")),
    request_body = UpdateLessonDto,
    responses(
        (status = 200, description = "Lesson updated", body = ApiResponse<LessonDto>),
        (status = 400, description = "Invalid lesson data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let params = UpdateLessonParams::from_dto(payload);
    let lesson = LessonService::new(&state.db)
        .update(id, user.id, params)
        .await?;

    Ok(Json(ApiResponse::ok(lesson.into_dto())))
}

/// Delete a lesson with its files, flashcards and exercises.
#[utoipa::path(
    delete,
    path = "/api/lessons/{id}",
    tag = LESSON_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Lesson ID")),
    responses(
        (status = 204, description = "Lesson deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    LessonService::new(&state.db).delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Attach a file link to a lesson.
#[utoipa::path(
    post,
    path = "/api/lessons/{id}/files",
    tag = LESSON_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Lesson ID")),
    request_body = CreateLessonFileDto,
    responses(
        (status = 201, description = "File attached", body = ApiResponse<LessonFileDto>),
        (status = 400, description = "Missing file name or URL", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_lesson_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateLessonFileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let params = CreateLessonFileParams::from_dto(id, payload);
    let file = LessonService::new(&state.db)
        .add_file(user.id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(file.into_dto()))))
}

/// List the files attached to a lesson.
#[utoipa::path(
    get,
    path = "/api/lessons/{id}/files",
    tag = LESSON_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Lesson ID")),
    responses(
        (status = 200, description = "Lesson files", body = ApiResponse<Vec<LessonFileDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson_files(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let files = LessonService::new(&state.db)
        .list_files(id, user.id)
        .await?
        .into_iter()
        .map(|file| file.into_dto())
        .collect::<Vec<_>>();

    Ok(Json(ApiResponse::ok(files)))
}

/// Remove a file from a lesson.
#[utoipa::path(
    delete,
    path = "/api/lessons/{id}/files/{file_id}",
    tag = LESSON_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Lesson ID"),
        ("file_id" = i32, Path, description = "File ID")
    ),
    responses(
        (status = 204, description = "File removed"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Lesson or file not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_lesson_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, file_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    LessonService::new(&state.db)
        .delete_file(id, file_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
