use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        flashcard::{CreateFlashcardDto, FlashcardDto, ReviewFlashcardDto, UpdateFlashcardDto},
    },
    server::{
        controller::param::DueParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::flashcard::{CreateFlashcardParams, Flashcard, UpdateFlashcardParams},
        service::flashcard::FlashcardService,
        state::AppState,
    },
};

/// Tag for grouping flashcard endpoints in OpenAPI documentation
pub static FLASHCARD_TAG: &str = "flashcard";

fn into_dtos(cards: Vec<Flashcard>) -> Vec<FlashcardDto> {
    cards.into_iter().map(Flashcard::into_dto).collect()
}

/// Add a flashcard to a lesson. New cards are due immediately.
#[utoipa::path(
    post,
    path = "/api/lessons/{id}/flashcards",
    tag = FLASHCARD_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Lesson ID")),
    request_body = CreateFlashcardDto,
    responses(
        (status = 201, description = "Flashcard created", body = ApiResponse<FlashcardDto>),
        (status = 400, description = "Empty front or back", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flashcard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lesson_id): Path<i32>,
    Json(payload): Json<CreateFlashcardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let params = CreateFlashcardParams::from_dto(lesson_id, payload);
    let card = FlashcardService::new(&state.db)
        .create(user.id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(card.into_dto()))))
}

/// List the flashcards of a lesson.
#[utoipa::path(
    get,
    path = "/api/lessons/{id}/flashcards",
    tag = FLASHCARD_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Lesson ID")),
    responses(
        (status = 200, description = "Lesson flashcards", body = ApiResponse<Vec<FlashcardDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson_flashcards(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let cards = FlashcardService::new(&state.db)
        .list(lesson_id, user.id)
        .await?;

    Ok(Json(ApiResponse::ok(into_dtos(cards))))
}

/// Get the signed-in user's flashcards that are due for review, oldest due first.
#[utoipa::path(
    get,
    path = "/api/flashcards/due",
    tag = FLASHCARD_TAG,
    security(("bearer" = [])),
    params(
        ("limit" = Option<u64>, Query, description = "Maximum cards (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Due flashcards", body = ApiResponse<Vec<FlashcardDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_due_flashcards(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DueParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let cards = FlashcardService::new(&state.db)
        .due(user.id, params.limit)
        .await?;

    Ok(Json(ApiResponse::ok(into_dtos(cards))))
}

#[utoipa::path(
    get,
    path = "/api/flashcards/{id}",
    tag = FLASHCARD_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Flashcard ID")),
    responses(
        (status = 200, description = "The flashcard", body = ApiResponse<FlashcardDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Flashcard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flashcard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let card = FlashcardService::new(&state.db).get(id, user.id).await?;

    Ok(Json(ApiResponse::ok(card.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/flashcards/{id}",
    tag = FLASHCARD_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Flashcard ID")),
    request_body = UpdateFlashcardDto,
    responses(
        (status = 200, description = "Flashcard updated", body = ApiResponse<FlashcardDto>),
        (status = 400, description = "Empty front or back", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Flashcard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flashcard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFlashcardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let params = UpdateFlashcardParams::from_dto(payload);
    let card = FlashcardService::new(&state.db)
        .update(id, user.id, params)
        .await?;

    Ok(Json(ApiResponse::ok(card.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/flashcards/{id}",
    tag = FLASHCARD_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Flashcard ID")),
    responses(
        (status = 204, description = "Flashcard deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Flashcard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flashcard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    FlashcardService::new(&state.db).delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Record a review of a flashcard.
///
/// Reschedules the card, stores the review and awards `2 * quality` XP.
///
/// # Returns
/// - `200 OK` - Card with its new schedule
/// - `400 Bad Request` - Quality outside 1-5
/// - `404 Not Found` - Card missing or not owned
#[utoipa::path(
    post,
    path = "/api/flashcards/{id}/review",
    tag = FLASHCARD_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Flashcard ID")),
    request_body = ReviewFlashcardDto,
    responses(
        (status = 200, description = "Review recorded", body = ApiResponse<FlashcardDto>),
        (status = 400, description = "Quality outside 1-5", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Flashcard not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_flashcard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewFlashcardDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let card = FlashcardService::new(&state.db)
        .review(id, user.id, payload.quality)
        .await?;

    Ok(Json(ApiResponse::ok(card.into_dto())))
}
