use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{PaginatedProfilesDto, ProfileDto, ProgressDto, UpdateProfileDto, UserDto},
    },
    server::{
        controller::param::SearchParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{UpdateProfileParams, User},
        service::user::UserService,
        state::AppState,
        util::pagination::clamp_per_page,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Update the signed-in user's profile.
///
/// Only the fields present in the body change. An empty bio clears it.
///
/// # Returns
/// - `200 OK` - Updated account
/// - `400 Bad Request` - Display name or bio too long
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let params = UpdateProfileParams {
        display_name: payload.display_name,
        bio: payload.bio,
    };

    let user = UserService::new(&state.db)
        .update_profile(user.id, params)
        .await?;

    Ok(Json(ApiResponse::ok(user.into_dto())))
}

/// Get the signed-in user's XP and level.
#[utoipa::path(
    get,
    path = "/api/users/me/progress",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "XP standing", body = ApiResponse<ProgressDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let progress = UserService::new(&state.db).progress(user.id).await?;

    Ok(Json(ApiResponse::ok(progress.into_dto())))
}

/// Search users by username or display name.
///
/// Matching is a case-insensitive substring match.
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("q" = Option<String>, Query, description = "Search text"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Matching users", body = ApiResponse<PaginatedProfilesDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    let page = UserService::new(&state.db)
        .search(params.q.trim(), params.page, clamp_per_page(params.entries))
        .await?
        .map(User::into_profile_dto);

    Ok(Json(ApiResponse::ok(PaginatedProfilesDto {
        items: page.items,
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    })))
}

/// Get a user's public profile.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Public profile", body = ApiResponse<ProfileDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    let user = UserService::new(&state.db).get_profile(id).await?;

    Ok(Json(ApiResponse::ok(user.into_profile_dto())))
}
