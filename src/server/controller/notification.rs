use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        notification::{MarkedReadDto, NotificationDto, PaginatedNotificationsDto, UnreadCountDto},
    },
    server::{
        controller::param::NotificationListParams, error::AppError, middleware::auth::AuthGuard,
        model::notification::Notification, service::notification::NotificationService,
        state::AppState, util::pagination::clamp_per_page,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List the signed-in user's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    params(
        ("unread_only" = Option<bool>, Query, description = "Only unread notifications (default: false)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of notifications", body = ApiResponse<PaginatedNotificationsDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<NotificationListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let page = NotificationService::new(&state.db, &state.hub)
        .list(
            user.id,
            params.unread_only,
            params.page,
            clamp_per_page(params.entries),
        )
        .await?
        .map(Notification::into_dto);

    Ok(Json(ApiResponse::ok(PaginatedNotificationsDto {
        items: page.items,
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    })))
}

#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Number of unread notifications", body = ApiResponse<UnreadCountDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let count = NotificationService::new(&state.db, &state.hub)
        .unread_count(user.id)
        .await?;

    Ok(Json(ApiResponse::ok(UnreadCountDto { count })))
}

#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked read", body = ApiResponse<NotificationDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let notification = NotificationService::new(&state.db, &state.hub)
        .mark_read(id, user.id)
        .await?;

    Ok(Json(ApiResponse::ok(notification.into_dto())))
}

/// Mark every unread notification read.
#[utoipa::path(
    post,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Number of notifications marked read", body = ApiResponse<MarkedReadDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let updated = NotificationService::new(&state.db, &state.hub)
        .mark_all_read(user.id)
        .await?;

    Ok(Json(ApiResponse::ok(MarkedReadDto { updated })))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    NotificationService::new(&state.db, &state.hub)
        .delete(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
