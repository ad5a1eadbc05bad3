use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        connection::{BlockUserDto, ConnectionDto, ConnectionWithUserDto, CreateConnectionDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::connection::ConnectionWithUser,
        service::connection::ConnectionService, state::AppState,
    },
};

/// Tag for grouping connection endpoints in OpenAPI documentation
pub static CONNECTION_TAG: &str = "connection";

fn into_dtos(connections: Vec<ConnectionWithUser>) -> Vec<ConnectionWithUserDto> {
    connections
        .into_iter()
        .map(ConnectionWithUser::into_dto)
        .collect()
}

/// Send a connection request.
///
/// If the other user already asked to connect with the caller, their request is accepted
/// instead.
///
/// # Returns
/// - `201 Created` - Pending (or accepted) connection
/// - `400 Bad Request` - Request to self
/// - `403 Forbidden` - One of the users blocked the other
/// - `404 Not Found` - User does not exist
/// - `409 Conflict` - Already connected or already requested
#[utoipa::path(
    post,
    path = "/api/connections",
    tag = CONNECTION_TAG,
    security(("bearer" = [])),
    request_body = CreateConnectionDto,
    responses(
        (status = 201, description = "Request sent", body = ApiResponse<ConnectionDto>),
        (status = 400, description = "Cannot connect with yourself", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Connection blocked", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Already connected or requested", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_connection(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateConnectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let connection = ConnectionService::new(&state.db, &state.hub)
        .request(user.id, payload.addressee_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(connection.into_dto())),
    ))
}

/// List accepted connections with each friend's profile.
#[utoipa::path(
    get,
    path = "/api/connections",
    tag = CONNECTION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Friends", body = ApiResponse<Vec<ConnectionWithUserDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friends(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let friends = ConnectionService::new(&state.db, &state.hub)
        .friends(user.id)
        .await?;

    Ok(Json(ApiResponse::ok(into_dtos(friends))))
}

/// List pending requests addressed to the signed-in user.
#[utoipa::path(
    get,
    path = "/api/connections/incoming",
    tag = CONNECTION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Incoming requests", body = ApiResponse<Vec<ConnectionWithUserDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_incoming_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let requests = ConnectionService::new(&state.db, &state.hub)
        .incoming(user.id)
        .await?;

    Ok(Json(ApiResponse::ok(into_dtos(requests))))
}

/// List pending requests sent by the signed-in user.
#[utoipa::path(
    get,
    path = "/api/connections/outgoing",
    tag = CONNECTION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Outgoing requests", body = ApiResponse<Vec<ConnectionWithUserDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outgoing_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let requests = ConnectionService::new(&state.db, &state.hub)
        .outgoing(user.id)
        .await?;

    Ok(Json(ApiResponse::ok(into_dtos(requests))))
}

#[utoipa::path(
    post,
    path = "/api/connections/{id}/accept",
    tag = CONNECTION_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Connection ID")),
    responses(
        (status = 200, description = "Request accepted", body = ApiResponse<ConnectionDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only the addressee may accept", body = ErrorDto),
        (status = 404, description = "Connection not found", body = ErrorDto),
        (status = 409, description = "Request is not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_connection(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let connection = ConnectionService::new(&state.db, &state.hub)
        .accept(id, user.id)
        .await?;

    Ok(Json(ApiResponse::ok(connection.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/connections/{id}/reject",
    tag = CONNECTION_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Connection ID")),
    responses(
        (status = 200, description = "Request rejected", body = ApiResponse<ConnectionDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only the addressee may reject", body = ErrorDto),
        (status = 404, description = "Connection not found", body = ErrorDto),
        (status = 409, description = "Request is not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_connection(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let connection = ConnectionService::new(&state.db, &state.hub)
        .reject(id, user.id)
        .await?;

    Ok(Json(ApiResponse::ok(connection.into_dto())))
}

/// Block a user, replacing any existing connection with them.
#[utoipa::path(
    post,
    path = "/api/connections/block",
    tag = CONNECTION_TAG,
    security(("bearer" = [])),
    request_body = BlockUserDto,
    responses(
        (status = 200, description = "User blocked", body = ApiResponse<ConnectionDto>),
        (status = 400, description = "Cannot block yourself", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn block_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BlockUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let connection = ConnectionService::new(&state.db, &state.hub)
        .block(user.id, payload.user_id)
        .await?;

    Ok(Json(ApiResponse::ok(connection.into_dto())))
}

/// Delete a connection: unfriend, cancel a request, or lift a block placed by the caller.
#[utoipa::path(
    delete,
    path = "/api/connections/{id}",
    tag = CONNECTION_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Connection ID")),
    responses(
        (status = 204, description = "Connection removed"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only the blocker may lift a block", body = ErrorDto),
        (status = 404, description = "Connection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_connection(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    ConnectionService::new(&state.db, &state.hub)
        .remove(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
