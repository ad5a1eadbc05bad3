use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        room::{
            AccessRequestDto, CreateRoomDto, JoinRoomDto, PaginatedRoomsDto, RoomDto,
            RoomMemberDto, RoomMessageDto, SendMessageDto, UpdateRoomDto,
        },
    },
    server::{
        controller::param::{MessageHistoryParams, PaginationParams},
        error::AppError,
        middleware::auth::AuthGuard,
        model::room::{
            CreateRoomParams, JoinOutcome, RoomAccess, RoomMemberWithUser, RoomMessage,
            UpdateRoomParams,
        },
        service::{
            room::{chat::ChatService, RoomService},
            user::UserService,
        },
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// Create a chat room. The creator becomes its owner and first member.
///
/// # Returns
/// - `201 Created` - The new room
/// - `400 Bad Request` - Empty name or unknown visibility
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = ApiResponse<RoomDto>),
        (status = 400, description = "Invalid room", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let params = CreateRoomParams::from_dto(user.id, payload)?;
    let room = RoomService::new(&state.db, &state.hub)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(room.into_dto()))))
}

/// List rooms visible to the signed-in user: every public room plus private rooms they belong to.
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of rooms", body = ApiResponse<PaginatedRoomsDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let page = RoomService::new(&state.db, &state.hub)
        .list(user.id, params.page, params.per_page())
        .await?
        .map(RoomAccess::into_dto);

    Ok(Json(ApiResponse::ok(PaginatedRoomsDto {
        items: page.items,
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    })))
}

/// Get a room. Private rooms are reported as not found to non-members.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "The room", body = ApiResponse<RoomDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let room = RoomService::new(&state.db, &state.hub)
        .get(id, user.id)
        .await?;

    Ok(Json(ApiResponse::ok(room.into_dto())))
}

/// Update a room's name, description or visibility. Owner only.
#[utoipa::path(
    patch,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Room updated", body = ApiResponse<RoomDto>),
        (status = 400, description = "Invalid room", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only the owner may update the room", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let params = UpdateRoomParams::from_dto(payload)?;
    let room = RoomService::new(&state.db, &state.hub)
        .update(id, user.id, params)
        .await?;

    Ok(Json(ApiResponse::ok(room.into_dto())))
}

/// Delete a room with its members, requests and messages. Owner only.
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only the owner may delete the room", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    RoomService::new(&state.db, &state.hub)
        .delete(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Join a room.
///
/// Public rooms are joined immediately. For private rooms an access request is opened
/// and the owner is notified.
///
/// # Returns
/// - `200 OK` - `status` is `joined` or `requested`
/// - `404 Not Found` - Room does not exist
/// - `409 Conflict` - Already a member or a request is already pending
#[utoipa::path(
    post,
    path = "/api/rooms/{id}/join",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Joined or requested", body = ApiResponse<JoinRoomDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Already a member or already requested", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let outcome = RoomService::new(&state.db, &state.hub)
        .join(id, user.id)
        .await?;

    let dto = match outcome {
        JoinOutcome::Joined => JoinRoomDto {
            status: "joined".to_string(),
            request_id: None,
        },
        JoinOutcome::Requested(request) => JoinRoomDto {
            status: "requested".to_string(),
            request_id: Some(request.id),
        },
    };

    Ok(Json(ApiResponse::ok(dto)))
}

/// Leave a room. The owner cannot leave their own room.
#[utoipa::path(
    post,
    path = "/api/rooms/{id}/leave",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 204, description = "Left the room"),
        (status = 400, description = "Owner cannot leave", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    RoomService::new(&state.db, &state.hub)
        .leave(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}/members",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room members", body = ApiResponse<Vec<RoomMemberDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let members = RoomService::new(&state.db, &state.hub)
        .members(id, user.id)
        .await?
        .into_iter()
        .map(RoomMemberWithUser::into_dto)
        .collect::<Vec<_>>();

    Ok(Json(ApiResponse::ok(members)))
}

/// List pending access requests for a room. Owner only.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}/requests",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Pending requests", body = ApiResponse<Vec<AccessRequestDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only the owner may view requests", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_access_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let requests = RoomService::new(&state.db, &state.hub)
        .access_requests(id, user.id)
        .await?
        .into_iter()
        .map(|(request, requester)| request.into_dto(requester))
        .collect::<Vec<_>>();

    Ok(Json(ApiResponse::ok(requests)))
}

async fn decide_request(
    state: &AppState,
    headers: &HeaderMap,
    request_id: i32,
    approve: bool,
) -> Result<AccessRequestDto, AppError> {
    let user = AuthGuard::new(&state.db, headers).require().await?;

    let request = RoomService::new(&state.db, &state.hub)
        .decide(request_id, user.id, approve)
        .await?;
    let requester = UserService::new(&state.db)
        .get_profile(request.user_id)
        .await?;

    Ok(request.into_dto(requester))
}

/// Approve an access request, adding the requester as a member. Owner only.
#[utoipa::path(
    post,
    path = "/api/rooms/requests/{request_id}/approve",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(("request_id" = i32, Path, description = "Access request ID")),
    responses(
        (status = 200, description = "Request approved", body = ApiResponse<AccessRequestDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only the owner may decide", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_access_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let request = decide_request(&state, &headers, request_id, true).await?;

    Ok(Json(ApiResponse::ok(request)))
}

/// Deny an access request. Owner only.
#[utoipa::path(
    post,
    path = "/api/rooms/requests/{request_id}/deny",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(("request_id" = i32, Path, description = "Access request ID")),
    responses(
        (status = 200, description = "Request denied", body = ApiResponse<AccessRequestDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only the owner may decide", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deny_access_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let request = decide_request(&state, &headers, request_id, false).await?;

    Ok(Json(ApiResponse::ok(request)))
}

/// Read chat history, newest first.
///
/// Pass the smallest message ID received as `before` to page further back.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}/messages",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Room ID"),
        ("before" = Option<i32>, Query, description = "Only messages older than this ID"),
        ("limit" = Option<u64>, Query, description = "Messages to return (default: 50, max: 100)")
    ),
    responses(
        (status = 200, description = "Chat history", body = ApiResponse<Vec<RoomMessageDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<MessageHistoryParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let messages = ChatService::new(&state.db, &state.hub)
        .messages(id, user.id, params.before, params.limit)
        .await?
        .into_iter()
        .map(RoomMessage::into_dto)
        .collect::<Vec<_>>();

    Ok(Json(ApiResponse::ok(messages)))
}

/// Post a chat message. Connected members receive it over their websocket.
#[utoipa::path(
    post,
    path = "/api/rooms/{id}/messages",
    tag = ROOM_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = ApiResponse<RoomMessageDto>),
        (status = 400, description = "Empty or overlong message", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_room_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let message = ChatService::new(&state.db, &state.hub)
        .send(id, user.id, &payload.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(message.into_dto())),
    ))
}
