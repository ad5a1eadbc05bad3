use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        post::{
            CommentDto, CreateCommentDto, CreatePostDto, PaginatedPostsDto, PostDto,
            SetReactionDto, UpdatePostDto,
        },
    },
    server::{
        controller::param::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::post::{Comment, CreatePostParams, PostView, UpdatePostParams},
        service::post::PostService,
        state::AppState,
    },
};

/// Tag for grouping feed endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// Get a page of the public feed, newest first.
///
/// Each post carries its comment count, reaction tallies and the caller's own reaction.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of posts", body = ApiResponse<PaginatedPostsDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feed(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let page = PostService::new(&state.db, &state.hub)
        .feed(user.id, params.page, params.per_page())
        .await?
        .map(PostView::into_dto);

    Ok(Json(ApiResponse::ok(PaginatedPostsDto {
        items: page.items,
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    })))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    security(("bearer" = [])),
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = ApiResponse<PostDto>),
        (status = 400, description = "Empty or overlong title or body", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let post = PostService::new(&state.db, &state.hub)
        .create(CreatePostParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(post.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "The post", body = ApiResponse<PostDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let post = PostService::new(&state.db, &state.hub)
        .get(id, user.id)
        .await?;

    Ok(Json(ApiResponse::ok(post.into_dto())))
}

/// Edit a post. Author only.
#[utoipa::path(
    patch,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = ApiResponse<PostDto>),
        (status = 400, description = "Empty or overlong title or body", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only the author may edit", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let post = PostService::new(&state.db, &state.hub)
        .update(id, user.id, UpdatePostParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::ok(post.into_dto())))
}

/// Delete a post with its comments and reactions. Author only.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only the author may delete", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    PostService::new(&state.db, &state.hub)
        .delete(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List a post's comments, oldest first.
#[utoipa::path(
    get,
    path = "/api/posts/{id}/comments",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Comments", body = ApiResponse<Vec<CommentDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require().await?;

    let comments = PostService::new(&state.db, &state.hub)
        .comments(id)
        .await?
        .into_iter()
        .map(Comment::into_dto)
        .collect::<Vec<_>>();

    Ok(Json(ApiResponse::ok(comments)))
}

/// Comment on a post. The post's author is notified unless they wrote the comment.
#[utoipa::path(
    post,
    path = "/api/posts/{id}/comments",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment added", body = ApiResponse<CommentDto>),
        (status = 400, description = "Empty or overlong comment", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let comment = PostService::new(&state.db, &state.hub)
        .add_comment(id, user.id, &payload.body)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(comment.into_dto())),
    ))
}

/// Delete a comment. Allowed for the comment's author and the post's author.
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this comment", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    PostService::new(&state.db, &state.hub)
        .delete_comment(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// React to a post, replacing any earlier reaction by the caller.
#[utoipa::path(
    put,
    path = "/api/posts/{id}/reaction",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    request_body = SetReactionDto,
    responses(
        (status = 200, description = "Reaction stored", body = ApiResponse<PostDto>),
        (status = 400, description = "Unknown reaction kind", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_reaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SetReactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let post = PostService::new(&state.db, &state.hub)
        .set_reaction(id, user.id, &payload.kind)
        .await?;

    Ok(Json(ApiResponse::ok(post.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}/reaction",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Reaction removed", body = ApiResponse<PostDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_reaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let post = PostService::new(&state.db, &state.hub)
        .clear_reaction(id, user.id)
        .await?;

    Ok(Json(ApiResponse::ok(post.into_dto())))
}
