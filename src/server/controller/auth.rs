use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        auth::{AuthTokenDto, LoginDto, RegisterDto},
        user::UserDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::{session::IssuedToken, user::User},
        service::auth::{AuthService, RegisterParams},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn token_dto(user: User, token: IssuedToken) -> AuthTokenDto {
    AuthTokenDto {
        token: token.token,
        expires_at: token.expires_at,
        user: user.into_dto(),
    }
}

/// Register a new account.
///
/// Creates the account and returns a bearer token for it, so clients are signed in
/// immediately after registering.
///
/// # Returns
/// - `201 Created` - Account created, token issued
/// - `400 Bad Request` - Invalid username, email or password
/// - `409 Conflict` - Username or email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<AuthTokenDto>),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Username or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams {
        username: payload.username,
        email: payload.email,
        password: payload.password,
        display_name: payload.display_name,
    };

    let (user, token) = AuthService::new(&state.db)
        .register(params, state.config.session_ttl())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(token_dto(user, token))),
    ))
}

/// Sign in with a username or email and a password.
///
/// # Returns
/// - `200 OK` - Credentials valid, token issued
/// - `401 Unauthorized` - Unknown login or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = ApiResponse<AuthTokenDto>),
        (status = 401, description = "Invalid login or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::new(&state.db)
        .login(
            &payload.login,
            &payload.password,
            state.config.session_ttl(),
        )
        .await?;

    Ok(Json(ApiResponse::ok(token_dto(user, token))))
}

/// End the current session.
///
/// # Returns
/// - `204 No Content` - Token revoked
/// - `401 Unauthorized` - No bearer token supplied
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Signed out"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &headers);
    let token = guard.token().ok_or(AuthError::MissingToken)?;

    AuthService::new(&state.db).logout(token).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the signed-in account.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The signed-in account", body = ApiResponse<UserDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    Ok(Json(ApiResponse::ok(user.into_dto())))
}
