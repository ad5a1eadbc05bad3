use chrono::Duration;

use super::*;
use crate::server::service::auth::{AuthService, RegisterParams};

fn register_params(username: &str, email: &str) -> RegisterParams {
    RegisterParams {
        username: username.to_string(),
        email: email.to_string(),
        password: "correct horse".to_string(),
        display_name: None,
    }
}

/// Tests registering and then authenticating with the issued token.
///
/// Verifies that the email is stored lowercase, the display name defaults to the username
/// and the returned token resolves to the new user.
///
/// Expected: Ok with a working token
#[tokio::test]
async fn registers_and_authenticates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let (user, token) = service
        .register(
            register_params("ada", "Ada@Example.com"),
            Duration::hours(1),
        )
        .await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.display_name, "ada");
    assert_ne!(user.password_hash, "correct horse");

    let authenticated = service.authenticate(&token.token).await?;
    assert_eq!(authenticated.id, user.id);

    Ok(())
}

/// Tests registering a taken username.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .register(
            register_params("ada", "ada@example.com"),
            Duration::hours(1),
        )
        .await?;

    let result = service
        .register(
            register_params("ada", "other@example.com"),
            Duration::hours(1),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests registering with a password that is too short.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = register_params("ada", "ada@example.com");
    params.password = "short".to_string();

    let result = AuthService::new(db)
        .register(params, Duration::hours(1))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Verifies that the error is the same generic credentials error used for unknown logins.
///
/// Expected: Err(AuthError::InvalidCredentials) in both cases
#[tokio::test]
async fn rejects_wrong_password_and_unknown_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .register(
            register_params("ada", "ada@example.com"),
            Duration::hours(1),
        )
        .await?;

    let wrong_password = service
        .login("ada", "not the password", Duration::hours(1))
        .await;
    let unknown = service
        .login("nobody", "correct horse", Duration::hours(1))
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that logging out revokes the token.
///
/// Expected: Err(AuthError::InvalidToken) after logout
#[tokio::test]
async fn logout_revokes_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .register(
            register_params("ada", "ada@example.com"),
            Duration::hours(1),
        )
        .await?;
    let (_, token) = service
        .login("ada@example.com", "correct horse", Duration::hours(1))
        .await?;

    service.logout(&token.token).await?;
    let result = service.authenticate(&token.token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests that expired tokens are rejected and purged.
///
/// Expected: InvalidToken for the expired token, and one session purged
#[tokio::test]
async fn rejects_and_purges_expired_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let (_, token) = service
        .register(
            register_params("ada", "ada@example.com"),
            Duration::seconds(-1),
        )
        .await?;

    let result = service.authenticate(&token.token).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    assert_eq!(service.purge_expired_sessions().await?, 1);

    Ok(())
}
