//! Account registration, login and bearer token sessions.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        session::IssuedToken,
        user::{CreateUserParams, User},
    },
    util::{
        password::{hash_password, verify_password},
        token::{generate_token, hash_token},
    },
};

const USERNAME_MIN_CHARS: usize = 3;
const USERNAME_MAX_CHARS: usize = 32;
const PASSWORD_MIN_CHARS: usize = 8;
const DISPLAY_NAME_MAX_CHARS: usize = 64;

/// Parameters for registering an account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account and signs it in.
    ///
    /// # Arguments
    /// - `params` - Requested username, email, password and optional display name
    /// - `session_ttl` - Lifetime of the issued token
    ///
    /// # Returns
    /// - `Ok((User, IssuedToken))` - New account and its first token
    /// - `Err(AppError::BadRequest)` - Invalid username, email, password or display name
    /// - `Err(AppError::Conflict)` - Username or email already registered
    pub async fn register(
        &self,
        params: RegisterParams,
        session_ttl: Duration,
    ) -> Result<(User, IssuedToken), AppError> {
        let username = params.username.trim().to_string();
        let email = params.email.trim().to_lowercase();
        let display_name = params
            .display_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| username.clone());

        validate_username(&username)?;
        validate_email(&email)?;
        if params.password.chars().count() < PASSWORD_MIN_CHARS {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                PASSWORD_MIN_CHARS
            )));
        }
        if display_name.chars().count() > DISPLAY_NAME_MAX_CHARS {
            return Err(AppError::BadRequest(format!(
                "Display name must be at most {} characters",
                DISPLAY_NAME_MAX_CHARS
            )));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.username_exists(&username).await? {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }
        if user_repo.email_exists(&email).await? {
            return Err(AppError::Conflict(
                "Email is already registered".to_string(),
            ));
        }

        let user = user_repo
            .create(CreateUserParams {
                username,
                email,
                display_name,
                password_hash: hash_password(&params.password)?,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        let token = self.issue_token(user.id, session_ttl).await?;

        Ok((user, token))
    }

    /// Signs in with a username or email and password.
    ///
    /// # Returns
    /// - `Ok((User, IssuedToken))` - Authenticated user and a new token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown login or wrong password
    pub async fn login(
        &self,
        login: &str,
        password: &str,
        session_ttl: Duration,
    ) -> Result<(User, IssuedToken), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_login(login.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.issue_token(user.id, session_ttl).await?;

        Ok((user, token))
    }

    /// Ends the session of a token. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        SessionRepository::new(self.db)
            .delete_by_hash(&hash_token(token))
            .await?;

        Ok(())
    }

    /// Resolves a bearer token to its user.
    ///
    /// # Returns
    /// - `Ok(User)` - Token is valid and unexpired
    /// - `Err(AuthError::InvalidToken)` - Unknown or expired token, or deleted user
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let session = SessionRepository::new(self.db)
            .find_active(&hash_token(token), Utc::now())
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let user = UserRepository::new(self.db)
            .find_by_id(session.user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        Ok(user)
    }

    /// Deletes every expired session.
    pub async fn purge_expired_sessions(&self) -> Result<u64, AppError> {
        Ok(SessionRepository::new(self.db)
            .delete_expired(Utc::now())
            .await?)
    }

    async fn issue_token(&self, user_id: i32, ttl: Duration) -> Result<IssuedToken, AppError> {
        let token = generate_token();
        let expires_at = Utc::now() + ttl;

        SessionRepository::new(self.db)
            .create(user_id, hash_token(&token), expires_at)
            .await?;

        Ok(IssuedToken { token, expires_at })
    }
}

fn validate_username(username: &str) -> Result<(), AppError> {
    let length = username.chars().count();
    if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&length) {
        return Err(AppError::BadRequest(format!(
            "Username must be between {} and {} characters",
            USERNAME_MIN_CHARS, USERNAME_MAX_CHARS
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(AppError::BadRequest(
            "Username may only contain letters, digits and underscores".to_string(),
        ));
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());

    if !valid {
        return Err(AppError::BadRequest("Email address is invalid".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_usernames() {
        assert!(validate_username("ada_99").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(33)).is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("dash-name").is_err());
    }

    #[test]
    fn validates_emails() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("ada.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@").is_err());
    }
}
