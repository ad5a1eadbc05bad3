use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::AuthService,
};

/// Resolves the bearer token of a request to its user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    token: Option<&'a str>,
}

impl<'a> AuthGuard<'a> {
    /// Reads the token from an `Authorization: Bearer <token>` header.
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            token: bearer_token(headers),
        }
    }

    /// Uses a token obtained some other way, such as the websocket `token` query parameter.
    pub fn with_token(db: &'a DatabaseConnection, token: Option<&'a str>) -> Self {
        Self {
            db,
            token: token.map(str::trim).filter(|token| !token.is_empty()),
        }
    }

    /// The raw token, if one was supplied.
    pub fn token(&self) -> Option<&'a str> {
        self.token
    }

    /// Requires a valid, unexpired session.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No token supplied
    /// - `Err(AuthError::InvalidToken)` - Unknown or expired token
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(token) = self.token else {
            return Err(AuthError::MissingToken.into());
        };

        AuthService::new(self.db).authenticate(token).await
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc123")), Some("abc123"));
        assert_eq!(bearer_token(&headers("bearer  abc123 ")), Some("abc123"));
    }

    #[test]
    fn ignores_other_schemes() {
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
