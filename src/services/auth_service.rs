//! Authentication service - signup, login, and bearer token handling.
//!
//! Password hashing lives in the domain Password value object; this
//! service owns the JWT lifecycle and the account lookups around it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{Config, BEARER_TOKEN_PREFIX};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::Repositories;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Successful login result: the account plus its freshly issued token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user with the default role
    async fn signup(&self, username: String, password: String) -> AppResult<User>;

    /// Verify credentials and issue a JWT
    async fn login(&self, username: String, password: String) -> AppResult<AuthSession>;

    /// Resolve the caller behind a raw Authorization header value.
    ///
    /// Accepts the bare token or a `Bearer `-prefixed one; an empty,
    /// invalid, or expired value fails authentication.
    async fn current_user(&self, auth_header: &str) -> AppResult<User>;

    /// Verify a JWT and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate a signed token for a user (shared helper)
fn generate_token(user: &User, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(token)
}

/// Verify signature and expiry, extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized)?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService over the persistence facade.
pub struct Authenticator<R: Repositories> {
    repos: Arc<R>,
    config: Config,
}

impl<R: Repositories> Authenticator<R> {
    /// Create new auth service instance
    pub fn new(repos: Arc<R>, config: Config) -> Self {
        Self { repos, config }
    }
}

#[async_trait]
impl<R: Repositories> AuthService for Authenticator<R> {
    async fn signup(&self, username: String, password: String) -> AppResult<User> {
        // The unique index on username backs this check against races
        if self
            .repos
            .users()
            .find_by_username(&username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        self.repos.users().create(username, password_hash).await
    }

    async fn login(&self, username: String, password: String) -> AppResult<AuthSession> {
        let user = self
            .repos
            .users()
            .find_by_username(&username)
            .await?
            .ok_or_not_found("User")?;

        let stored = Password::from_hash(user.password_hash.clone());
        if !stored.verify(&password) {
            return Err(AppError::InvalidCredentials);
        }

        let token = generate_token(&user, &self.config)?;
        Ok(AuthSession { user, token })
    }

    async fn current_user(&self, auth_header: &str) -> AppResult<User> {
        let token = auth_header
            .strip_prefix(BEARER_TOKEN_PREFIX)
            .unwrap_or(auth_header);
        if token.is_empty() {
            return Err(AppError::Unauthorized);
        }

        let claims = verify_token_internal(token, &self.config)?;
        self.repos
            .users()
            .find_by_id(claims.sub)
            .await?
            .ok_or_not_found("User")
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}
