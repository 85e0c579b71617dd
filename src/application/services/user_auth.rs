use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::user_auth_repository::UserAuthRepository;
use crate::bootstrap::container::Component;
use crate::bootstrap::logger::ContextLogger;
use crate::domain::error::DomainError;
use crate::domain::user::UserDto;

/// Signed token pair returned on login. Neither token is persisted
/// server-side.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Always `Bearer`.
    #[serde(rename = "type")]
    pub token_type: String,
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginOutcome {
    pub user: UserDto,
    pub token: TokenPair,
}

/// Payload of the short-lived access token: the full sanitized projection
/// plus expiry.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(flatten)]
    pub user: UserDto,
    pub exp: usize,
}

/// The refresh token carries only the user id.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub id: i64,
    pub exp: usize,
}

#[async_trait]
pub trait UserAuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, DomainError>;
}

pub struct JwtUserAuthService {
    logger: ContextLogger,
    user_repo: Arc<dyn UserAuthRepository>,
    secret_key: String,
    access_token_ttl_secs: i64,
    refresh_token_ttl_secs: i64,
}

impl JwtUserAuthService {
    pub fn new(
        logger: ContextLogger,
        user_repo: Arc<dyn UserAuthRepository>,
        secret_key: String,
        access_token_ttl_secs: i64,
        refresh_token_ttl_secs: i64,
    ) -> Self {
        Self {
            logger,
            user_repo,
            secret_key,
            access_token_ttl_secs,
            refresh_token_ttl_secs,
        }
    }

    fn sign_access_token(&self, user: &UserDto, now_secs: i64) -> Result<String, DomainError> {
        let claims = AccessClaims {
            user: user.clone(),
            exp: (now_secs + self.access_token_ttl_secs) as usize,
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret_key.as_bytes()),
        )
        .map_err(|e| DomainError::Internal(e.into()))
    }

    fn sign_refresh_token(&self, id: i64, now_secs: i64) -> Result<String, DomainError> {
        let claims = RefreshClaims {
            id,
            exp: (now_secs + self.refresh_token_ttl_secs) as usize,
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret_key.as_bytes()),
        )
        .map_err(|e| DomainError::Internal(e.into()))
    }
}

impl Component for JwtUserAuthService {
    const NAME: &'static str = "JwtUserAuthService";
}

#[async_trait]
impl UserAuthService for JwtUserAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, DomainError> {
        self.logger
            .method("login")
            .info(&format!("Login with email: {email}"));

        let user = self.user_repo.find_by_email(email).await?;
        let dto = UserDto::from(&user);

        if !verify_password(password, &user.password)? {
            return Err(DomainError::Unauthorized(format!(
                "Invalid password for user: {email}"
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let token = self.sign_access_token(&dto, now)?;
        let refresh_token = self.sign_refresh_token(user.id, now)?;

        Ok(LoginOutcome {
            user: dto,
            token: TokenPair {
                token_type: "Bearer".into(),
                token,
                refresh_token,
            },
        })
    }
}

/// Constant-time comparison of a presented password against a stored
/// PHC-format hash.
fn verify_password(presented: &str, stored_hash: &str) -> Result<bool, DomainError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        DomainError::Internal(anyhow::anyhow!("stored password hash is not valid PHC: {e}"))
    })?;
    Ok(Argon2::default()
        .verify_password(presented.as_bytes(), &parsed)
        .is_ok())
}
