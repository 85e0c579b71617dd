use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::UserEntity;

#[async_trait]
pub trait UserAuthRepository: Send + Sync {
    /// Fetches the credential record matching `email`. Zero rows is a
    /// `DomainError::RecordNotFound`, not an empty result.
    async fn find_by_email(&self, email: &str) -> Result<UserEntity, DomainError>;
}
