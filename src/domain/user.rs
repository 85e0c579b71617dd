use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted credential record. Owned by the repository layer; read-only in
/// this service.
#[derive(Debug, Clone)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    /// PHC-format password hash.
    pub password: String,
    pub salt: String,
}

/// Sanitized projection of a `UserEntity`. Constructed fresh per request and
/// never carries the password hash or salt.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&UserEntity> for UserDto {
    fn from(user: &UserEntity) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            active: user.active,
            display_name: user.display_name.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}
