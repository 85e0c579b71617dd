use async_trait::async_trait;
use sqlx::{AnyPool, Row};

use crate::application::ports::user_auth_repository::UserAuthRepository;
use crate::bootstrap::config::DatabaseDriver;
use crate::bootstrap::container::Component;
use crate::bootstrap::logger::ContextLogger;
use crate::domain::error::DomainError;
use crate::domain::user::UserEntity;

/// Explicit field -> column map. The SELECT projection is built from this
/// table, so a schema rename has to be reflected here instead of silently
/// drifting from the entity shape.
const USER_FIELD_COLUMNS: &[(&str, &str)] = &[
    ("id", "id"),
    ("username", "username"),
    ("email", "email"),
    ("active", "active"),
    ("display_name", "display_name"),
    ("first_name", "first_name"),
    ("last_name", "last_name"),
    ("password", "password"),
    ("salt", "salt"),
];

pub struct SqlxUserAuthRepository {
    logger: ContextLogger,
    pool: AnyPool,
    driver: DatabaseDriver,
}

impl SqlxUserAuthRepository {
    pub fn new(logger: ContextLogger, pool: AnyPool, driver: DatabaseDriver) -> Self {
        Self {
            logger,
            pool,
            driver,
        }
    }

    fn select_by_email_sql(driver: DatabaseDriver) -> String {
        let columns = USER_FIELD_COLUMNS
            .iter()
            .map(|(_, column)| *column)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholder = match driver {
            DatabaseDriver::Postgres => "$1",
            DatabaseDriver::Mysql => "?",
        };
        format!("SELECT {columns} FROM users WHERE email = {placeholder}")
    }
}

impl Component for SqlxUserAuthRepository {
    const NAME: &'static str = "SqlxUserAuthRepository";
}

#[async_trait]
impl UserAuthRepository for SqlxUserAuthRepository {
    async fn find_by_email(&self, email: &str) -> Result<UserEntity, DomainError> {
        let query = Self::select_by_email_sql(self.driver);
        self.logger.method("find_by_email").debug(&query);

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                DomainError::RecordNotFound(format!("User with email {email} is not found"))
            })?;

        Ok(UserEntity {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            active: row.try_get("active")?,
            display_name: row.try_get("display_name")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            password: row.try_get("password")?,
            salt: row.try_get("salt")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_covers_every_entity_field() {
        let sql = SqlxUserAuthRepository::select_by_email_sql(DatabaseDriver::Postgres);
        assert_eq!(
            sql,
            "SELECT id, username, email, active, display_name, first_name, last_name, \
             password, salt FROM users WHERE email = $1"
        );
    }

    #[test]
    fn placeholder_style_follows_the_driver() {
        let sql = SqlxUserAuthRepository::select_by_email_sql(DatabaseDriver::Mysql);
        assert!(sql.ends_with("FROM users WHERE email = ?"));
    }
}
