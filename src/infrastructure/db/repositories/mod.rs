pub mod user_auth_repository_sqlx;
