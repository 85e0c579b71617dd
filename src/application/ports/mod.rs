pub mod clock;
pub mod user_auth_repository;
