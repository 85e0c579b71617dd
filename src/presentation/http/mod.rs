pub mod auth;
pub mod envelope;
pub mod error;
pub mod health;
pub mod service_info;
