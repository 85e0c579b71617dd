pub mod service_info;
pub mod user_auth;
