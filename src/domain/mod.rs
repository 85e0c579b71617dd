pub mod error;
pub mod user;
