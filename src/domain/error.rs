use thiserror::Error;

/// Closed taxonomy of domain failures. Kinds carry a message and nothing
/// else; HTTP semantics are attached in exactly one place
/// (`presentation::http::error`).
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    RecordNotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    BadRequest(String),
    /// Anything the taxonomy does not classify. Logged server-side and
    /// surfaced to clients as a generic 500.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(err.into())
    }
}
