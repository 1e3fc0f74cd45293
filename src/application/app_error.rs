use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("{0}")]
    InvalidId(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("permission denied")]
    PermissionDenied,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("invalid media type: {0}")]
    InvalidMediaType(String),
    #[error("invalid media reference: {0}")]
    InvalidMediaReference(String),
    #[error("invalid theme: {0}")]
    InvalidTheme(String),
    #[error("invalid sort order: {0}")]
    InvalidSortOrder(String),
    #[error("password hashing failed")]
    PasswordHashError,
    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),
    #[error(transparent)]
    JsonRejection(#[from] axum::extract::rejection::JsonRejection),
    #[error(transparent)]
    InvalidHeaderValue(#[from] axum::http::header::InvalidHeaderValue),
}

pub type AppResult<T> = Result<T, AppError>;
