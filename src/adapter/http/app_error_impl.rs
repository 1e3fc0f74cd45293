use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::application::app_error::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidId(msg) => (StatusCode::BAD_REQUEST, Some(msg.clone())),
            AppError::InvalidMediaType(value) => (
                StatusCode::BAD_REQUEST,
                Some(format!("Unknown media type `{value}`")),
            ),
            AppError::InvalidMediaReference(msg) => (StatusCode::BAD_REQUEST, Some(msg.clone())),
            AppError::InvalidTheme(value) => {
                (StatusCode::BAD_REQUEST, Some(format!("Unknown theme `{value}`")))
            }
            AppError::InvalidSortOrder(value) => (
                StatusCode::BAD_REQUEST,
                Some(format!("Unknown sort order `{value}`")),
            ),
            AppError::JsonRejection(rejection) => (StatusCode::BAD_REQUEST, Some(rejection.body_text())),
            AppError::ValidationError(errors) => (StatusCode::UNPROCESSABLE_ENTITY, Some(errors.to_string())),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Some("Invalid Credentials".to_string()),
            ),
            AppError::PermissionDenied => (StatusCode::FORBIDDEN, Some("Permission denied".to_string())),
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, Some(format!("{what} not found"))),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, Some(msg.clone())),
            AppError::DatabaseError(_) | AppError::PasswordHashError | AppError::InvalidHeaderValue(_) => {
                error!("Internal error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let message = match message {
            Some(msg) => msg,
            None => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}
