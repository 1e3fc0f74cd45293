use axum::extract::Path;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::video_progress::{ProgressResponse, UpsertProgressRequest};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::video_progress::{DeleteProgressDTO, GetProgressDTO, UpsertProgressDTO};
use crate::application::interactors::video_progress::{
    DeleteProgressInteractor, GetProgressInteractor, UpsertProgressInteractor,
};

#[utoipa::path(
    put,
    path = "/progress",
    tag = "Progress",
    request_body = UpsertProgressRequest,
    responses(
        (status = 200, description = "Playback position saved", body = ProgressResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn upsert_progress(
    auth_user: AuthUser,
    interactor: UpsertProgressInteractor,
    ValidJson(payload): ValidJson<UpsertProgressRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpsertProgressDTO {
        user_id: auth_user.user_id,
        filename: payload.filename,
        offset: payload.offset,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProgressResponse::from(result.progress))))
}

#[utoipa::path(
    get,
    path = "/progress/{filename}",
    tag = "Progress",
    params(("filename" = String, Path, description = "Media filename")),
    responses(
        (status = 200, description = "Saved playback position", body = ProgressResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 404, description = "No saved position for this file", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn get_progress(
    auth_user: AuthUser,
    interactor: GetProgressInteractor,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = GetProgressDTO {
        user_id: auth_user.user_id,
        filename,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProgressResponse::from(result.progress))))
}

#[utoipa::path(
    delete,
    path = "/progress/{filename}",
    tag = "Progress",
    params(("filename" = String, Path, description = "Media filename")),
    responses(
        (status = 204, description = "Saved position discarded"),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn delete_progress(
    auth_user: AuthUser,
    interactor: DeleteProgressInteractor,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = DeleteProgressDTO {
        user_id: auth_user.user_id,
        filename,
    };
    interactor.execute(dto).await?;
    Ok(StatusCode::NO_CONTENT)
}
