use axum::extract::Path;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::comment::{CommentListResponse, CommentResponse, UpsertCommentRequest};
use crate::adapter::http::schema::id::IdResponse;
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::comment::{ListCommentsDTO, UpsertCommentDTO};
use crate::application::interactors::comment::{ListCommentsInteractor, UpsertCommentInteractor};

#[utoipa::path(
    put,
    path = "/media/files/{id}/comments",
    tag = "Comments",
    params(("id" = String, Path, description = "Media file id")),
    request_body = UpsertCommentRequest,
    responses(
        (status = 200, description = "Comment created or replaced", body = IdResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 404, description = "Media file not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn upsert_comment(
    auth_user: AuthUser,
    interactor: UpsertCommentInteractor,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<UpsertCommentRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpsertCommentDTO {
        user_id: auth_user.user_id,
        media_file_id: id,
        body: payload.body,
        viewed: payload.viewed,
    };
    let comment_id = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(IdResponse { id: comment_id.id })))
}

#[utoipa::path(
    get,
    path = "/media/files/{id}/comments",
    tag = "Comments",
    params(("id" = String, Path, description = "Media file id")),
    responses(
        (status = 200, description = "Comments for the media file", body = CommentListResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn list_comments(
    _auth_user: AuthUser,
    interactor: ListCommentsInteractor,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = ListCommentsDTO { media_file_id: id };
    let result = interactor.execute(dto).await?;
    let response = CommentListResponse {
        comments: result.comments.into_iter().map(CommentResponse::from).collect(),
    };
    Ok((StatusCode::OK, Json(response)))
}
