use axum::extract::{Path, Query};
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::id::IdResponse;
use crate::adapter::http::schema::media::{
    CreateMediaFileRequest, CreateMediaPathRequest, MediaFileListResponse, MediaFileResponse, MediaPathListResponse,
    MediaPathResponse, MediaPathsQuery, UpdateMediaFileRequest,
};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::dto::media::{
    CreateMediaFileDTO, CreateMediaPathDTO, DeleteMediaPathDTO, ListMediaPathsDTO, UpdateMediaFileDTO,
};
use crate::application::interactors::media::{
    CreateMediaFileInteractor, CreateMediaPathInteractor, DeleteMediaPathInteractor, GetMediaPathInteractor,
    ListMediaFilesInteractor, ListMediaPathsInteractor, UpdateMediaFileInteractor,
};

#[utoipa::path(
    post,
    path = "/media/paths",
    tag = "Media",
    request_body = CreateMediaPathRequest,
    responses(
        (status = 200, description = "Media path registered (idempotent on path)", body = IdResponse),
        (status = 400, description = "Unknown media type or mismatched reference", body = ErrorResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn create_media_path(
    auth_user: AuthUser,
    interactor: CreateMediaPathInteractor,
    ValidJson(payload): ValidJson<CreateMediaPathRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateMediaPathDTO {
        actor_id: auth_user.user_id,
        path: payload.path,
        media_type: payload.media_type,
        media_name: payload.media_name,
    };
    let media_path_id = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(IdResponse { id: media_path_id.id })))
}

#[utoipa::path(
    get,
    path = "/media/paths",
    tag = "Media",
    params(MediaPathsQuery),
    responses(
        (status = 200, description = "Paginated media path listing", body = MediaPathListResponse),
        (status = 400, description = "Unknown media type filter", body = ErrorResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn list_media_paths(
    _auth_user: AuthUser,
    interactor: ListMediaPathsInteractor,
    Query(query): Query<MediaPathsQuery>,
) -> AppResult<impl IntoResponse> {
    let dto = ListMediaPathsDTO {
        page: query.page(),
        per_page: query.per_page(),
        media_type: query.media_type,
    };
    let result = interactor.execute(dto).await?;
    let response = MediaPathListResponse {
        media_paths: result.media_paths.into_iter().map(MediaPathResponse::from).collect(),
        total: result.total,
    };
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/media/paths/{id}",
    tag = "Media",
    params(("id" = String, Path, description = "Media path id")),
    responses(
        (status = 200, description = "Media path", body = MediaPathResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 404, description = "Media path not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn get_media_path(
    _auth_user: AuthUser,
    interactor: GetMediaPathInteractor,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let media_path = interactor.execute(IdDTO { id }).await?;
    Ok((StatusCode::OK, Json(MediaPathResponse::from(media_path))))
}

#[utoipa::path(
    delete,
    path = "/media/paths/{id}",
    tag = "Media",
    params(("id" = String, Path, description = "Media path id")),
    responses(
        (status = 204, description = "Media path deleted"),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Media path not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn delete_media_path(
    auth_user: AuthUser,
    interactor: DeleteMediaPathInteractor,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = DeleteMediaPathDTO {
        actor_id: auth_user.user_id,
        media_path_id: id,
    };
    interactor.execute(dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/media/paths/{id}/files",
    tag = "Media",
    params(("id" = String, Path, description = "Media path id")),
    request_body = CreateMediaFileRequest,
    responses(
        (status = 200, description = "Media file registered", body = IdResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Media path not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn create_media_file(
    auth_user: AuthUser,
    interactor: CreateMediaFileInteractor,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<CreateMediaFileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateMediaFileDTO {
        actor_id: auth_user.user_id,
        media_path_id: id,
        filename: payload.filename,
        display_name: payload.display_name,
        season: payload.season,
        episode: payload.episode,
    };
    let media_file_id = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(IdResponse { id: media_file_id.id })))
}

#[utoipa::path(
    get,
    path = "/media/paths/{id}/files",
    tag = "Media",
    params(("id" = String, Path, description = "Media path id")),
    responses(
        (status = 200, description = "Files under the media path", body = MediaFileListResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 404, description = "Media path not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn list_media_files(
    _auth_user: AuthUser,
    interactor: ListMediaFilesInteractor,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let result = interactor.execute(IdDTO { id }).await?;
    let response = MediaFileListResponse {
        media_files: result.media_files.into_iter().map(MediaFileResponse::from).collect(),
    };
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/media/files/{id}",
    tag = "Media",
    params(("id" = String, Path, description = "Media file id")),
    request_body = UpdateMediaFileRequest,
    responses(
        (status = 200, description = "Media file updated", body = IdResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Media file not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn update_media_file(
    auth_user: AuthUser,
    interactor: UpdateMediaFileInteractor,
    Path(id): Path<String>,
    Json(payload): Json<UpdateMediaFileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpdateMediaFileDTO {
        actor_id: auth_user.user_id,
        media_file_id: id,
        display_name: payload.display_name,
        season: payload.season,
        episode: payload.episode,
        skip: payload.skip,
    };
    let media_file_id = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(IdResponse { id: media_file_id.id })))
}
