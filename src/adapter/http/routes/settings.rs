use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::settings::{SettingsResponse, UpdateSettingsRequest};
use crate::application::app_error::AppResult;
use crate::application::dto::user_settings::{GetSettingsDTO, UpdateSettingsDTO};
use crate::application::interactors::user_settings::{GetSettingsInteractor, UpdateSettingsInteractor};

#[utoipa::path(
    get,
    path = "/settings",
    tag = "Settings",
    responses(
        (status = 200, description = "Viewer settings (defaults on first read)", body = SettingsResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn get_settings(
    auth_user: AuthUser,
    interactor: GetSettingsInteractor,
) -> AppResult<impl IntoResponse> {
    let dto = GetSettingsDTO {
        user_id: auth_user.user_id,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(SettingsResponse::from(result.settings))))
}

#[utoipa::path(
    patch,
    path = "/settings",
    tag = "Settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Updated viewer settings", body = SettingsResponse),
        (status = 400, description = "Unknown theme or sort order", body = ErrorResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn update_settings(
    auth_user: AuthUser,
    interactor: UpdateSettingsInteractor,
    Json(payload): Json<UpdateSettingsRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpdateSettingsDTO {
        user_id: auth_user.user_id,
        theme: payload.theme,
        default_sort: payload.default_sort,
        binge_mode: payload.binge_mode,
        jump_to_last_watched: payload.jump_to_last_watched,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(SettingsResponse::from(result.settings))))
}
