use axum::extract::{Path, Query};
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::collection::{
    CollectionListResponse, CollectionResponse, CreateCollectionRequest, UpdateCollectionRequest,
};
use crate::adapter::http::schema::id::IdResponse;
use crate::adapter::http::schema::pagination::PaginationQuery;
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::collection::{
    CreateCollectionDTO, DeleteCollectionDTO, ListCollectionsDTO, UpdateCollectionDTO,
};
use crate::application::dto::id::IdDTO;
use crate::application::interactors::collection::{
    CreateCollectionInteractor, DeleteCollectionInteractor, GetCollectionInteractor, ListCollectionsInteractor,
    UpdateCollectionInteractor,
};

#[utoipa::path(
    post,
    path = "/collections",
    tag = "Collections",
    request_body = CreateCollectionRequest,
    responses(
        (status = 200, description = "Collection created", body = IdResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 409, description = "Collection name already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn create_collection(
    auth_user: AuthUser,
    interactor: CreateCollectionInteractor,
    ValidJson(payload): ValidJson<CreateCollectionRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateCollectionDTO {
        actor_id: auth_user.user_id,
        name: payload.name,
    };
    let collection_id = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(IdResponse { id: collection_id.id })))
}

#[utoipa::path(
    get,
    path = "/collections",
    tag = "Collections",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated collection listing", body = CollectionListResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn list_collections(
    _auth_user: AuthUser,
    interactor: ListCollectionsInteractor,
    Query(query): Query<PaginationQuery>,
) -> AppResult<impl IntoResponse> {
    let dto = ListCollectionsDTO {
        page: query.page(),
        per_page: query.per_page(),
    };
    let result = interactor.execute(dto).await?;
    let response = CollectionListResponse {
        collections: result.collections.into_iter().map(CollectionResponse::from).collect(),
        total: result.total,
    };
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/collections/{id}",
    tag = "Collections",
    params(("id" = String, Path, description = "Collection id")),
    responses(
        (status = 200, description = "Collection", body = CollectionResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 404, description = "Collection not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn get_collection(
    _auth_user: AuthUser,
    interactor: GetCollectionInteractor,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let collection = interactor.execute(IdDTO { id }).await?;
    Ok((StatusCode::OK, Json(CollectionResponse::from(collection))))
}

#[utoipa::path(
    patch,
    path = "/collections/{id}",
    tag = "Collections",
    params(("id" = String, Path, description = "Collection id")),
    request_body = UpdateCollectionRequest,
    responses(
        (status = 200, description = "Collection renamed", body = IdResponse),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Collection not found", body = ErrorResponse),
        (status = 409, description = "Collection name already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn update_collection(
    auth_user: AuthUser,
    interactor: UpdateCollectionInteractor,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<UpdateCollectionRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpdateCollectionDTO {
        actor_id: auth_user.user_id,
        collection_id: id,
        name: payload.name,
    };
    let collection_id = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(IdResponse { id: collection_id.id })))
}

#[utoipa::path(
    delete,
    path = "/collections/{id}",
    tag = "Collections",
    params(("id" = String, Path, description = "Collection id")),
    responses(
        (status = 204, description = "Collection deleted"),
        (status = 401, description = "Missing, idle or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Collection not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookieAuth" = []))
)]
pub async fn delete_collection(
    auth_user: AuthUser,
    interactor: DeleteCollectionInteractor,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = DeleteCollectionDTO {
        actor_id: auth_user.user_id,
        collection_id: id,
    };
    interactor.execute(dto).await?;
    Ok(StatusCode::NO_CONTENT)
}
