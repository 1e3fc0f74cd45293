use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{self};
use axum::routing::{get, patch, post, put};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use crate::adapter::http::docs::{docs_ui, openapi_json};
use crate::adapter::http::middleware::auth::auth_middleware;
use crate::adapter::http::routes::auth::{login, logout};
use crate::adapter::http::routes::collection::{
    create_collection, delete_collection, get_collection, list_collections, update_collection,
};
use crate::adapter::http::routes::comment::{list_comments, upsert_comment};
use crate::adapter::http::routes::media::{
    create_media_file, create_media_path, delete_media_path, get_media_path, list_media_files, list_media_paths,
    update_media_file,
};
use crate::adapter::http::routes::settings::{get_settings, update_settings};
use crate::adapter::http::routes::user::{get_me, register};
use crate::adapter::http::routes::video_progress::{delete_progress, get_progress, upsert_progress};
use crate::adapter::http::spa::spa_index;
use crate::infra::config::AppConfig;
use crate::infra::state::AppState;

fn build_cors(config: &AppConfig) -> CorsLayer {
    let has_wildcard = config.application.allow_origins.iter().any(|s| s == "*");

    if has_wildcard {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                http::Method::POST,
                http::Method::GET,
                http::Method::PUT,
                http::Method::PATCH,
                http::Method::DELETE,
            ])
            .allow_headers([CONTENT_TYPE, AUTHORIZATION]);
    }
    let origins: Vec<http::HeaderValue> = config
        .application
        .allow_origins
        .iter()
        .filter_map(|s| {
            s.parse::<http::HeaderValue>()
                .map_err(|e| {
                    tracing::warn!("Failed to parse origin '{}': {}", s, e);
                })
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            http::Method::POST,
            http::Method::GET,
            http::Method::PUT,
            http::Method::PATCH,
            http::Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

pub fn auth_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new().route("/login", post(login));

    let protected_routes = Router::new()
        .route("/logout", post(logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}

pub fn user_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new().route("/register", post(register));

    let protected_routes = Router::new()
        .route("/me", get(get_me))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}

pub fn collection_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_collection).get(list_collections))
        .route(
            "/{id}",
            get(get_collection).patch(update_collection).delete(delete_collection),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

pub fn media_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/paths", post(create_media_path).get(list_media_paths))
        .route("/paths/{id}", get(get_media_path).delete(delete_media_path))
        .route("/paths/{id}/files", post(create_media_file).get(list_media_files))
        .route("/files/{id}", patch(update_media_file))
        .route("/files/{id}/comments", put(upsert_comment).get(list_comments))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

pub fn progress_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", put(upsert_progress))
        .route("/{filename}", get(get_progress).delete(delete_progress))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

pub fn settings_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings).patch(update_settings))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_router(state.clone()))
        .nest("/users", user_router(state.clone()))
        .nest("/collections", collection_router(state.clone()))
        .nest("/media", media_router(state.clone()))
        .nest("/progress", progress_router(state.clone()))
        .nest("/settings", settings_router(state.clone()))
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(docs_ui))
}

pub fn create_app(config: &AppConfig, state: AppState) -> Router {
    let cors = build_cors(config);
    let assets = ServeDir::new(&config.spa.dist_dir);
    Router::new()
        .merge(router(state.clone()))
        .nest_service("/assets", assets)
        .fallback(get(spa_index))
        .with_state(state.clone())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<_>| {
                    let request_id = Uuid::now_v7();
                    tracing::info_span!(
                        "http-request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request_id
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
