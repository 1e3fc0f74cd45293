use std::sync::Arc;

use axum::{extract::State, response::Html, Json};
use utoipa::{
    openapi::{
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        OpenApi as OpenApiDoc,
    },
    OpenApi,
};

use crate::infra::config::AppConfig;

use crate::adapter::http::{
    app_error_impl::ErrorResponse,
    routes::{auth, collection, comment, media, settings, user, video_progress},
    schema::{
        auth::{LoginRequest, MessageResponse},
        collection::{CollectionListResponse, CollectionResponse, CreateCollectionRequest, UpdateCollectionRequest},
        comment::{CommentListResponse, CommentResponse, UpsertCommentRequest},
        id::IdResponse,
        media::{
            CreateMediaFileRequest, CreateMediaPathRequest, MediaFileListResponse, MediaFileResponse,
            MediaPathListResponse, MediaPathResponse, UpdateMediaFileRequest,
        },
        settings::{SettingsResponse, UpdateSettingsRequest},
        user::{CreateUserRequest, GetUserResponse},
        video_progress::{ProgressResponse, UpsertProgressRequest},
        ValidPassword,
    },
};

// The session cookie name comes from the config, so the security scheme is
// attached when the document is served rather than via a static modifier.
fn add_cookie_security_scheme(openapi: &mut OpenApiDoc, cookie_name: &str) {
    if let Some(components) = openapi.components.as_mut() {
        components.add_security_scheme(
            "cookieAuth",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(cookie_name))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::logout,
        user::register,
        user::get_me,
        collection::create_collection,
        collection::list_collections,
        collection::get_collection,
        collection::update_collection,
        collection::delete_collection,
        media::create_media_path,
        media::list_media_paths,
        media::get_media_path,
        media::delete_media_path,
        media::create_media_file,
        media::list_media_files,
        media::update_media_file,
        comment::upsert_comment,
        comment::list_comments,
        video_progress::upsert_progress,
        video_progress::get_progress,
        video_progress::delete_progress,
        settings::get_settings,
        settings::update_settings
    ),
    components(
        schemas(
            ErrorResponse,
            LoginRequest,
            MessageResponse,
            IdResponse,
            CreateUserRequest,
            GetUserResponse,
            ValidPassword,
            CreateCollectionRequest,
            UpdateCollectionRequest,
            CollectionResponse,
            CollectionListResponse,
            CreateMediaPathRequest,
            MediaPathResponse,
            MediaPathListResponse,
            CreateMediaFileRequest,
            UpdateMediaFileRequest,
            MediaFileResponse,
            MediaFileListResponse,
            UpsertCommentRequest,
            CommentResponse,
            CommentListResponse,
            UpsertProgressRequest,
            ProgressResponse,
            UpdateSettingsRequest,
            SettingsResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json(State(config): State<Arc<AppConfig>>) -> Json<OpenApiDoc> {
    let mut doc = ApiDoc::openapi();
    add_cookie_security_scheme(&mut doc, &config.session.cookie_name);
    Json(doc)
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>Media library API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}

#[cfg(test)]
mod tests {
    use utoipa::openapi::security::{ApiKey, SecurityScheme};
    use utoipa::OpenApi;

    use super::{add_cookie_security_scheme, ApiDoc};

    #[test]
    fn test_security_scheme_carries_configured_cookie_name() {
        let mut doc = ApiDoc::openapi();
        add_cookie_security_scheme(&mut doc, "sid");

        let components = doc.components.expect("generated document has components");
        match components.security_schemes.get("cookieAuth") {
            Some(SecurityScheme::ApiKey(ApiKey::Cookie(value))) => assert_eq!(value.name, "sid"),
            _ => panic!("cookieAuth scheme missing or not a cookie"),
        }
    }
}
