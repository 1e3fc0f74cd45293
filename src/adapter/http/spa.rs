use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::warn;

use crate::infra::config::AppConfig;

/// Fallback handler for the single-page frontend. Every route the API router
/// does not claim gets the built `index.html`; client-side routing takes it
/// from there.
pub async fn spa_index(State(config): State<Arc<AppConfig>>) -> Response {
    let index_path = Path::new(&config.spa.dist_dir).join(&config.spa.index_file);
    match tokio::fs::read_to_string(&index_path).await {
        Ok(contents) => Html(contents).into_response(),
        Err(e) => {
            warn!("Failed to read SPA index at {}: {}", index_path.display(), e);
            (
                StatusCode::NOT_FOUND,
                "Frontend build not found. Run the frontend build and point `spa.dist_dir` at its output.",
            )
                .into_response()
        }
    }
}
