#![cfg(test)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use rstest::rstest;
use serde_json::json;
use tower::ServiceExt;

use crate::infra::app::create_app;
use crate::infra::state::AppState;
use crate::tests::fixtures::{init_test_app_state, test_database_url};
use crate::tests::helpers::{delete_user, unique_credentials};

// Public routes sit outside the guard layer: a request without a session
// cookie is forwarded untouched and leaves no session state behind, while
// the same cookie-less request against a guarded route is rejected.
#[rstest]
#[tokio::test]
async fn test_public_route_skips_session_tracking(#[future] init_test_app_state: anyhow::Result<AppState>) {
    if test_database_url().is_none() {
        eprintln!("skipping: TEST_DATABASE_URL is not set");
        return;
    }
    let state = init_test_app_state.await.expect("test app state");
    let app = create_app(&state.config, state.clone());

    let (username, email) = unique_credentials();
    let body = json!({
        "username": username,
        "email": email,
        "password": "Password123!",
    });
    let request = Request::builder()
        .method("POST")
        .uri("/users/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let user_id: uuid::Uuid = payload["id"].as_str().expect("id in response").parse().unwrap();

    let sessions: i64 = sqlx::query_scalar("SELECT count(*) FROM sessions WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&state.pool)
        .await
        .expect("count sessions");
    assert_eq!(sessions, 0, "registering must not create or touch session rows");

    let request = Request::builder()
        .uri("/collections")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    delete_user(&state.pool, user_id).await;
}

// A cookie whose value is not a session id gets the same logged-out
// response as an unknown session, not a client error.
#[rstest]
#[tokio::test]
async fn test_garbage_session_cookie_is_logged_out(#[future] init_test_app_state: anyhow::Result<AppState>) {
    if test_database_url().is_none() {
        eprintln!("skipping: TEST_DATABASE_URL is not set");
        return;
    }
    let state = init_test_app_state.await.expect("test app state");
    let cookie_name = state.config.session.cookie_name.clone();
    let app = create_app(&state.config, state.clone());

    let request = Request::builder()
        .uri("/collections")
        .header(header::COOKIE, format!("{}=garbage", cookie_name))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
