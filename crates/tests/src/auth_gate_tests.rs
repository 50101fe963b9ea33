use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use server::auth::middleware::auth_gate;
use server::backend::BackendClient;
use server::state::AppState;
use shared_types::User;
use tower::ServiceExt;

use crate::common::{self, ADMIN_TOKEN};

/// Page router stand-in: protected handlers echo the user the gate resolved.
fn gated_app(backend: BackendClient) -> Router {
    let state = AppState { backend };
    Router::new()
        .route("/", get(|| async { "home" }))
        .route(
            "/subjects/{id}",
            get(|Extension(user): Extension<User>| async move { format!("hello {}", user.username) }),
        )
        .route("/health", get(|| async { "ok" }))
        .layer(middleware::from_fn_with_state(state, auth_gate))
}

fn location(response: &axum::response::Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn test_missing_cookie_redirects_home_without_backend_call() {
    let backend = common::mock_backend().await;
    let app = gated_app(backend.client());

    let response = common::get_page(&app, "/subjects/1", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/"));
    assert!(backend.hits.all().is_empty());
}

#[tokio::test]
async fn test_bearer_header_without_cookie_redirects_home() {
    let backend = common::mock_backend().await;
    let app = gated_app(backend.client());

    let req = Request::builder()
        .method("GET")
        .uri("/subjects/1")
        .header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/"));
    assert!(backend.hits.all().is_empty());
}

#[tokio::test]
async fn test_rejected_token_redirects_home() {
    let backend = common::mock_backend().await;
    let app = gated_app(backend.client());

    let response = common::get_page(&app, "/subjects/1", Some("expired")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/"));
    assert_eq!(backend.hits.all(), vec!["GET /users/me".to_string()]);
}

#[tokio::test]
async fn test_unreachable_backend_redirects_home() {
    let app = gated_app(common::unreachable_client());

    let response = common::get_page(&app, "/subjects/1", Some(ADMIN_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/"));
}

#[tokio::test]
async fn test_valid_session_reaches_page_with_user() {
    let backend = common::mock_backend().await;
    let app = gated_app(backend.client());

    let response = common::get_page(&app, "/subjects/1", Some(ADMIN_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_text(response).await, "hello root");
    assert_eq!(backend.hits.count("GET /users/me"), 1);
}

#[tokio::test]
async fn test_unprotected_paths_skip_the_gate() {
    let backend = common::mock_backend().await;
    let app = gated_app(backend.client());

    let home = common::get_page(&app, "/", None).await;
    assert_eq!(home.status(), StatusCode::OK);

    let health = common::get_page(&app, "/health", None).await;
    assert_eq!(health.status(), StatusCode::OK);

    assert!(backend.hits.all().is_empty());
}
