use axum::http::StatusCode;
use server::health::{health_router, HealthResponse};
use server::state::AppState;

use crate::common;

#[tokio::test]
async fn test_health_reports_reachable_backend() {
    let backend = common::mock_backend().await;
    let app = health_router(AppState {
        backend: backend.client(),
    });

    let response = common::get_page(&app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: HealthResponse = serde_json::from_str(&common::body_text(response).await).unwrap();
    assert_eq!(body.status, "ok");
    assert_eq!(body.backend, "reachable");
}

#[tokio::test]
async fn test_health_is_ok_even_when_backend_is_down() {
    let app = health_router(AppState {
        backend: common::unreachable_client(),
    });

    let response = common::get_page(&app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: HealthResponse = serde_json::from_str(&common::body_text(response).await).unwrap();
    assert!(body.backend.starts_with("error:"));
}
