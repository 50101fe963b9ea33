use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind, RoleKind};

use crate::common::{self, ADMIN_TOKEN, STUDENT_TOKEN};

#[tokio::test]
async fn test_current_user_resolves_role() {
    let backend = common::mock_backend().await;
    let user = backend.client().current_user(STUDENT_TOKEN).await.unwrap();
    assert_eq!(user.id, "2");
    assert_eq!(user.username, "pupil");
    assert_eq!(user.role_kind(), RoleKind::Student);
}

#[tokio::test]
async fn test_current_user_rejects_unknown_token() {
    let backend = common::mock_backend().await;
    let err = backend.client().current_user("forged").await.unwrap_err();
    let app_err: AppError = err.into();
    assert_eq!(app_err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_list_subjects_normalizes_ids_and_keeps_article_order() {
    let backend = common::mock_backend().await;
    let subjects = backend.client().list_subjects(ADMIN_TOKEN).await.unwrap();

    let ids: Vec<&str> = subjects.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let articles: Vec<&str> = subjects[0].articles.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(articles, vec!["Optics", "Waves"]);
    assert_eq!(subjects[0].articles[0].created_at, "2022-01-03T14:05:00.000Z");
    assert!(subjects[1].articles.is_empty());
}

#[tokio::test]
async fn test_list_subjects_sends_bearer_token() {
    let backend = common::mock_backend().await;
    let err = backend.client().list_subjects("").await.unwrap_err();
    assert_eq!(err.status(), Some(axum::http::StatusCode::UNAUTHORIZED));
    assert_eq!(backend.hits.count("GET /subjects"), 1);
}

#[tokio::test]
async fn test_unreachable_backend_is_a_backend_error() {
    let err = common::unreachable_client()
        .current_user(ADMIN_TOKEN)
        .await
        .unwrap_err();
    assert!(err.status().is_none());
    let app_err: AppError = err.into();
    assert_eq!(app_err.kind, AppErrorKind::Backend);
}
