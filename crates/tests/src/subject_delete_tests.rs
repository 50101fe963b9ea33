use shared_types::{
    run_delete, AppError, AppErrorKind, DeleteOutcome, DeleteState, DeleteTarget, RoleKind,
    SubjectStore,
};

use crate::common::{self, ADMIN_TOKEN};

#[tokio::test]
async fn test_delete_issues_exactly_one_request() {
    let backend = common::mock_backend().await;
    backend
        .client()
        .delete_subject(ADMIN_TOKEN, "1")
        .await
        .unwrap();
    assert_eq!(backend.hits.all(), vec!["DELETE /subjects/1".to_string()]);
}

/// Page-side state the delete flow mutates.
#[derive(Default)]
struct Page {
    state: DeleteState,
    store: SubjectStore,
}

impl DeleteTarget for Page {
    fn update<R>(&mut self, f: impl FnOnce(&mut DeleteState, &mut SubjectStore) -> R) -> R {
        f(&mut self.state, &mut self.store)
    }
}

#[tokio::test]
async fn test_delete_flow_removes_subject_after_backend_confirms() {
    let backend = common::mock_backend().await;
    let client = backend.client();

    let mut page = Page::default();
    assert!(page.store.begin_hydration());
    page.store
        .finish_hydration(client.list_subjects(ADMIN_TOKEN).await.unwrap());
    assert!(page.store.find("1").is_some());

    let outcome = run_delete(&mut page, RoleKind::Administrator, "1", |id| {
        let client = &client;
        async move { client.delete_subject(ADMIN_TOKEN, &id).await }
    })
    .await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(outcome.navigates_away());
    assert!(page.store.find("1").is_none());
    assert_eq!(page.store.subjects().len(), 1);
    assert_eq!(page.state, DeleteState::Deleted);
    assert_eq!(
        backend.hits.all(),
        vec!["GET /subjects".to_string(), "DELETE /subjects/1".to_string()]
    );
}

#[tokio::test]
async fn test_failed_delete_flow_leaves_store_untouched() {
    let backend = common::mock_backend().await;
    let client = backend.client();

    let mut page = Page::default();
    page.store
        .set_subjects(client.list_subjects(ADMIN_TOKEN).await.unwrap());

    let outcome = run_delete(&mut page, RoleKind::Administrator, "broken", |id| {
        let client = &client;
        async move { client.delete_subject(ADMIN_TOKEN, &id).await }
    })
    .await;

    assert!(matches!(outcome, DeleteOutcome::Failed(_)));
    assert!(!outcome.navigates_away());
    assert_eq!(page.store.subjects().len(), 2);
    assert!(page.state.error().is_some());
    assert!(!page.state.is_busy());
}

#[tokio::test]
async fn test_delete_flow_for_student_sends_nothing() {
    let backend = common::mock_backend().await;
    let client = backend.client();

    let mut page = Page::default();
    let outcome = run_delete(&mut page, RoleKind::Student, "1", |id| {
        let client = &client;
        async move { client.delete_subject(ADMIN_TOKEN, &id).await }
    })
    .await;

    assert_eq!(outcome, DeleteOutcome::NotAllowed);
    assert!(backend.hits.all().is_empty());
}

#[tokio::test]
async fn test_delete_missing_subject_is_not_found() {
    let backend = common::mock_backend().await;
    let err = backend
        .client()
        .delete_subject(ADMIN_TOKEN, "missing")
        .await
        .unwrap_err();
    let app_err: AppError = err.into();
    assert_eq!(app_err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_encodes_the_id_segment() {
    let backend = common::mock_backend().await;
    backend
        .client()
        .delete_subject(ADMIN_TOKEN, "a b")
        .await
        .unwrap();
    assert_eq!(backend.hits.all(), vec!["DELETE /subjects/a b".to_string()]);
}
