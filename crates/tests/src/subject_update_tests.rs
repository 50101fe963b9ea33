use pretty_assertions::assert_eq;
use server::error_convert::ValidateRequest;
use shared_types::{AppErrorKind, SubjectStore, UpdateSubjectRequest};

use crate::common::{self, EDITOR_TOKEN};

#[tokio::test]
async fn test_rename_round_trips_through_backend() {
    let backend = common::mock_backend().await;
    let client = backend.client();

    let body = UpdateSubjectRequest::new("  Modern History ".to_string());
    let updated = client.update_subject(EDITOR_TOKEN, "2", &body).await.unwrap();
    assert_eq!(updated.id, "2");
    assert_eq!(updated.name, "Modern History");
    assert_eq!(backend.hits.all(), vec!["PUT /subjects/2".to_string()]);

    let mut store = SubjectStore::default();
    store.set_subjects(client.list_subjects(EDITOR_TOKEN).await.unwrap());
    assert!(store.rename_subject(&updated.id, &updated.name));
    assert_eq!(store.find("2").map(|s| s.name.as_str()), Some("Modern History"));
}

#[test]
fn test_blank_name_fails_validation() {
    let body = UpdateSubjectRequest::new("   ".to_string());
    let err = body.validate_request().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("name"));
}
