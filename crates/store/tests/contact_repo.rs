//! Repository tests for the `contact_submissions` collection.

use assert_matches::assert_matches;
use examcat_store::models::contact_submission::{ContactForm, SubmissionStatus};
use examcat_store::repositories::ContactSubmissionRepo;
use examcat_store::{MemoryStore, StoreError};

fn form(name: &str, subject: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        email: "user@example.com".to_string(),
        subject: subject.to_string(),
        message: "문의 내용을 충분히 길게 작성했습니다.".to_string(),
    }
}

#[tokio::test]
async fn submission_persists_as_pending_with_timestamps() {
    let store = MemoryStore::new();

    let created = ContactSubmissionRepo::create(&store, &form("Test User", "Test Subject"))
        .await
        .unwrap();
    assert_eq!(created.status, SubmissionStatus::Pending);
    assert_eq!(created.created_at, created.updated_at);

    let found = ContactSubmissionRepo::find_by_id(&store, &created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn blank_name_and_subject_get_placeholders() {
    let store = MemoryStore::new();

    let created = ContactSubmissionRepo::create(&store, &form("", ""))
        .await
        .unwrap();
    assert_eq!(created.name, "익명");
    assert_eq!(created.subject, "(제목 없음)");
}

#[tokio::test]
async fn status_transitions_are_unrestricted() {
    let store = MemoryStore::new();
    let created = ContactSubmissionRepo::create(&store, &form("u", "s")).await.unwrap();

    ContactSubmissionRepo::update_status(&store, &created.id, SubmissionStatus::Resolved)
        .await
        .unwrap();
    let found = ContactSubmissionRepo::find_by_id(&store, &created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.status, SubmissionStatus::Resolved);

    // Back to in_progress is permitted.
    ContactSubmissionRepo::update_status(&store, &created.id, SubmissionStatus::InProgress)
        .await
        .unwrap();
    let found = ContactSubmissionRepo::find_by_id(&store, &created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.status, SubmissionStatus::InProgress);
}

#[tokio::test]
async fn status_update_missing_is_not_found() {
    let store = MemoryStore::new();
    let err = ContactSubmissionRepo::update_status(&store, "ghost", SubmissionStatus::Resolved)
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::NotFound { .. });
}

#[tokio::test]
async fn listing_returns_recent_submissions() {
    let store = MemoryStore::new();
    ContactSubmissionRepo::create(&store, &form("a", "s1")).await.unwrap();
    ContactSubmissionRepo::create(&store, &form("b", "s2")).await.unwrap();

    let submissions = ContactSubmissionRepo::list_recent(&store).await.unwrap();
    assert_eq!(submissions.len(), 2);
}
