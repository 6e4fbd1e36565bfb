//! HTTP-level integration tests for the public contact form.

mod common;

use axum::http::StatusCode;
use examcat_store::models::contact_submission::SubmissionStatus;
use examcat_store::repositories::ContactSubmissionRepo;
use serde_json::json;

fn valid_form() -> serde_json::Value {
    json!({
        "name": "Test User",
        "email": "user@example.com",
        "subject": "Test Subject",
        "message": "문의 내용을 충분히 길게 작성했습니다.",
    })
}

#[tokio::test]
async fn valid_submission_is_persisted_as_pending() {
    let store = common::memory_store();
    let app = common::build_test_app(store.clone());

    let response = common::post_json(app, "/api/v1/contact", valid_form()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("성공"));

    let submissions = ContactSubmissionRepo::list_recent(store.as_ref()).await.unwrap();
    assert_eq!(submissions.len(), 1);
    let submission = &submissions[0];
    assert_eq!(submission.name, "Test User");
    assert_eq!(submission.email, "user@example.com");
    assert_eq!(submission.status, SubmissionStatus::Pending);
    assert_eq!(submission.created_at, submission.updated_at);
}

#[tokio::test]
async fn missing_required_fields_are_rejected() {
    let store = common::memory_store();

    for body in [
        json!({ "name": "Test User", "email": "", "subject": "s", "message": "" }),
        json!({ "email": "", "message": "충분히 긴 메시지입니다. 열 자 이상." }),
        json!({ "email": "user@example.com", "message": "" }),
    ] {
        let app = common::build_test_app(store.clone());
        let json = common::body_json(common::post_json(app, "/api/v1/contact", body).await).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("필수"));
    }

    let submissions = ContactSubmissionRepo::list_recent(store.as_ref()).await.unwrap();
    assert!(submissions.is_empty());
}

#[tokio::test]
async fn malformed_emails_are_rejected() {
    let store = common::memory_store();

    for email in ["invalid-email", "user@example", "us er@example.com", "@example.com"] {
        let app = common::build_test_app(store.clone());
        let body = json!({
            "email": email,
            "message": "문의 내용을 충분히 길게 작성했습니다.",
        });
        let json = common::body_json(common::post_json(app, "/api/v1/contact", body).await).await;
        assert_eq!(json["success"], false, "email {email:?} must be rejected");
        assert!(json["message"].as_str().unwrap().contains("이메일"));
    }
}

#[tokio::test]
async fn short_message_is_rejected_with_length_marker() {
    let store = common::memory_store();
    let app = common::build_test_app(store);

    let body = json!({ "email": "user@example.com", "message": "Short" });
    let json = common::body_json(common::post_json(app, "/api/v1/contact", body).await).await;

    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("10자"));
}

#[tokio::test]
async fn overlong_message_is_rejected_with_length_marker() {
    let store = common::memory_store();
    let app = common::build_test_app(store);

    let body = json!({ "email": "user@example.com", "message": "가".repeat(5001) });
    let json = common::body_json(common::post_json(app, "/api/v1/contact", body).await).await;

    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("5000자"));
}

#[tokio::test]
async fn store_failure_becomes_generic_submission_error() {
    let store = common::memory_store();
    store.set_failing(true);
    let app = common::build_test_app(store);

    let json =
        common::body_json(common::post_json(app, "/api/v1/contact", valid_form()).await).await;

    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("오류"));
}

#[tokio::test]
async fn blank_name_and_subject_fall_back_to_placeholders() {
    let store = common::memory_store();
    let app = common::build_test_app(store.clone());

    let body = json!({
        "email": "user@example.com",
        "message": "문의 내용을 충분히 길게 작성했습니다.",
    });
    let json = common::body_json(common::post_json(app, "/api/v1/contact", body).await).await;
    assert_eq!(json["success"], true);

    let submissions = ContactSubmissionRepo::list_recent(store.as_ref()).await.unwrap();
    assert_eq!(submissions[0].name, "익명");
    assert_eq!(submissions[0].subject, "(제목 없음)");
}
