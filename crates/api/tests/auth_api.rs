//! HTTP-level integration tests for the admin session gate.
//!
//! Covers login (success, wrong password, unconfigured secret), the
//! session cookie's attributes, the session probe, logout, and the
//! admin-gate extractor on a protected endpoint.

mod common;

use axum::http::{header, StatusCode};
use serde_json::json;

#[tokio::test]
async fn login_sets_session_cookie_with_documented_attributes() {
    let store = common::memory_store();
    let app = common::build_test_app(store);

    let response = common::post_json(
        app,
        "/api/v1/auth/login",
        json!({ "password": common::TEST_ADMIN_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .unwrap()
        .to_string();

    assert!(set_cookie.starts_with("admin_session=authenticated"));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Max-Age=604800"));

    let json = common::body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("성공"));
}

#[tokio::test]
async fn login_with_wrong_password_sets_nothing() {
    let store = common::memory_store();
    let app = common::build_test_app(store);

    let response = common::post_json(
        app,
        "/api/v1/auth/login",
        json!({ "password": "wrong-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let json = common::body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("비밀번호"));
}

#[tokio::test]
async fn login_fails_closed_when_password_not_configured() {
    let store = common::memory_store();
    let mut config = common::test_config();
    config.admin_password = None;
    let app = common::build_test_app_with_config(store, config);

    let response = common::post_json(
        app,
        "/api/v1/auth/login",
        json!({ "password": "any-password" }),
    )
    .await;

    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let json = common::body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("설정"));
}

#[tokio::test]
async fn session_probe_reflects_cookie_state() {
    let store = common::memory_store();

    let response = common::get(common::build_test_app(store.clone()), "/api/v1/auth/session").await;
    let json = common::body_json(response).await;
    assert_eq!(json["authenticated"], false);

    let response = common::get_with_cookie(
        common::build_test_app(store.clone()),
        "/api/v1/auth/session",
        common::ADMIN_COOKIE,
    )
    .await;
    let json = common::body_json(response).await;
    assert_eq!(json["authenticated"], true);

    // Any value other than the sentinel is unauthenticated.
    let response = common::get_with_cookie(
        common::build_test_app(store),
        "/api/v1/auth/session",
        "admin_session=invalid",
    )
    .await;
    let json = common::body_json(response).await;
    assert_eq!(json["authenticated"], false);
}

#[tokio::test]
async fn login_cookie_authenticates_subsequent_requests() {
    let store = common::memory_store();

    let response = common::post_json(
        common::build_test_app(store.clone()),
        "/api/v1/auth/login",
        json!({ "password": common::TEST_ADMIN_PASSWORD }),
    )
    .await;
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    // The name=value pair is everything before the first attribute.
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let response = common::get_with_cookie(
        common::build_test_app(store.clone()),
        "/api/v1/auth/session",
        &cookie,
    )
    .await;
    let json = common::body_json(response).await;
    assert_eq!(json["authenticated"], true);

    // Logout tells the browser to drop the cookie; a request without it
    // is unauthenticated again.
    let app = common::build_test_app(store.clone());
    let response = common::post_with_cookie(app, "/api/v1/auth/logout", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = common::get(common::build_test_app(store), "/api/v1/auth/session").await;
    let json = common::body_json(response).await;
    assert_eq!(json["authenticated"], false);
}

#[tokio::test]
async fn logout_expires_the_cookie() {
    let store = common::memory_store();
    let app = common::build_test_app(store);

    let response = common::post_with_cookie(app, "/api/v1/auth/logout", common::ADMIN_COOKIE).await;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("logout must expire the session cookie")
        .to_str()
        .unwrap()
        .to_string();

    assert!(set_cookie.starts_with("admin_session="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn admin_endpoints_require_the_session_cookie() {
    let store = common::memory_store();

    let response = common::get(common::build_test_app(store.clone()), "/api/v1/admin/apps").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = common::get_with_cookie(
        common::build_test_app(store.clone()),
        "/api/v1/admin/apps",
        "admin_session=invalid",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = common::get_with_cookie(
        common::build_test_app(store),
        "/api/v1/admin/apps",
        common::ADMIN_COOKIE,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
