//! HTTP-level integration tests for app catalog CRUD and public
//! visibility rules.

mod common;

use axum::http::StatusCode;
use examcat_store::models::app::AppStatus;
use examcat_store::repositories::AppRepo;
use serde_json::json;

fn indsafety() -> serde_json::Value {
    json!({
        "bundle_id": "indsafety",
        "app_name": "산업안전기사",
        "app_name_full": "산업안전기사 필기 CBT",
        "description": "산업안전기사 필기 시험 대비 앱",
        "app_store_url": "https://apps.apple.com/app/id0000000000",
        "app_category": "자격증",
        "categories": ["산업안전관리론", "인간공학", "기계위험방지기술"],
        "status": "draft",
        "is_featured": false,
        "rating": 4.5,
        "download_count": 1200,
    })
}

#[tokio::test]
async fn created_app_round_trips_through_the_store() {
    let store = common::memory_store();
    let app = common::build_test_app(store.clone());

    let response =
        common::post_json_with_cookie(app, "/api/v1/admin/apps", indsafety(), common::ADMIN_COOKIE)
            .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("생성"));
    assert_eq!(json["id"], "indsafety");

    let found = AppRepo::find_by_id(store.as_ref(), "indsafety")
        .await
        .unwrap()
        .expect("app must be persisted");
    assert_eq!(found.app_name, "산업안전기사");
    assert_eq!(found.status, AppStatus::Draft);
    assert_eq!(found.categories.len(), 3);
    assert_eq!(found.rating, 4.5);
    assert_eq!(found.download_count, 1200);
}

#[tokio::test]
async fn duplicate_bundle_id_is_refused() {
    let store = common::memory_store();

    let app = common::build_test_app(store.clone());
    common::post_json_with_cookie(app, "/api/v1/admin/apps", indsafety(), common::ADMIN_COOKIE)
        .await;

    let app = common::build_test_app(store);
    let json = common::body_json(
        common::post_json_with_cookie(app, "/api/v1/admin/apps", indsafety(), common::ADMIN_COOKIE)
            .await,
    )
    .await;

    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("존재"));
}

#[tokio::test]
async fn drafts_are_invisible_on_the_public_surface() {
    let store = common::memory_store();

    let app = common::build_test_app(store.clone());
    common::post_json_with_cookie(app, "/api/v1/admin/apps", indsafety(), common::ADMIN_COOKIE)
        .await;

    // Draft: hidden from the public list and detail page.
    let app = common::build_test_app(store.clone());
    let json = common::body_json(common::get(app, "/api/v1/apps").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    let app = common::build_test_app(store.clone());
    let response = common::get(app, "/api/v1/apps/indsafety").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Admin sees everything.
    let app = common::build_test_app(store.clone());
    let json = common::body_json(
        common::get_with_cookie(app, "/api/v1/admin/apps", common::ADMIN_COOKIE).await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Publish, then the public surface shows it.
    let app = common::build_test_app(store.clone());
    let json = common::body_json(
        common::put_json_with_cookie(
            app,
            "/api/v1/admin/apps/indsafety",
            json!({ "status": "published" }),
            common::ADMIN_COOKIE,
        )
        .await,
    )
    .await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("수정"));

    let app = common::build_test_app(store.clone());
    let json = common::body_json(common::get(app, "/api/v1/apps").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["bundle_id"], "indsafety");

    let app = common::build_test_app(store);
    let response = common::get(app, "/api/v1/apps/indsafety").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn partial_update_leaves_other_fields_alone() {
    let store = common::memory_store();

    let app = common::build_test_app(store.clone());
    common::post_json_with_cookie(app, "/api/v1/admin/apps", indsafety(), common::ADMIN_COOKIE)
        .await;

    let app = common::build_test_app(store.clone());
    common::put_json_with_cookie(
        app,
        "/api/v1/admin/apps/indsafety",
        json!({ "rating": 4.9 }),
        common::ADMIN_COOKIE,
    )
    .await;

    let found = AppRepo::find_by_id(store.as_ref(), "indsafety")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.rating, 4.9);
    assert_eq!(found.app_name, "산업안전기사");
    assert_eq!(found.status, AppStatus::Draft);
}

#[tokio::test]
async fn updating_a_missing_app_reports_it() {
    let store = common::memory_store();
    let app = common::build_test_app(store);

    let json = common::body_json(
        common::put_json_with_cookie(
            app,
            "/api/v1/admin/apps/ghost",
            json!({ "rating": 1.0 }),
            common::ADMIN_COOKIE,
        )
        .await,
    )
    .await;

    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("존재하지 않는"));
}

#[tokio::test]
async fn delete_removes_the_app() {
    let store = common::memory_store();

    let app = common::build_test_app(store.clone());
    common::post_json_with_cookie(app, "/api/v1/admin/apps", indsafety(), common::ADMIN_COOKIE)
        .await;

    let app = common::build_test_app(store.clone());
    let json = common::body_json(
        common::delete_with_cookie(app, "/api/v1/admin/apps/indsafety", common::ADMIN_COOKIE)
            .await,
    )
    .await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("삭제"));

    assert!(AppRepo::find_by_id(store.as_ref(), "indsafety")
        .await
        .unwrap()
        .is_none());
}
