//! Handlers for the app catalog.
//!
//! Public reads only see published apps; the admin surface sees
//! everything. Admin mutations take the form-submission contract: no
//! field validation (admin-trusted input, by design) and an
//! [`ActionResult`] envelope with a localized message.

use axum::extract::{Path, State};
use axum::Json;
use examcat_core::action::ActionResult;
use examcat_core::error::CoreError;
use examcat_store::models::app::{App, AppStatus, CreateApp, UpdateApp};
use examcat_store::repositories::AppRepo;
use examcat_store::StoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public reads
// ---------------------------------------------------------------------------

/// GET /api/v1/apps
///
/// Published apps, newest first.
pub async fn list_published(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<App>>>> {
    let apps = AppRepo::list_published(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: apps }))
}

/// GET /api/v1/apps/{bundle_id}
///
/// A single published app. Drafts are invisible here.
pub async fn get_published(
    State(state): State<AppState>,
    Path(bundle_id): Path<String>,
) -> AppResult<Json<DataResponse<App>>> {
    let app = AppRepo::find_by_id(state.store.as_ref(), &bundle_id)
        .await?
        .filter(|app| app.status == AppStatus::Published)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "App",
            id: bundle_id,
        }))?;

    Ok(Json(DataResponse { data: app }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/apps
pub async fn list_all(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<App>>>> {
    let apps = AppRepo::list_all(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: apps }))
}

/// POST /api/v1/admin/apps
pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateApp>,
) -> Json<ActionResult> {
    match AppRepo::create(state.store.as_ref(), &input).await {
        Ok(app) => {
            tracing::info!(bundle_id = %app.bundle_id, "App created");
            Json(ActionResult::ok_with_id("앱이 생성되었습니다.", app.bundle_id))
        }
        Err(StoreError::AlreadyExists { .. }) => {
            Json(ActionResult::fail("이미 존재하는 Bundle ID입니다."))
        }
        Err(err) => {
            tracing::error!(error = %err, "App creation failed");
            Json(ActionResult::fail("앱 생성 중 오류가 발생했습니다."))
        }
    }
}

/// PUT /api/v1/admin/apps/{bundle_id}
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(bundle_id): Path<String>,
    Json(input): Json<UpdateApp>,
) -> Json<ActionResult> {
    match AppRepo::update(state.store.as_ref(), &bundle_id, &input).await {
        Ok(()) => {
            tracing::info!(bundle_id = %bundle_id, "App updated");
            Json(ActionResult::ok("앱이 수정되었습니다."))
        }
        Err(StoreError::NotFound { .. }) => Json(ActionResult::fail("존재하지 않는 앱입니다.")),
        Err(err) => {
            tracing::error!(error = %err, bundle_id = %bundle_id, "App update failed");
            Json(ActionResult::fail("앱 수정 중 오류가 발생했습니다."))
        }
    }
}

/// DELETE /api/v1/admin/apps/{bundle_id}
///
/// Concepts and lectures referencing the app are left in place.
pub async fn remove(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(bundle_id): Path<String>,
) -> Json<ActionResult> {
    match AppRepo::delete(state.store.as_ref(), &bundle_id).await {
        Ok(()) => {
            tracing::info!(bundle_id = %bundle_id, "App deleted");
            Json(ActionResult::ok("앱이 삭제되었습니다."))
        }
        Err(err) => {
            tracing::error!(error = %err, bundle_id = %bundle_id, "App deletion failed");
            Json(ActionResult::fail("앱 삭제 중 오류가 발생했습니다."))
        }
    }
}
