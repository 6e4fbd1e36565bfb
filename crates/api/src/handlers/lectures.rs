//! Handlers for lectures.

use axum::extract::{Path, State};
use axum::Json;
use examcat_core::action::ActionResult;
use examcat_store::models::lecture::{CreateLecture, Lecture, UpdateLecture};
use examcat_store::repositories::LectureRepo;
use examcat_store::StoreError;

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/apps/{bundle_id}/lectures
///
/// Lectures for one app, newest first (public listening pages).
pub async fn list_for_app(
    State(state): State<AppState>,
    Path(bundle_id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Lecture>>>> {
    let lectures = LectureRepo::list_for_app(state.store.as_ref(), &bundle_id).await?;
    Ok(Json(DataResponse { data: lectures }))
}

/// GET /api/v1/admin/lectures
pub async fn list_recent(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Lecture>>>> {
    let lectures = LectureRepo::list_recent(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: lectures }))
}

/// POST /api/v1/admin/lectures
///
/// No field validation: admin-trusted input, by design.
pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateLecture>,
) -> Json<ActionResult> {
    match LectureRepo::create(state.store.as_ref(), &input).await {
        Ok(lecture) => {
            tracing::info!(id = %lecture.id, app_id = %lecture.app_id, "Lecture created");
            Json(ActionResult::ok_with_id("강의가 생성되었습니다.", lecture.id))
        }
        Err(err) => {
            tracing::error!(error = %err, "Lecture creation failed");
            Json(ActionResult::fail("강의 생성 중 오류가 발생했습니다."))
        }
    }
}

/// PUT /api/v1/admin/lectures/{id}
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateLecture>,
) -> Json<ActionResult> {
    match LectureRepo::update(state.store.as_ref(), &id, &input).await {
        Ok(()) => {
            tracing::info!(id = %id, "Lecture updated");
            Json(ActionResult::ok("강의가 수정되었습니다."))
        }
        Err(StoreError::NotFound { .. }) => Json(ActionResult::fail("존재하지 않는 강의입니다.")),
        Err(err) => {
            tracing::error!(error = %err, id = %id, "Lecture update failed");
            Json(ActionResult::fail("강의 수정 중 오류가 발생했습니다."))
        }
    }
}

/// DELETE /api/v1/admin/lectures/{id}
pub async fn remove(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ActionResult> {
    match LectureRepo::delete(state.store.as_ref(), &id).await {
        Ok(()) => {
            tracing::info!(id = %id, "Lecture deleted");
            Json(ActionResult::ok("강의가 삭제되었습니다."))
        }
        Err(err) => {
            tracing::error!(error = %err, id = %id, "Lecture deletion failed");
            Json(ActionResult::fail("강의 삭제 중 오류가 발생했습니다."))
        }
    }
}
