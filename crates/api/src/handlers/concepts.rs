//! Handlers for study concepts.

use axum::extract::{Path, State};
use axum::Json;
use examcat_core::action::ActionResult;
use examcat_store::models::concept::{Concept, CreateConcept, UpdateConcept};
use examcat_store::repositories::ConceptRepo;
use examcat_store::StoreError;

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/apps/{bundle_id}/concepts
///
/// Concepts for one app, newest first (public study pages).
pub async fn list_for_app(
    State(state): State<AppState>,
    Path(bundle_id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Concept>>>> {
    let concepts = ConceptRepo::list_for_app(state.store.as_ref(), &bundle_id).await?;
    Ok(Json(DataResponse { data: concepts }))
}

/// GET /api/v1/admin/concepts
pub async fn list_recent(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Concept>>>> {
    let concepts = ConceptRepo::list_recent(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: concepts }))
}

/// POST /api/v1/admin/concepts
///
/// No field validation: admin-trusted input, by design. The `app_id`
/// reference is trust-based and not checked against the apps collection.
pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateConcept>,
) -> Json<ActionResult> {
    match ConceptRepo::create(state.store.as_ref(), &input).await {
        Ok(concept) => {
            tracing::info!(id = %concept.id, app_id = %concept.app_id, "Concept created");
            Json(ActionResult::ok_with_id("개념이 생성되었습니다.", concept.id))
        }
        Err(err) => {
            tracing::error!(error = %err, "Concept creation failed");
            Json(ActionResult::fail("개념 생성 중 오류가 발생했습니다."))
        }
    }
}

/// PUT /api/v1/admin/concepts/{id}
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateConcept>,
) -> Json<ActionResult> {
    match ConceptRepo::update(state.store.as_ref(), &id, &input).await {
        Ok(()) => {
            tracing::info!(id = %id, "Concept updated");
            Json(ActionResult::ok("개념이 수정되었습니다."))
        }
        Err(StoreError::NotFound { .. }) => Json(ActionResult::fail("존재하지 않는 개념입니다.")),
        Err(err) => {
            tracing::error!(error = %err, id = %id, "Concept update failed");
            Json(ActionResult::fail("개념 수정 중 오류가 발생했습니다."))
        }
    }
}

/// DELETE /api/v1/admin/concepts/{id}
pub async fn remove(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ActionResult> {
    match ConceptRepo::delete(state.store.as_ref(), &id).await {
        Ok(()) => {
            tracing::info!(id = %id, "Concept deleted");
            Json(ActionResult::ok("개념이 삭제되었습니다."))
        }
        Err(err) => {
            tracing::error!(error = %err, id = %id, "Concept deletion failed");
            Json(ActionResult::fail("개념 삭제 중 오류가 발생했습니다."))
        }
    }
}
