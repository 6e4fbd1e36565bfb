//! Public contact-form handler.
//!
//! The one externally-facing write. Validation runs here, before the
//! repository: required fields, then email format, then message length,
//! each rejection with its own localized message. Store failures become
//! a generic submission-error envelope and are never surfaced raw.

use axum::extract::{Path, State};
use axum::Json;
use examcat_core::action::ActionResult;
use examcat_core::contact::validate_contact;
use examcat_store::models::contact_submission::{ContactForm, ContactSubmission, SubmissionStatus};
use examcat_store::repositories::ContactSubmissionRepo;
use examcat_store::StoreError;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/contact
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactForm>,
) -> Json<ActionResult> {
    if let Err(rejection) = validate_contact(&input.email, &input.message) {
        return Json(ActionResult::fail(rejection.to_string()));
    }

    match ContactSubmissionRepo::create(state.store.as_ref(), &input).await {
        Ok(submission) => {
            tracing::info!(id = %submission.id, "Contact submission stored");
            Json(ActionResult::ok(
                "문의가 성공적으로 접수되었습니다. 빠른 시일 내에 답변 드리겠습니다.",
            ))
        }
        Err(err) => {
            tracing::error!(error = %err, "Contact submission failed");
            Json(ActionResult::fail(
                "문의 접수 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.",
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// Admin triage
// ---------------------------------------------------------------------------

/// Request body for `PUT /admin/contact-submissions/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: SubmissionStatus,
}

/// GET /api/v1/admin/contact-submissions
pub async fn list_recent(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ContactSubmission>>>> {
    let submissions = ContactSubmissionRepo::list_recent(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// PUT /api/v1/admin/contact-submissions/{id}/status
pub async fn update_status(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateStatusRequest>,
) -> Json<ActionResult> {
    match ContactSubmissionRepo::update_status(state.store.as_ref(), &id, input.status).await {
        Ok(()) => {
            tracing::info!(id = %id, status = ?input.status, "Contact submission status updated");
            Json(ActionResult::ok("문의 상태가 변경되었습니다."))
        }
        Err(StoreError::NotFound { .. }) => Json(ActionResult::fail("존재하지 않는 문의입니다.")),
        Err(err) => {
            tracing::error!(error = %err, id = %id, "Contact submission status update failed");
            Json(ActionResult::fail("문의 상태 변경 중 오류가 발생했습니다."))
        }
    }
}

/// DELETE /api/v1/admin/contact-submissions/{id}
pub async fn remove(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ActionResult> {
    match ContactSubmissionRepo::delete(state.store.as_ref(), &id).await {
        Ok(()) => {
            tracing::info!(id = %id, "Contact submission deleted");
            Json(ActionResult::ok("문의가 삭제되었습니다."))
        }
        Err(err) => {
            tracing::error!(error = %err, id = %id, "Contact submission deletion failed");
            Json(ActionResult::fail("문의 삭제 중 오류가 발생했습니다."))
        }
    }
}
