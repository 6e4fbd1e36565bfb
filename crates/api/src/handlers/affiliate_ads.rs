//! Handlers for affiliate ads: admin CRUD plus the public serving and
//! tracking endpoints consumed by the mobile apps.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use examcat_core::action::ActionResult;
use examcat_store::models::affiliate_ad::{
    AdType, AffiliateAd, CreateAffiliateAd, UpdateAffiliateAd,
};
use examcat_store::repositories::AffiliateAdRepo;
use examcat_store::StoreError;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /ads/active`.
#[derive(Debug, Deserialize)]
pub struct ActiveAdsParams {
    /// Bundle id the client is showing ads in.
    pub app_id: String,
    /// Optional placement filter (`banner` / `interstitial`).
    #[serde(rename = "type")]
    pub ad_type: Option<AdType>,
}

// ---------------------------------------------------------------------------
// Public serving / tracking
// ---------------------------------------------------------------------------

/// GET /api/v1/ads/active?app_id=&type=
///
/// Active ads targeting the given app, highest priority first.
pub async fn list_active(
    State(state): State<AppState>,
    Query(params): Query<ActiveAdsParams>,
) -> AppResult<Json<DataResponse<Vec<AffiliateAd>>>> {
    let ads =
        AffiliateAdRepo::list_active(state.store.as_ref(), params.ad_type, &params.app_id).await?;
    Ok(Json(DataResponse { data: ads }))
}

/// POST /api/v1/ads/{id}/impression
pub async fn record_impression(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    AffiliateAdRepo::record_impression(state.store.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/ads/{id}/click
pub async fn record_click(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    AffiliateAdRepo::record_click(state.store.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/ads
pub async fn list_all(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<AffiliateAd>>>> {
    let ads = AffiliateAdRepo::list_all(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: ads }))
}

/// POST /api/v1/admin/ads
///
/// No field validation: admin-trusted input, by design -- an ad with
/// empty content fields is accepted.
pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateAffiliateAd>,
) -> Json<ActionResult> {
    match AffiliateAdRepo::create(state.store.as_ref(), &input).await {
        Ok(ad) => {
            tracing::info!(id = %ad.id, "Affiliate ad created");
            Json(ActionResult::ok_with_id("광고가 생성되었습니다.", ad.id))
        }
        Err(err) => {
            tracing::error!(error = %err, "Affiliate ad creation failed");
            Json(ActionResult::fail("광고 생성 중 오류가 발생했습니다."))
        }
    }
}

/// PUT /api/v1/admin/ads/{id}
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateAffiliateAd>,
) -> Json<ActionResult> {
    match AffiliateAdRepo::update(state.store.as_ref(), &id, &input).await {
        Ok(()) => {
            tracing::info!(id = %id, "Affiliate ad updated");
            Json(ActionResult::ok("광고가 수정되었습니다."))
        }
        Err(StoreError::NotFound { .. }) => Json(ActionResult::fail("존재하지 않는 광고입니다.")),
        Err(err) => {
            tracing::error!(error = %err, id = %id, "Affiliate ad update failed");
            Json(ActionResult::fail("광고 수정 중 오류가 발생했습니다."))
        }
    }
}

/// DELETE /api/v1/admin/ads/{id}
pub async fn remove(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ActionResult> {
    match AffiliateAdRepo::delete(state.store.as_ref(), &id).await {
        Ok(()) => {
            tracing::info!(id = %id, "Affiliate ad deleted");
            Json(ActionResult::ok("광고가 삭제되었습니다."))
        }
        Err(err) => {
            tracing::error!(error = %err, id = %id, "Affiliate ad deletion failed");
            Json(ActionResult::fail("광고 삭제 중 오류가 발생했습니다."))
        }
    }
}

/// POST /api/v1/admin/ads/{id}/toggle
///
/// Flip `isActive`. Existence is checked first; a missing ad fails
/// without writing anything.
pub async fn toggle(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ActionResult> {
    match AffiliateAdRepo::toggle_status(state.store.as_ref(), &id).await {
        Ok(true) => {
            tracing::info!(id = %id, "Affiliate ad activated");
            Json(ActionResult::ok("광고가 활성화되었습니다."))
        }
        Ok(false) => {
            tracing::info!(id = %id, "Affiliate ad deactivated");
            Json(ActionResult::ok("광고가 비활성화되었습니다."))
        }
        Err(StoreError::NotFound { .. }) => Json(ActionResult::fail("존재하지 않는 광고입니다.")),
        Err(err) => {
            tracing::error!(error = %err, id = %id, "Affiliate ad toggle failed");
            Json(ActionResult::fail("광고 상태 변경 중 오류가 발생했습니다."))
        }
    }
}
