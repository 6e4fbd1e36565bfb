//! Route definitions for affiliate ads.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::affiliate_ads;
use crate::state::AppState;

/// ```text
/// GET    /ads/active            active ads for an app (public)
/// POST   /ads/{id}/impression   impression counter (public)
/// POST   /ads/{id}/click        click counter (public)
/// GET    /admin/ads             all ads (admin)
/// POST   /admin/ads             create
/// PUT    /admin/ads/{id}        update
/// DELETE /admin/ads/{id}        delete
/// POST   /admin/ads/{id}/toggle flip isActive
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ads/active", get(affiliate_ads::list_active))
        .route("/ads/{id}/impression", post(affiliate_ads::record_impression))
        .route("/ads/{id}/click", post(affiliate_ads::record_click))
        .route(
            "/admin/ads",
            get(affiliate_ads::list_all).post(affiliate_ads::create),
        )
        .route(
            "/admin/ads/{id}",
            put(affiliate_ads::update).delete(affiliate_ads::remove),
        )
        .route("/admin/ads/{id}/toggle", post(affiliate_ads::toggle))
}
