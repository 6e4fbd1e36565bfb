//! Route definitions for lectures.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::lectures;
use crate::state::AppState;

/// ```text
/// GET    /apps/{bundle_id}/lectures   lectures for an app (public)
/// GET    /admin/lectures              recent lectures (admin)
/// POST   /admin/lectures              create
/// PUT    /admin/lectures/{id}         update
/// DELETE /admin/lectures/{id}         delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/apps/{bundle_id}/lectures", get(lectures::list_for_app))
        .route(
            "/admin/lectures",
            get(lectures::list_recent).post(lectures::create),
        )
        .route(
            "/admin/lectures/{id}",
            put(lectures::update).delete(lectures::remove),
        )
}
