//! Route definitions for study concepts.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::concepts;
use crate::state::AppState;

/// ```text
/// GET    /apps/{bundle_id}/concepts   concepts for an app (public)
/// GET    /admin/concepts              recent concepts (admin)
/// POST   /admin/concepts              create
/// PUT    /admin/concepts/{id}         update
/// DELETE /admin/concepts/{id}         delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/apps/{bundle_id}/concepts", get(concepts::list_for_app))
        .route(
            "/admin/concepts",
            get(concepts::list_recent).post(concepts::create),
        )
        .route(
            "/admin/concepts/{id}",
            put(concepts::update).delete(concepts::remove),
        )
}
