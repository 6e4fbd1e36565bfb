//! Route definitions for the app catalog.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::apps;
use crate::state::AppState;

/// ```text
/// GET    /apps                      published apps (public)
/// GET    /apps/{bundle_id}          published app detail (public)
/// GET    /admin/apps                all apps (admin)
/// POST   /admin/apps                create
/// PUT    /admin/apps/{bundle_id}    update
/// DELETE /admin/apps/{bundle_id}    delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/apps", get(apps::list_published))
        .route("/apps/{bundle_id}", get(apps::get_published))
        .route("/admin/apps", get(apps::list_all).post(apps::create))
        .route(
            "/admin/apps/{bundle_id}",
            put(apps::update).delete(apps::remove),
        )
}
