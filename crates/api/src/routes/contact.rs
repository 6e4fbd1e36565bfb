//! Route definitions for the contact form and its admin triage.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// ```text
/// POST   /contact                                 public submission
/// GET    /admin/contact-submissions               list (admin)
/// DELETE /admin/contact-submissions/{id}          delete
/// PUT    /admin/contact-submissions/{id}/status   update status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact::submit))
        .route("/admin/contact-submissions", get(contact::list_recent))
        .route("/admin/contact-submissions/{id}", delete(contact::remove))
        .route(
            "/admin/contact-submissions/{id}/status",
            put(contact::update_status),
        )
}
