//! Session-gate extractor for admin handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use examcat_core::error::CoreError;

use crate::error::AppError;
use crate::session;
use crate::state::AppState;

/// Proof that the request carries a valid admin session cookie.
///
/// Use as an extractor parameter in any handler behind the admin gate:
///
/// ```ignore
/// async fn my_handler(_admin: AdminSession) -> Json<ActionResult> { ... }
/// ```
///
/// Requests without the cookie (or with any non-sentinel value) are
/// rejected with 401.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        if session::is_authenticated(&jar) {
            Ok(AdminSession)
        } else {
            Err(AppError::Core(CoreError::Unauthorized(
                "관리자 로그인이 필요합니다.".into(),
            )))
        }
    }
}
