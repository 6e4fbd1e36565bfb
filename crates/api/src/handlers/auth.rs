//! Handlers for the `/auth` resource (session-gate login/logout).
//!
//! The gate is a single shared password compared byte-for-byte against
//! `ADMIN_PASSWORD`; success sets the session cookie, and nothing is
//! stored server-side. When no password is configured the gate fails
//! closed.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use examcat_core::action::ActionResult;
use serde::{Deserialize, Serialize};

use crate::session;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Response body for `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> (CookieJar, Json<ActionResult>) {
    let Some(secret) = state.config.admin_password.as_deref() else {
        tracing::warn!("Admin login attempted but no admin password is configured");
        return (
            jar,
            Json(ActionResult::fail("관리자 비밀번호가 설정되지 않았습니다.")),
        );
    };

    if input.password.as_bytes() != secret.as_bytes() {
        tracing::info!("Admin login failed");
        return (jar, Json(ActionResult::fail("비밀번호가 올바르지 않습니다.")));
    }

    tracing::info!("Admin login succeeded");
    (
        jar.add(session::session_cookie()),
        Json(ActionResult::ok("로그인에 성공했습니다.")),
    )
}

/// POST /api/v1/auth/logout
///
/// Deletes the session cookie unconditionally.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<ActionResult>) {
    (
        session::clear_session(jar),
        Json(ActionResult::ok("로그아웃되었습니다.")),
    )
}

/// GET /api/v1/auth/session
///
/// Reports whether the request carries a valid admin session. Used by
/// the admin UI to decide between the login form and the dashboard.
pub async fn probe(jar: CookieJar) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: session::is_authenticated(&jar),
    })
}
