//! Admin session cookie management.
//!
//! Authentication is a single shared-password gate: a successful login
//! sets the `admin_session` cookie to a fixed sentinel and nothing is
//! stored server-side. The cookie is HTTP-only, SameSite=Lax, and lives
//! for seven days. No hashing, lockout, or rate limiting exists at this
//! boundary (see DESIGN.md).

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Name of the admin session cookie.
pub const SESSION_COOKIE: &str = "admin_session";

/// Sentinel value marking an authenticated session.
pub const SESSION_AUTHENTICATED: &str = "authenticated";

/// Session lifetime: 7 days.
pub const SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

/// Build the session cookie set on successful login.
pub fn session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, SESSION_AUTHENTICATED))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(SESSION_MAX_AGE_SECS))
        .build()
}

/// Remove the session cookie from the jar (logout). Unconditional: a
/// jar without the cookie comes back unchanged.
pub fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(
        Cookie::build((SESSION_COOKIE, ""))
            .path("/")
            .build(),
    )
}

/// True only when the jar carries the session cookie with the exact
/// sentinel value. Anything else -- absent cookie, other values -- is
/// unauthenticated.
pub fn is_authenticated(jar: &CookieJar) -> bool {
    jar.get(SESSION_COOKIE).map(|c| c.value()) == Some(SESSION_AUTHENTICATED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_has_documented_attributes() {
        let rendered = session_cookie().to_string();

        assert!(rendered.starts_with("admin_session=authenticated"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Lax"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("Max-Age=604800"));
    }

    #[test]
    fn sentinel_value_authenticates() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, SESSION_AUTHENTICATED));
        assert!(is_authenticated(&jar));
    }

    #[test]
    fn missing_cookie_does_not_authenticate() {
        assert!(!is_authenticated(&CookieJar::new()));
    }

    #[test]
    fn other_values_do_not_authenticate() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "invalid"));
        assert!(!is_authenticated(&jar));
    }
}
