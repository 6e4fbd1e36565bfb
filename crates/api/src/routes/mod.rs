pub mod affiliate_ads;
pub mod apps;
pub mod auth;
pub mod concepts;
pub mod contact;
pub mod health;
pub mod lectures;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                               login (public)
/// /auth/logout                              logout
/// /auth/session                             session probe
///
/// /contact                                  public contact form (POST)
///
/// /apps                                     published apps (GET)
/// /apps/{bundle_id}                         published app detail (GET)
/// /apps/{bundle_id}/concepts                concepts for an app (GET)
/// /apps/{bundle_id}/lectures                lectures for an app (GET)
///
/// /ads/active                               active ads for an app (GET)
/// /ads/{id}/impression                      impression counter (POST)
/// /ads/{id}/click                           click counter (POST)
///
/// /admin/apps                               list, create (admin)
/// /admin/apps/{bundle_id}                   update, delete
/// /admin/concepts                           list, create (admin)
/// /admin/concepts/{id}                      update, delete
/// /admin/lectures                           list, create (admin)
/// /admin/lectures/{id}                      update, delete
/// /admin/ads                                list, create (admin)
/// /admin/ads/{id}                           update, delete
/// /admin/ads/{id}/toggle                    flip isActive (POST)
/// /admin/contact-submissions                list (admin)
/// /admin/contact-submissions/{id}           delete
/// /admin/contact-submissions/{id}/status    update status (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(contact::router())
        .merge(apps::router())
        .merge(concepts::router())
        .merge(lectures::router())
        .merge(affiliate_ads::router())
}
