//! Shared response envelope for read endpoints.
//!
//! Reads return `{ "data": ... }`; mutations return
//! [`examcat_core::action::ActionResult`]. Use [`DataResponse`] instead
//! of ad-hoc `serde_json::json!({ "data": ... })` for compile-time type
//! safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
