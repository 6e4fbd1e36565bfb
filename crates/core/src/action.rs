//! The uniform result envelope returned by every mutating form handler.

use serde::Serialize;

/// Outcome of a form submission: `{ success, message, id? }`.
///
/// The message is user-facing, localized text; callers match on marker
/// substrings (e.g. `"삭제"`, `"존재하지 않는"`) rather than structured
/// error codes. `id` is set on successful creates so the UI can navigate
/// to the new record.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: None,
        }
    }

    pub fn ok_with_id(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: Some(id.into()),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
        }
    }
}
