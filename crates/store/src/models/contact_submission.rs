//! Contact-submission model and DTOs.

use examcat_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Triage state of a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

/// Fallback for a submission without a name.
pub const ANONYMOUS_NAME: &str = "익명";

/// Fallback for a submission without a subject.
pub const DEFAULT_SUBJECT: &str = "(제목 없음)";

/// A document in the `contact_submissions` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Document id; not stored inside the document itself.
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: SubmissionStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public form input. `name` and `subject` fall back to placeholders;
/// `email` and `message` are validated at the handler boundary before
/// this reaches the repository.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}
