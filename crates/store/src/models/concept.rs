//! Study-concept model and DTOs.

use examcat_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// A document in the `concepts` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Document id; not stored inside the document itself.
    #[serde(skip)]
    pub id: String,
    /// Bundle id of the owning app. Trust-based reference -- existence is
    /// not checked (admin-only surface).
    pub app_id: String,
    #[serde(default)]
    pub category: String,
    pub title: String,
    pub content: String,
    /// Star rating 1-5; the admin form defaults to 3.
    #[serde(default = "default_importance")]
    pub importance: i32,
    /// Comma-joined keyword string, persisted as-is.
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub study_note: String,
    #[serde(default)]
    pub related_question_ids: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn default_importance() -> i32 {
    3
}

/// DTO for creating a concept.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConcept {
    pub app_id: String,
    #[serde(default)]
    pub category: String,
    pub title: String,
    pub content: String,
    #[serde(default = "default_importance")]
    pub importance: i32,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub study_note: String,
    #[serde(default)]
    pub related_question_ids: Vec<String>,
}

/// DTO for updating a concept. The app binding is fixed at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_question_ids: Option<Vec<String>>,
}
