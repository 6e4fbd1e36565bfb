//! App catalog entry model and DTOs.

use examcat_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Publication state. Only `published` apps appear on public pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppStatus {
    #[default]
    Draft,
    Published,
}

/// Labels offered by the admin form's category select. The field itself
/// is stored as a plain string (admin-trusted input).
pub const APP_CATEGORIES: &[&str] = &["자격증", "공무원", "어학", "기타"];

/// A document in the `apps` collection, keyed by `bundle_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// User-chosen id (e.g. `indsafety`). Immutable after create; doubles
    /// as the document id.
    pub bundle_id: String,
    pub app_name: String,
    #[serde(default)]
    pub app_name_full: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_full: String,
    #[serde(default)]
    pub app_store_url: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub app_category: String,
    /// Subject tags, already split by the caller.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub status: AppStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub download_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an app.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApp {
    pub bundle_id: String,
    pub app_name: String,
    #[serde(default)]
    pub app_name_full: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_full: String,
    #[serde(default)]
    pub app_store_url: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub app_category: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub status: AppStatus,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub download_count: i64,
}

/// DTO for updating an app. `bundle_id` is not updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateApp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_count: Option<i64>,
}
