//! Affiliate-ad model and DTOs.
//!
//! This collection predates the rest of the catalog and uses camelCase
//! field names on the wire; the serde renames keep the stored shape
//! stable.

use examcat_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Ad placement slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdType {
    Banner,
    Interstitial,
}

/// Wildcard entry in `appIds` that targets every app.
pub const AD_TARGET_ALL: &str = "all";

/// A document in the `affiliate_ads` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateAd {
    /// Document id; not stored inside the document itself.
    #[serde(skip)]
    pub id: String,
    #[serde(rename = "type")]
    pub ad_type: AdType,
    pub title: String,
    pub image_url: String,
    pub link_url: String,
    pub is_active: bool,
    /// Higher priority serves first.
    #[serde(default)]
    pub priority: i32,
    /// Target bundle ids, or [`AD_TARGET_ALL`].
    #[serde(default)]
    pub app_ids: Vec<String>,
    /// Optional A/B experiment tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment_group: Option<String>,
    #[serde(default)]
    pub impressions: i64,
    #[serde(default)]
    pub clicks: i64,
    /// Optional ISO date bounds for the campaign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AffiliateAd {
    /// Whether this ad targets the given app, either explicitly or via
    /// the `"all"` wildcard.
    pub fn targets_app(&self, bundle_id: &str) -> bool {
        self.app_ids
            .iter()
            .any(|target| target == AD_TARGET_ALL || target == bundle_id)
    }
}

/// DTO for creating an ad. Counters always start at zero; no field
/// validation is applied (admin-trusted input, by design).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAffiliateAd {
    #[serde(rename = "type")]
    pub ad_type: AdType,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub link_url: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub priority: i32,
    #[serde(default = "default_app_ids")]
    pub app_ids: Vec<String>,
    #[serde(default)]
    pub experiment_group: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

fn default_is_active() -> bool {
    true
}

fn default_app_ids() -> Vec<String> {
    vec![AD_TARGET_ALL.to_string()]
}

/// DTO for updating an ad. Counters are only moved by the tracking
/// endpoints, not by admin edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAffiliateAd {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ad_type: Option<AdType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
