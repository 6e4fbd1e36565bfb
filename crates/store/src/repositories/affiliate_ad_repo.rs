//! Repository for the `affiliate_ads` collection.
//!
//! Field names are camelCase on the wire (see the model). Counter
//! updates are read-modify-write and race at last-write-wins, which is
//! acceptable for advisory ad metrics.

use chrono::Utc;
use serde_json::json;

use crate::collections;
use crate::models::affiliate_ad::{AdType, AffiliateAd, CreateAffiliateAd, UpdateAffiliateAd};
use crate::repositories::{changed_fields, from_document, to_document, ADMIN_LIST_LIMIT};
use crate::store::{Document, DocumentStore, Query, StoreError};

pub struct AffiliateAdRepo;

impl AffiliateAdRepo {
    /// Create an ad under a generated id. Impression and click counters
    /// start at zero.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &CreateAffiliateAd,
    ) -> Result<AffiliateAd, StoreError> {
        let now = Utc::now();
        let mut ad = AffiliateAd {
            id: String::new(),
            ad_type: input.ad_type,
            title: input.title.clone(),
            image_url: input.image_url.clone(),
            link_url: input.link_url.clone(),
            is_active: input.is_active,
            priority: input.priority,
            app_ids: input.app_ids.clone(),
            experiment_group: input.experiment_group.clone(),
            impressions: 0,
            clicks: 0,
            start_date: input.start_date.clone(),
            end_date: input.end_date.clone(),
            created_at: now,
            updated_at: now,
        };

        ad.id = store
            .add(collections::AFFILIATE_ADS, to_document(&ad)?)
            .await?;

        Ok(ad)
    }

    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<AffiliateAd>, StoreError> {
        match store.get(collections::AFFILIATE_ADS, id).await? {
            Some(fields) => {
                let mut ad: AffiliateAd = from_document(fields)?;
                ad.id = id.to_string();
                Ok(Some(ad))
            }
            None => Ok(None),
        }
    }

    /// Write only the supplied fields and refresh `updatedAt`.
    ///
    /// Fails with [`StoreError::NotFound`] when the ad does not exist.
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        input: &UpdateAffiliateAd,
    ) -> Result<(), StoreError> {
        if store.get(collections::AFFILIATE_ADS, id).await?.is_none() {
            return Err(StoreError::NotFound {
                collection: collections::AFFILIATE_ADS.to_string(),
                id: id.to_string(),
            });
        }

        let mut fields = changed_fields(input)?;
        fields.insert("updatedAt".to_string(), json!(Utc::now()));
        store.update(collections::AFFILIATE_ADS, id, fields).await
    }

    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        store.delete(collections::AFFILIATE_ADS, id).await
    }

    /// Flip `isActive` and return the new value.
    ///
    /// Existence is checked first: a missing ad fails with
    /// [`StoreError::NotFound`] and nothing is written. Repeated calls
    /// flip the flag each time (deliberately not idempotent).
    pub async fn toggle_status(store: &dyn DocumentStore, id: &str) -> Result<bool, StoreError> {
        let ad = Self::find_by_id(store, id)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                collection: collections::AFFILIATE_ADS.to_string(),
                id: id.to_string(),
            })?;

        let next = !ad.is_active;
        let mut fields = Document::new();
        fields.insert("isActive".to_string(), json!(next));
        fields.insert("updatedAt".to_string(), json!(Utc::now()));
        store.update(collections::AFFILIATE_ADS, id, fields).await?;

        Ok(next)
    }

    /// Count one impression.
    pub async fn record_impression(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        let ad = Self::find_by_id(store, id)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                collection: collections::AFFILIATE_ADS.to_string(),
                id: id.to_string(),
            })?;

        let mut fields = Document::new();
        fields.insert("impressions".to_string(), json!(ad.impressions + 1));
        store.update(collections::AFFILIATE_ADS, id, fields).await
    }

    /// Count one click.
    pub async fn record_click(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        let ad = Self::find_by_id(store, id)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                collection: collections::AFFILIATE_ADS.to_string(),
                id: id.to_string(),
            })?;

        let mut fields = Document::new();
        fields.insert("clicks".to_string(), json!(ad.clicks + 1));
        store.update(collections::AFFILIATE_ADS, id, fields).await
    }

    /// All ads, newest first (admin listing).
    pub async fn list_all(store: &dyn DocumentStore) -> Result<Vec<AffiliateAd>, StoreError> {
        let rows = store
            .query(
                collections::AFFILIATE_ADS,
                Query::new().order_desc("createdAt").limit(ADMIN_LIST_LIMIT),
            )
            .await?;
        collect(rows)
    }

    /// Active ads targeting the given app, highest priority first,
    /// optionally narrowed to one placement type.
    ///
    /// The `appIds` wildcard match happens here: the store only does
    /// equality filters, so targeting is applied after the query.
    pub async fn list_active(
        store: &dyn DocumentStore,
        ad_type: Option<AdType>,
        bundle_id: &str,
    ) -> Result<Vec<AffiliateAd>, StoreError> {
        let mut query = Query::new()
            .filter("isActive", true)
            .order_desc("priority");
        if let Some(ad_type) = ad_type {
            query = query.filter("type", json!(ad_type));
        }

        let ads = collect(store.query(collections::AFFILIATE_ADS, query).await?)?;
        Ok(ads
            .into_iter()
            .filter(|ad| ad.targets_app(bundle_id))
            .collect())
    }
}

fn collect(rows: Vec<(String, Document)>) -> Result<Vec<AffiliateAd>, StoreError> {
    rows.into_iter()
        .map(|(id, fields)| {
            let mut ad: AffiliateAd = from_document(fields)?;
            ad.id = id;
            Ok(ad)
        })
        .collect()
}
