//! Repository for the `apps` collection.
//!
//! Apps are keyed by their user-chosen `bundle_id`, which doubles as the
//! document id; there is no separate generated id.

use chrono::Utc;
use serde_json::json;

use crate::collections;
use crate::models::app::{App, AppStatus, CreateApp, UpdateApp};
use crate::repositories::{changed_fields, from_document, to_document, ADMIN_LIST_LIMIT};
use crate::store::{Document, DocumentStore, Query, StoreError};

pub struct AppRepo;

impl AppRepo {
    /// Create an app under its `bundle_id`.
    ///
    /// Fails with [`StoreError::AlreadyExists`] when the bundle id is
    /// taken -- bundle ids are unique and immutable.
    pub async fn create(store: &dyn DocumentStore, input: &CreateApp) -> Result<App, StoreError> {
        let now = Utc::now();
        let app = App {
            bundle_id: input.bundle_id.clone(),
            app_name: input.app_name.clone(),
            app_name_full: input.app_name_full.clone(),
            description: input.description.clone(),
            description_full: input.description_full.clone(),
            app_store_url: input.app_store_url.clone(),
            icon_url: input.icon_url.clone(),
            app_category: input.app_category.clone(),
            categories: input.categories.clone(),
            status: input.status,
            is_featured: input.is_featured,
            rating: input.rating,
            download_count: input.download_count,
            created_at: now,
            updated_at: now,
        };

        store
            .insert(collections::APPS, &app.bundle_id, to_document(&app)?)
            .await?;

        Ok(app)
    }

    pub async fn find_by_id(
        store: &dyn DocumentStore,
        bundle_id: &str,
    ) -> Result<Option<App>, StoreError> {
        store
            .get(collections::APPS, bundle_id)
            .await?
            .map(from_document)
            .transpose()
    }

    /// Write only the supplied fields and refresh `updated_at`.
    ///
    /// Fails with [`StoreError::NotFound`] when the app does not exist.
    pub async fn update(
        store: &dyn DocumentStore,
        bundle_id: &str,
        input: &UpdateApp,
    ) -> Result<(), StoreError> {
        if store.get(collections::APPS, bundle_id).await?.is_none() {
            return Err(StoreError::NotFound {
                collection: collections::APPS.to_string(),
                id: bundle_id.to_string(),
            });
        }

        let mut fields = changed_fields(input)?;
        fields.insert("updated_at".to_string(), json!(Utc::now()));
        store.update(collections::APPS, bundle_id, fields).await
    }

    /// Delete unconditionally. Concepts and lectures referencing the app
    /// are left in place (no cascade).
    pub async fn delete(store: &dyn DocumentStore, bundle_id: &str) -> Result<(), StoreError> {
        store.delete(collections::APPS, bundle_id).await
    }

    /// All apps, newest first (admin listing).
    pub async fn list_all(store: &dyn DocumentStore) -> Result<Vec<App>, StoreError> {
        let rows = store
            .query(
                collections::APPS,
                Query::new().order_desc("created_at").limit(ADMIN_LIST_LIMIT),
            )
            .await?;
        collect(rows)
    }

    /// Published apps only, newest first (public catalog).
    pub async fn list_published(store: &dyn DocumentStore) -> Result<Vec<App>, StoreError> {
        let rows = store
            .query(
                collections::APPS,
                Query::new()
                    .filter("status", json!(AppStatus::Published))
                    .order_desc("created_at"),
            )
            .await?;
        collect(rows)
    }
}

fn collect(rows: Vec<(String, Document)>) -> Result<Vec<App>, StoreError> {
    rows.into_iter()
        .map(|(_, fields)| from_document(fields))
        .collect()
}
