//! Repository for the `lectures` collection.

use chrono::Utc;
use serde_json::json;

use crate::collections;
use crate::models::lecture::{CreateLecture, Lecture, UpdateLecture};
use crate::repositories::{changed_fields, from_document, to_document, ADMIN_LIST_LIMIT};
use crate::store::{Document, DocumentStore, Query, StoreError};

pub struct LectureRepo;

impl LectureRepo {
    /// Create a lecture under a generated id. A negative duration is
    /// clamped to zero.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &CreateLecture,
    ) -> Result<Lecture, StoreError> {
        let now = Utc::now();
        let mut lecture = Lecture {
            id: String::new(),
            app_id: input.app_id.clone(),
            category: input.category.clone(),
            title: input.title.clone(),
            description: input.description.clone(),
            audio_url: input.audio_url.clone(),
            youtube_video_id: input.youtube_video_id.clone(),
            duration_seconds: input.duration_seconds.max(0),
            transcript: input.transcript.clone(),
            created_at: now,
            updated_at: now,
        };

        lecture.id = store
            .add(collections::LECTURES, to_document(&lecture)?)
            .await?;

        Ok(lecture)
    }

    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<Lecture>, StoreError> {
        match store.get(collections::LECTURES, id).await? {
            Some(fields) => {
                let mut lecture: Lecture = from_document(fields)?;
                lecture.id = id.to_string();
                Ok(Some(lecture))
            }
            None => Ok(None),
        }
    }

    /// Write only the supplied fields and refresh `updated_at`.
    ///
    /// Fails with [`StoreError::NotFound`] when the lecture does not exist.
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        input: &UpdateLecture,
    ) -> Result<(), StoreError> {
        if store.get(collections::LECTURES, id).await?.is_none() {
            return Err(StoreError::NotFound {
                collection: collections::LECTURES.to_string(),
                id: id.to_string(),
            });
        }

        let mut fields = changed_fields(input)?;
        if let Some(duration) = input.duration_seconds {
            fields.insert("duration_seconds".to_string(), json!(duration.max(0)));
        }
        fields.insert("updated_at".to_string(), json!(Utc::now()));
        store.update(collections::LECTURES, id, fields).await
    }

    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        store.delete(collections::LECTURES, id).await
    }

    /// Recent lectures across all apps, newest first (admin listing).
    pub async fn list_recent(store: &dyn DocumentStore) -> Result<Vec<Lecture>, StoreError> {
        let rows = store
            .query(
                collections::LECTURES,
                Query::new().order_desc("created_at").limit(ADMIN_LIST_LIMIT),
            )
            .await?;
        collect(rows)
    }

    /// Lectures belonging to one app, newest first.
    pub async fn list_for_app(
        store: &dyn DocumentStore,
        app_id: &str,
    ) -> Result<Vec<Lecture>, StoreError> {
        let rows = store
            .query(
                collections::LECTURES,
                Query::new().filter("app_id", app_id).order_desc("created_at"),
            )
            .await?;
        collect(rows)
    }
}

fn collect(rows: Vec<(String, Document)>) -> Result<Vec<Lecture>, StoreError> {
    rows.into_iter()
        .map(|(id, fields)| {
            let mut lecture: Lecture = from_document(fields)?;
            lecture.id = id;
            Ok(lecture)
        })
        .collect()
}
