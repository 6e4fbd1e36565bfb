//! Repository for the `concepts` collection.

use chrono::Utc;
use serde_json::json;

use crate::collections;
use crate::models::concept::{Concept, CreateConcept, UpdateConcept};
use crate::repositories::{changed_fields, from_document, to_document, ADMIN_LIST_LIMIT};
use crate::store::{Document, DocumentStore, Query, StoreError};

pub struct ConceptRepo;

impl ConceptRepo {
    /// Create a concept under a generated id.
    pub async fn create(
        store: &dyn DocumentStore,
        input: &CreateConcept,
    ) -> Result<Concept, StoreError> {
        let now = Utc::now();
        let mut concept = Concept {
            id: String::new(),
            app_id: input.app_id.clone(),
            category: input.category.clone(),
            title: input.title.clone(),
            content: input.content.clone(),
            importance: input.importance,
            keywords: input.keywords.clone(),
            study_note: input.study_note.clone(),
            related_question_ids: input.related_question_ids.clone(),
            created_at: now,
            updated_at: now,
        };

        concept.id = store
            .add(collections::CONCEPTS, to_document(&concept)?)
            .await?;

        Ok(concept)
    }

    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<Concept>, StoreError> {
        match store.get(collections::CONCEPTS, id).await? {
            Some(fields) => {
                let mut concept: Concept = from_document(fields)?;
                concept.id = id.to_string();
                Ok(Some(concept))
            }
            None => Ok(None),
        }
    }

    /// Write only the supplied fields and refresh `updated_at`.
    ///
    /// Fails with [`StoreError::NotFound`] when the concept does not exist.
    pub async fn update(
        store: &dyn DocumentStore,
        id: &str,
        input: &UpdateConcept,
    ) -> Result<(), StoreError> {
        if store.get(collections::CONCEPTS, id).await?.is_none() {
            return Err(StoreError::NotFound {
                collection: collections::CONCEPTS.to_string(),
                id: id.to_string(),
            });
        }

        let mut fields = changed_fields(input)?;
        fields.insert("updated_at".to_string(), json!(Utc::now()));
        store.update(collections::CONCEPTS, id, fields).await
    }

    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        store.delete(collections::CONCEPTS, id).await
    }

    /// Recent concepts across all apps, newest first (admin listing).
    pub async fn list_recent(store: &dyn DocumentStore) -> Result<Vec<Concept>, StoreError> {
        let rows = store
            .query(
                collections::CONCEPTS,
                Query::new().order_desc("created_at").limit(ADMIN_LIST_LIMIT),
            )
            .await?;
        collect(rows)
    }

    /// Concepts belonging to one app, newest first.
    pub async fn list_for_app(
        store: &dyn DocumentStore,
        app_id: &str,
    ) -> Result<Vec<Concept>, StoreError> {
        let rows = store
            .query(
                collections::CONCEPTS,
                Query::new().filter("app_id", app_id).order_desc("created_at"),
            )
            .await?;
        collect(rows)
    }
}

fn collect(rows: Vec<(String, Document)>) -> Result<Vec<Concept>, StoreError> {
    rows.into_iter()
        .map(|(id, fields)| {
            let mut concept: Concept = from_document(fields)?;
            concept.id = id;
            Ok(concept)
        })
        .collect()
}
