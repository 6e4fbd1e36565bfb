//! Repository for the `contact_submissions` collection.

use chrono::Utc;
use serde_json::json;

use crate::collections;
use crate::models::contact_submission::{
    ContactForm, ContactSubmission, SubmissionStatus, ANONYMOUS_NAME, DEFAULT_SUBJECT,
};
use crate::repositories::{from_document, to_document, ADMIN_LIST_LIMIT};
use crate::store::{Document, DocumentStore, Query, StoreError};

pub struct ContactSubmissionRepo;

impl ContactSubmissionRepo {
    /// Persist a validated submission with status `pending` and both
    /// timestamps set. Blank name/subject fall back to placeholders.
    pub async fn create(
        store: &dyn DocumentStore,
        form: &ContactForm,
    ) -> Result<ContactSubmission, StoreError> {
        let now = Utc::now();
        let mut submission = ContactSubmission {
            id: String::new(),
            name: if form.name.is_empty() {
                ANONYMOUS_NAME.to_string()
            } else {
                form.name.clone()
            },
            email: form.email.clone(),
            subject: if form.subject.is_empty() {
                DEFAULT_SUBJECT.to_string()
            } else {
                form.subject.clone()
            },
            message: form.message.clone(),
            status: SubmissionStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        submission.id = store
            .add(collections::CONTACT_SUBMISSIONS, to_document(&submission)?)
            .await?;

        Ok(submission)
    }

    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<ContactSubmission>, StoreError> {
        match store.get(collections::CONTACT_SUBMISSIONS, id).await? {
            Some(fields) => {
                let mut submission: ContactSubmission = from_document(fields)?;
                submission.id = id.to_string();
                Ok(Some(submission))
            }
            None => Ok(None),
        }
    }

    /// Move a submission to a new triage status.
    ///
    /// Fails with [`StoreError::NotFound`] when the submission does not
    /// exist. Any transition is permitted (admin-trusted).
    pub async fn update_status(
        store: &dyn DocumentStore,
        id: &str,
        status: SubmissionStatus,
    ) -> Result<(), StoreError> {
        if store
            .get(collections::CONTACT_SUBMISSIONS, id)
            .await?
            .is_none()
        {
            return Err(StoreError::NotFound {
                collection: collections::CONTACT_SUBMISSIONS.to_string(),
                id: id.to_string(),
            });
        }

        let mut fields = Document::new();
        fields.insert("status".to_string(), json!(status));
        fields.insert("updated_at".to_string(), json!(Utc::now()));
        store
            .update(collections::CONTACT_SUBMISSIONS, id, fields)
            .await
    }

    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        store.delete(collections::CONTACT_SUBMISSIONS, id).await
    }

    /// Recent submissions, newest first (admin listing).
    pub async fn list_recent(
        store: &dyn DocumentStore,
    ) -> Result<Vec<ContactSubmission>, StoreError> {
        let rows = store
            .query(
                collections::CONTACT_SUBMISSIONS,
                Query::new().order_desc("created_at").limit(ADMIN_LIST_LIMIT),
            )
            .await?;

        rows.into_iter()
            .map(|(id, fields)| {
                let mut submission: ContactSubmission = from_document(fields)?;
                submission.id = id;
                Ok(submission)
            })
            .collect()
    }
}
