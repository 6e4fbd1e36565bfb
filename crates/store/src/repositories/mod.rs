//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&dyn DocumentStore` as the first argument. Repositories
//! map entity records to flat documents and back, apply creation
//! defaults, and stamp timestamps. They perform no field validation --
//! every caller except the public contact form is admin-trusted, and the
//! contact form is validated before it reaches its repository.

pub mod affiliate_ad_repo;
pub mod app_repo;
pub mod concept_repo;
pub mod contact_submission_repo;
pub mod lecture_repo;

pub use affiliate_ad_repo::AffiliateAdRepo;
pub use app_repo::AppRepo;
pub use concept_repo::ConceptRepo;
pub use contact_submission_repo::ContactSubmissionRepo;
pub use lecture_repo::LectureRepo;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::store::{Document, StoreError};

/// Page size for admin listings (newest first).
pub const ADMIN_LIST_LIMIT: u32 = 50;

/// Serialize a record into a document field map.
pub(crate) fn to_document<T: Serialize>(record: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        other => Err(StoreError::Internal(format!(
            "record did not serialize to an object: {other}"
        ))),
    }
}

/// Deserialize a document field map into a record.
pub(crate) fn from_document<T: DeserializeOwned>(fields: Document) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Serialize an update DTO into the partial field map to write. Unset
/// (`None`) fields are skipped by the DTOs' serde attributes; stray
/// nulls are dropped here so a partial update never erases a field.
pub(crate) fn changed_fields<T: Serialize>(dto: &T) -> Result<Document, StoreError> {
    Ok(to_document(dto)?
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .collect())
}
