//! The document-store trait and its error/query types.

use async_trait::async_trait;
use serde_json::Value;

/// Flat field map of a stored document.
pub type Document = serde_json::Map<String, Value>;

/// Errors surfaced by a [`DocumentStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The addressed document does not exist.
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// A document already exists under the given id.
    #[error("document already exists: {collection}/{id}")]
    AlreadyExists { collection: String, id: String },

    #[error("Firestore error: {0}")]
    Firestore(#[from] firestore::errors::FirestoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Internal(String),
}

/// Sort direction for [`Query::order_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Declarative read query: equality filters, optional ordering, optional
/// limit. This is the entire query surface the catalog needs; anything
/// richer (array membership, ranges) is filtered by the caller.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filters: Vec<(String, Value)>,
    pub order_by: Option<(String, Direction)>,
    pub limit: Option<u32>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only documents whose `field` equals `value`.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn order_asc(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some((field.into(), Direction::Ascending));
        self
    }

    pub fn order_desc(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some((field.into(), Direction::Descending));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A schemaless key-document store: collections of documents addressed
/// by string id, with query-by-field, ordering, and limit support.
///
/// The production implementation wraps Firestore; tests inject
/// [`crate::MemoryStore`]. Semantics shared by all implementations:
///
/// - `insert` fails on an existing id; `update` fails on a missing one.
/// - `update` writes only the supplied fields (partial semantics).
/// - `delete` is idempotent -- a missing document is not an error.
/// - Concurrent writers race at last-write-wins; there is no
///   transactional guarantee across documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document's fields, or `None` if it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Create a document under the given id.
    async fn insert(&self, collection: &str, id: &str, fields: Document)
        -> Result<(), StoreError>;

    /// Create a document under a freshly generated id and return the id.
    async fn add(&self, collection: &str, fields: Document) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().simple().to_string();
        self.insert(collection, &id, fields).await?;
        Ok(id)
    }

    /// Write only the given fields of an existing document.
    async fn update(&self, collection: &str, id: &str, fields: Document)
        -> Result<(), StoreError>;

    /// Delete a document unconditionally.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Run a [`Query`] and return `(id, fields)` pairs.
    async fn query(
        &self,
        collection: &str,
        query: Query,
    ) -> Result<Vec<(String, Document)>, StoreError>;

    /// Cheap reachability probe for the health endpoint.
    async fn health_check(&self) -> Result<(), StoreError>;
}
