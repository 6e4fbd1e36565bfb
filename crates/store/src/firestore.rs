//! Firestore-backed [`DocumentStore`].
//!
//! Documents travel as `serde_json` field maps; Firestore's native
//! timestamp values become RFC 3339 strings on read, so documents
//! written by older tooling with native timestamps read back cleanly.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use firestore::{FirestoreDb, FirestoreDocument, FirestoreQueryDirection};
use gcloud_sdk::google::firestore::v1 as firestore_v1;
use serde_json::Value;
use tokio_stream::StreamExt;
use tracing::info;

use crate::store::{Direction, Document, DocumentStore, Query, StoreError};

/// Live Firestore client.
///
/// Constructed once at startup and shared via `Arc`; construction uses
/// application-default credentials and fails fast when they are missing.
pub struct FirestoreStore {
    db: FirestoreDb,
}

impl FirestoreStore {
    /// Connect to the Firestore database of the given GCP project.
    pub async fn connect(project_id: &str) -> Result<Self, StoreError> {
        let db = FirestoreDb::new(project_id).await?;
        info!(project_id, "Connected to Firestore");
        Ok(Self { db })
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let doc: Option<FirestoreDocument> = self
            .db
            .fluent()
            .select()
            .by_id_in(collection)
            .one(id)
            .await?;

        doc.map(|d| document_fields(&d)).transpose()
    }

    async fn insert(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<(), StoreError> {
        let result = self
            .db
            .fluent()
            .insert()
            .into(collection)
            .document_id(id)
            .object(&Value::Object(fields))
            .execute::<Value>()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(firestore::errors::FirestoreError::DataConflictError(_)) => {
                Err(StoreError::AlreadyExists {
                    collection: collection.to_string(),
                    id: id.to_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<(), StoreError> {
        let field_paths: Vec<String> = fields.keys().cloned().collect();

        self.db
            .fluent()
            .update()
            .fields(field_paths)
            .in_col(collection)
            .document_id(id)
            .object(&Value::Object(fields))
            .execute::<Value>()
            .await?;

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.db
            .fluent()
            .delete()
            .from(collection)
            .document_id(id)
            .execute()
            .await?;

        Ok(())
    }

    async fn query(
        &self,
        collection: &str,
        query: Query,
    ) -> Result<Vec<(String, Document)>, StoreError> {
        let mut builder = self.db.fluent().select().from(collection);

        if !query.filters.is_empty() {
            builder = builder.filter(|q| {
                q.for_all(
                    query
                        .filters
                        .iter()
                        .map(|(field, value)| q.field(field.as_str()).eq(value.clone()))
                        .collect::<Vec<_>>(),
                )
            });
        }

        if let Some((field, direction)) = &query.order_by {
            let dir = match direction {
                Direction::Ascending => FirestoreQueryDirection::Ascending,
                Direction::Descending => FirestoreQueryDirection::Descending,
            };
            builder = builder.order_by([(field.as_str(), dir)]);
        }

        if let Some(limit) = query.limit {
            builder = builder.limit(limit);
        }

        let mut stream = builder.stream_query_with_errors().await?;
        let mut results = Vec::new();

        while let Some(doc) = stream.try_next().await? {
            let id = doc
                .name
                .split('/')
                .next_back()
                .unwrap_or_default()
                .to_string();
            results.push((id, document_fields(&doc)?));
        }

        Ok(results)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        // A limit-1 listing is the cheapest round trip the API offers.
        self.db
            .fluent()
            .select()
            .from(crate::collections::APPS)
            .limit(1)
            .stream_query_with_errors()
            .await?
            .try_next()
            .await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Wire value conversion
// ---------------------------------------------------------------------------

/// Convert a Firestore document's fields into a JSON field map.
fn document_fields(doc: &FirestoreDocument) -> Result<Document, StoreError> {
    let mut fields = Document::new();
    for (name, value) in &doc.fields {
        fields.insert(name.clone(), proto_to_json(value.clone())?);
    }
    Ok(fields)
}

/// Convert a Firestore wire value into a `serde_json` value. Native
/// timestamps become RFC 3339 strings.
fn proto_to_json(value: firestore_v1::Value) -> Result<Value, StoreError> {
    Ok(match value.value_type {
        Some(vt) => match vt {
            firestore_v1::value::ValueType::StringValue(s) => Value::String(s),
            firestore_v1::value::ValueType::IntegerValue(i) => Value::Number(i.into()),
            firestore_v1::value::ValueType::DoubleValue(d) => serde_json::Number::from_f64(d)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            firestore_v1::value::ValueType::BooleanValue(b) => Value::Bool(b),
            firestore_v1::value::ValueType::TimestampValue(ts) => {
                let dt = Utc
                    .timestamp_opt(ts.seconds, ts.nanos as u32)
                    .single()
                    .ok_or_else(|| StoreError::Internal("invalid timestamp".to_string()))?;
                Value::String(dt.to_rfc3339())
            }
            firestore_v1::value::ValueType::MapValue(mv) => {
                let map = mv
                    .fields
                    .into_iter()
                    .map(|(k, v)| proto_to_json(v).map(|v| (k, v)))
                    .collect::<Result<serde_json::Map<_, _>, _>>()?;
                Value::Object(map)
            }
            firestore_v1::value::ValueType::ArrayValue(av) => {
                let arr = av
                    .values
                    .into_iter()
                    .map(proto_to_json)
                    .collect::<Result<Vec<_>, _>>()?;
                Value::Array(arr)
            }
            firestore_v1::value::ValueType::NullValue(_) => Value::Null,
            _ => Value::Null,
        },
        None => Value::Null,
    })
}
