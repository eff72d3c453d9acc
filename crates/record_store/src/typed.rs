//! Typed record access on top of a [`DocumentStore`].
//!
//! Storage failures are logged here and returned unchanged.

use entities::{OwnedRecord, Record, OWNER_FIELD};
use serde::Serialize;
use serde_json::Value;

use crate::{Document, DocumentStore, StoreError, StoreResult, StoredDocument};

/// Persists `record` in its collection and returns it with the assigned id.
pub async fn insert_record<T, S>(store: &S, mut record: T) -> StoreResult<T>
where
    T: Record,
    S: DocumentStore + ?Sized,
{
    let data = to_document(T::COLLECTION, &record)?;
    let id = store
        .create(T::COLLECTION, data)
        .await
        .inspect_err(|e| tracing::error!(collection = T::COLLECTION, error = %e, "Failed to add document"))?;

    tracing::debug!(collection = T::COLLECTION, id = %id, "Document created");
    record.set_id(id);
    Ok(record)
}

/// Lists records of type `T` whose `field` equals `value`.
pub async fn records_where<T, S>(store: &S, field: &str, value: Value) -> StoreResult<Vec<T>>
where
    T: Record,
    S: DocumentStore + ?Sized,
{
    let docs = store
        .query_by_field(T::COLLECTION, field, &value)
        .await
        .inspect_err(|e| tracing::error!(collection = T::COLLECTION, error = %e, "Failed to query documents"))?;
    docs.into_iter().map(from_stored).collect()
}

/// Lists records of type `T` owned by `user_id`.
pub async fn records_owned_by<T, S>(store: &S, user_id: &str) -> StoreResult<Vec<T>>
where
    T: OwnedRecord,
    S: DocumentStore + ?Sized,
{
    records_where(store, OWNER_FIELD, Value::String(user_id.to_string())).await
}

/// Lists every record of type `T`.
pub async fn all_records<T, S>(store: &S) -> StoreResult<Vec<T>>
where
    T: Record,
    S: DocumentStore + ?Sized,
{
    let docs = store
        .enumerate(T::COLLECTION)
        .await
        .inspect_err(|e| tracing::error!(collection = T::COLLECTION, error = %e, "Failed to enumerate documents"))?;
    docs.into_iter().map(from_stored).collect()
}

/// Materializes a stored document, merging its id into the record.
pub fn from_stored<T: Record>(doc: StoredDocument) -> StoreResult<T> {
    Ok(serde_json::from_value(Value::Object(doc.into_merged()))?)
}

/// Serializes a value into a document body.
pub fn to_document<T: Serialize + ?Sized>(collection: &str, value: &T) -> StoreResult<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::invalid_document(
            collection,
            format!("expected a JSON object, got {other}"),
        )),
    }
}
