//! Document store trait definitions.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::StoreResult;

/// A JSON object body as stored in a collection.
pub type Document = Map<String, Value>;

/// A document together with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Store-assigned identifier.
    pub id: String,
    /// Document body, without the identifier.
    pub data: Document,
}

impl StoredDocument {
    /// Returns the body with the identifier merged in under `id`.
    pub fn into_merged(self) -> Document {
        let mut data = self.data;
        data.insert("id".to_string(), Value::String(self.id));
        data
    }
}

/// Trait for document storage operations.
///
/// Collections are addressed by name and created on first write. The store
/// makes no ordering guarantee for query or enumeration results.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a document and returns its generated id.
    async fn create(&self, collection: &str, data: Document) -> StoreResult<String>;

    /// Lists documents whose top-level `field` equals `value`.
    async fn query_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<StoredDocument>>;

    /// Merges `fields` into the document with the given id.
    async fn update_fields(&self, collection: &str, id: &str, fields: Document)
        -> StoreResult<()>;

    /// Deletes the document with the given id.
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;

    /// Lists every document in a collection.
    async fn enumerate(&self, collection: &str) -> StoreResult<Vec<StoredDocument>>;
}
