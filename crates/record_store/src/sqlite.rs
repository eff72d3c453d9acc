//! SQLite document store implementation.

use std::str::FromStr;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use uuid::Uuid;

use crate::{Document, DocumentStore, StoreError, StoreResult, StoredDocument};

/// SQLite document store (for single-user local deployments).
///
/// Every collection shares one `documents` table; bodies are stored as JSON
/// text and equality filters are evaluated on the decoded body.
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: Pool<Sqlite>,
}

impl SqliteDocumentStore {
    /// Create a new SQLite store from an existing pool.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Connect to `database_url`, creating the file if needed, and
    /// initialize the schema.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        let store = Self::new(pool);
        store.init().await?;
        Ok(store)
    }

    /// Initialize the database table
    pub async fn init(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                body TEXT NOT NULL,
                UNIQUE (collection, id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_documents_collection
            ON documents (collection)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn load(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = ?
            ORDER BY seq
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, body)| {
                Ok(StoredDocument {
                    id,
                    data: decode_body(collection, &body)?,
                })
            })
            .collect()
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

fn decode_body(collection: &str, body: &str) -> StoreResult<Document> {
    match serde_json::from_str(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::invalid_document(
            collection,
            "stored body is not a JSON object",
        )),
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn create(&self, collection: &str, data: Document) -> StoreResult<String> {
        let id = Uuid::new_v4().to_string();
        let body = serde_json::to_string(&data)?;

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(collection)
        .bind(&id)
        .bind(body)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn query_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<StoredDocument>> {
        let docs = self.load(collection).await?;
        Ok(docs
            .into_iter()
            .filter(|d| d.data.get(field) == Some(value))
            .collect())
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT body
            FROM documents
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let (body,) = row.ok_or_else(|| StoreError::not_found(collection, id))?;
        let mut data = decode_body(collection, &body)?;
        data.extend(fields);

        sqlx::query(
            r#"
            UPDATE documents
            SET body = ?
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(serde_json::to_string(&data)?)
        .bind(collection)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(collection)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(collection, id));
        }
        Ok(())
    }

    async fn enumerate(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        self.load(collection).await
    }
}
