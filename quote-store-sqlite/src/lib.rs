//! SQLite-backed [`DraftStore`].
//!
//! Drafts live in a single `drafts` table, one row per key, with the full
//! [`QuoteRecord`] serialized as a JSON payload. JSON keeps the round trip
//! exact: `Decimal` values travel as strings, item order and ids are
//! preserved, and a payload written by one version of the app reloads
//! byte-identical in the next.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use quote_core::{DraftStore, QuoteRecord, StoreError};
use sqlx::{Row, sqlite::SqlitePool};

pub struct SqliteDraftStore {
    pool: SqlitePool,
}

impl SqliteDraftStore {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .with_context(|| format!("Failed to connect to database: {}", database_url))?;
        Ok(Self { pool })
    }

    pub fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl DraftStore for SqliteDraftStore {
    async fn load(
        &self,
        key: &str,
    ) -> Result<Option<QuoteRecord>, StoreError> {
        let row = sqlx::query("SELECT payload FROM drafts WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let payload: String = row
            .try_get("payload")
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        let record = serde_json::from_str(&payload)
            .map_err(|e| StoreError::Serialization(format!("corrupt draft payload: {}", e)))?;

        tracing::debug!(key, "loaded draft");
        Ok(Some(record))
    }

    async fn save(
        &self,
        key: &str,
        record: &QuoteRecord,
    ) -> Result<(), StoreError> {
        let payload = serde_json::to_string(record)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        sqlx::query(
            "INSERT INTO drafts (key, payload, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET payload = excluded.payload,
                                            updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(&payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Storage(e.to_string()))?;

        tracing::debug!(key, bytes = payload.len(), "saved draft");
        Ok(())
    }

    async fn delete(
        &self,
        key: &str,
    ) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM drafts WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(())
    }
}
