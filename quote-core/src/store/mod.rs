//! Draft persistence boundary.
//!
//! The editing core never talks to a concrete store; it depends on the
//! [`DraftStore`] trait as an injected capability. The in-memory
//! [`QuoteRecord`] is always the source of truth — a store is a best-effort
//! mirror, so load failures fall back to a default and save failures are
//! logged, never surfaced to the editing flow.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::QuoteRecord;

/// The single well-known key the autosave path writes the current draft under.
pub const DRAFT_KEY: &str = "quote_wizard_data";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored payload could not be decoded into a record (corrupt data),
    /// or a record could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Key-value persistence for quote drafts.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Loads the draft stored under `key`, or `None` when nothing is stored.
    async fn load(
        &self,
        key: &str,
    ) -> Result<Option<QuoteRecord>, StoreError>;

    /// Durably stores `record` under `key`, replacing any previous draft.
    async fn save(
        &self,
        key: &str,
        record: &QuoteRecord,
    ) -> Result<(), StoreError>;

    /// Removes the draft under `key`, if present.
    async fn delete(
        &self,
        key: &str,
    ) -> Result<(), StoreError>;
}

/// Loads the draft under `key`, falling back to `default` when the store has
/// nothing usable. Absent and corrupt payloads both land on the fallback;
/// a failed load is logged and never propagated.
pub async fn load_or_default(
    store: &dyn DraftStore,
    key: &str,
    default: QuoteRecord,
) -> QuoteRecord {
    match store.load(key).await {
        Ok(Some(record)) => record,
        Ok(None) => default,
        Err(error) => {
            tracing::warn!(key, %error, "draft load failed, starting from default");
            default
        }
    }
}
