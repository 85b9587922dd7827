//! The editing session owning one quote draft.
//!
//! All mutation funnels through [`EditSession::edit`], which recomputes the
//! derived state (totals and validation report) synchronously after the
//! closure runs, then reschedules the debounced autosave. Derived values are
//! pure functions of the record; recomputing them eagerly on every change is
//! linear in the item count and avoids the stale-error bugs an incremental
//! scheme would invite.
//!
//! The in-memory record is the source of truth. The draft store is a
//! best-effort mirror: a failed save is logged and the session carries on.

use std::sync::Arc;
use std::time::Duration;

use quote_core::{
    DraftStore, QuoteRecord, QuoteTotals, ValidationReport, compute_totals, load_or_default,
    validate,
};
use tokio::task::JoinHandle;

/// Quiescence interval for autosave: rapid successive edits coalesce into a
/// single write this long after the last one.
pub const AUTOSAVE_DEBOUNCE: Duration = Duration::from_secs(1);

/// One editing session over one draft key.
///
/// Must live inside a Tokio runtime; [`edit`](Self::edit) spawns the
/// autosave task.
pub struct EditSession {
    record: QuoteRecord,
    totals: QuoteTotals,
    validation: ValidationReport,
    store: Arc<dyn DraftStore>,
    key: String,
    debounce: Duration,
    /// At most one save may be outstanding; rescheduling aborts it.
    pending_save: Option<JoinHandle<()>>,
}

impl EditSession {
    /// Opens a session on `key`, restoring the stored draft when one exists
    /// and falling back to `default` otherwise (including on corrupt or
    /// unreadable stores).
    pub async fn open(
        store: Arc<dyn DraftStore>,
        key: impl Into<String>,
        default: QuoteRecord,
    ) -> Self {
        let key = key.into();
        let record = load_or_default(store.as_ref(), &key, default).await;
        let totals = compute_totals(record.items(), record.tax_rate);
        let validation = validate(&record);
        Self {
            record,
            totals,
            validation,
            store,
            key,
            debounce: AUTOSAVE_DEBOUNCE,
            pending_save: None,
        }
    }

    /// Overrides the autosave quiescence interval (hosts and tests).
    pub fn with_debounce(
        mut self,
        debounce: Duration,
    ) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn record(&self) -> &QuoteRecord {
        &self.record
    }

    /// Totals recomputed after the most recent edit. Always available, even
    /// while the record is invalid: display never blocks on validation.
    pub fn totals(&self) -> &QuoteTotals {
        &self.totals
    }

    /// Validation report recomputed after the most recent edit.
    pub fn validation(&self) -> &ValidationReport {
        &self.validation
    }

    /// Whether the record may be finalized/exported. Exactly "no validation
    /// errors"; autosave runs regardless.
    pub fn can_finalize(&self) -> bool {
        self.validation.is_valid()
    }

    /// Applies one mutation, recomputes derived state, and reschedules the
    /// debounced autosave.
    pub fn edit(
        &mut self,
        mutate: impl FnOnce(&mut QuoteRecord),
    ) {
        mutate(&mut self.record);
        self.totals = compute_totals(self.record.items(), self.record.tax_rate);
        self.validation = validate(&self.record);
        self.schedule_save();
    }

    /// Cloned snapshot for export. Consistency is snapshot-at-start only;
    /// edits made while an export reads the clone are not reflected in it.
    pub fn snapshot(&self) -> QuoteRecord {
        self.record.clone()
    }

    /// Cancels any pending autosave and writes the current state immediately.
    /// Failures are logged, matching the autosave path.
    pub async fn flush(&mut self) {
        if let Some(pending) = self.pending_save.take() {
            pending.abort();
        }
        if let Err(error) = self.store.save(&self.key, &self.record).await {
            tracing::warn!(key = %self.key, %error, "draft flush failed");
        }
    }

    /// Cancels the outstanding save task, if any, and schedules a new one
    /// carrying a snapshot of the current record. Only the snapshot alive
    /// when the quiescence interval elapses is ever written; intermediate
    /// states are dropped with their aborted tasks.
    fn schedule_save(&mut self) {
        if let Some(pending) = self.pending_save.take() {
            pending.abort();
        }

        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        let snapshot = self.record.clone();
        let debounce = self.debounce;

        self.pending_save = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if let Err(error) = store.save(&key, &snapshot).await {
                tracing::warn!(key = %key, %error, "draft autosave failed");
            }
        }));
    }
}

impl Drop for EditSession {
    fn drop(&mut self) {
        // A save racing a dropped session would write a stale snapshot the
        // host can no longer observe; hosts that want a final write call
        // flush() first.
        if let Some(pending) = self.pending_save.take() {
            pending.abort();
        }
    }
}
