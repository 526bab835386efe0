//! Shared append-only record history

use std::sync::{Arc, Mutex};

use crate::record::LogRecord;

/// Shared handle to the captured record history.
///
/// Clones share the same underlying storage: the interceptor pushes from
/// whichever thread a facade call lands on while the UI thread snapshots
/// for rendering. Insertion order is chronological order. The history is
/// unbounded; `clear` is the only way entries leave it.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. A poisoned lock drops the record rather than
    /// panicking inside the logging path.
    pub fn push(&self, record: LogRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }

    /// Remove every record atomically.
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }

    /// Copy out the current history in insertion order.
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
