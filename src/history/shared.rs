use crate::history::ledger::ConversionHistory;
use crate::history::record::ConversionRecord;
use std::sync::{Arc, Mutex, MutexGuard};

/// A history appended to from several threads.
///
/// Appends are serialized by the lock so every reader sees one total order.
#[derive(Debug, Clone, Default)]
pub struct SharedHistory {
    inner: Arc<Mutex<ConversionHistory>>,
}

impl SharedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, record: ConversionRecord) {
        self.lock().append(record);
    }

    /// Ordered copy of the records at this instant
    pub fn snapshot(&self) -> Vec<ConversionRecord> {
        self.lock().all().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Appends are a single push, so a poisoned lock still holds a consistent history
    fn lock(&self) -> MutexGuard<'_, ConversionHistory> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<ConversionHistory> for SharedHistory {
    fn from(history: ConversionHistory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(history)),
        }
    }
}
