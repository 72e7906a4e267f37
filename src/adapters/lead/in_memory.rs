//! In-memory lead sink for tests and local development.
//!
//! Records every delivered lead so tests can assert on what was captured.
//! Uses `.expect()` on lock operations; not meant for production traffic.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::DomainError;
use crate::ports::{LeadRecord, LeadSink};

/// Lead sink that keeps every record in memory.
#[derive(Default)]
pub struct InMemoryLeadSink {
    records: Mutex<Vec<LeadRecord>>,
}

impl InMemoryLeadSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All delivered records, for test assertions.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn records(&self) -> Vec<LeadRecord> {
        self.records.lock().expect("lead sink lock poisoned").clone()
    }

    /// Number of delivered records.
    pub fn count(&self) -> usize {
        self.records.lock().expect("lead sink lock poisoned").len()
    }
}

#[async_trait]
impl LeadSink for InMemoryLeadSink {
    async fn deliver(&self, record: LeadRecord) -> Result<(), DomainError> {
        self.records
            .lock()
            .expect("lead sink lock poisoned")
            .push(record);
        Ok(())
    }
}
