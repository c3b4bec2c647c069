//! In-memory recorders: one that keeps every write, one that discards them

use crate::core::{LogEvent, Recorder, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps every rendered line together with its event.
///
/// Clones share the same storage, so a test can hand one clone to a logger
/// and inspect another.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecorder {
    records: Arc<Mutex<Vec<(String, LogEvent)>>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.records.lock().iter().map(|(line, _)| line.clone()).collect()
    }

    /// Recorded events, oldest first
    pub fn events(&self) -> Vec<LogEvent> {
        self.records
            .lock()
            .iter()
            .map(|(_, event)| event.clone())
            .collect()
    }

    pub fn last_line(&self) -> Option<String> {
        self.records.lock().last().map(|(line, _)| line.clone())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Recorder for MemoryRecorder {
    fn write(&self, log: &str, event: &LogEvent) -> Result<()> {
        self.records.lock().push((log.to_string(), event.clone()));
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecorder;

impl Recorder for NullRecorder {
    fn write(&self, _log: &str, _event: &LogEvent) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
