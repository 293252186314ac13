//! Append-only destinations for event records.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::SinkError;

use super::types::EventRecord;

/// Append-only destination for observer event records. Records are durable
/// before `append` returns; the sink never rewrites or reorders them.
pub trait EventSink: Send {
    /// Append one record.
    fn append(&mut self, record: &EventRecord) -> Result<(), SinkError>;
}

/// Newline-delimited JSON sink over a single fixed file.
///
/// Each append opens the file, writes one line, and syncs before returning,
/// so a record is on disk before the next one is considered emitted. There
/// is exactly one writer, so no cross-pass locking is needed.
#[derive(Debug, Clone)]
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Create a sink writing to the given destination path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path of the log.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl EventSink for JsonlSink {
    fn append(&mut self, record: &EventRecord) -> Result<(), SinkError> {
        let line = serde_json::to_string(record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| SinkError::Open {
                path: self.path.display().to_string(),
                source,
            })?;

        writeln!(file, "{}", line)?;
        file.sync_all()?;
        Ok(())
    }
}

/// In-memory sink that collects records for assertions in tests.
///
/// Clones share the same backing store, so a handle kept outside the
/// observer sees everything appended inside it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Arc<Mutex<Vec<EventRecord>>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.lock().expect("lock sink records").len()
    }

    /// Whether nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all appended records, in emission order.
    pub fn records(&self) -> Vec<EventRecord> {
        self.records.lock().expect("lock sink records").clone()
    }
}

impl EventSink for RecordingSink {
    fn append(&mut self, record: &EventRecord) -> Result<(), SinkError> {
        self.records
            .lock()
            .expect("lock sink records")
            .push(record.clone());
        Ok(())
    }
}
