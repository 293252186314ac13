//! Event log module.
//!
//! This module handles:
//! - The persisted event vocabulary and record shape
//! - Append-only sinks (JSONL file, in-memory recorder for tests)

pub mod sink;
pub mod types;

pub use sink::{EventSink, JsonlSink, RecordingSink};
pub use types::{EventRecord, ObserverEvent};
