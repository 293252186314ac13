//! Observation-only agent for "Bitcoin Up or Down" markets on Polymarket.
//!
//! Every pass of the observer discovers the currently active up/down
//! market, snapshots the order books of its two outcome tokens, reduces
//! them to a spread signal, and appends three structured records to a
//! durable JSONL log:
//!
//! ```text
//! AnalysisHeartbeat    -> which market is being analyzed
//! MarketSnapshot       -> best bid/ask and spreads for both outcomes
//! OpportunityEvaluation -> placeholder tight-spread classification
//! ```
//!
//! There is no trading action. Every stage degrades on partial failure
//! (empty candidate set, empty book, skipped pass) rather than halting the
//! process; the only way out is the shutdown signal.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`market`]: Candidate selection and the Polymarket data/CLOB client
//! - [`orderbook`]: Order book types and snapshotting
//! - [`signal`]: Spread computation and classification
//! - [`events`]: Persisted event vocabulary and the JSONL sink
//! - [`observer`]: The poll-select-snapshot-evaluate-log cycle
//! - [`utils`]: Utility functions

pub mod config;
pub mod error;
pub mod events;
pub mod market;
pub mod observer;
pub mod orderbook;
pub mod signal;
pub mod utils;

pub use config::Config;
pub use error::{ObserverError, Result};
pub use observer::{Observer, PassOutcome};
