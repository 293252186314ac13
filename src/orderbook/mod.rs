//! Order book module.
//!
//! This module handles:
//! - Order book types and best-price extraction
//! - Snapshotting with degradation to the empty book

pub mod snapshot;
pub mod types;

pub use snapshot::snapshot_book;
pub use types::{OutcomeBook, PriceLevel, SideQuote};
