//! Market module for binary up/down prediction markets.
//!
//! This module handles:
//! - Market types and listing-response shapes
//! - Candidate selection (keyword filter, token normalization, ranking)
//! - Polymarket data/CLOB API client
//! - Mock provider for testing

use async_trait::async_trait;

use crate::error::MarketError;
use crate::orderbook::types::OutcomeBook;

pub mod client;
pub mod mock;
pub mod selector;
pub mod types;

pub use client::PolymarketClient;
pub use mock::{MockBookBuilder, MockProvider};
pub use selector::{discover_candidates, select_candidates};
pub use types::{EventListing, MarketCandidate, MarketListing, Outcome, TokenIdsField};

/// Interface the observation cycle needs from the two external data
/// providers: the market-listing service and the order-book service.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the currently active, non-closed listing events.
    async fn active_events(&self) -> Result<Vec<EventListing>, MarketError>;

    /// Fetch the order book for one outcome token. Levels are expected
    /// best-first on both sides, as delivered by the provider.
    async fn order_book(&self, token_id: &str) -> Result<OutcomeBook, MarketError>;
}
