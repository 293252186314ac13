//! Mock market-data provider for unit testing.
//!
//! This module provides a mock provider that can be used in tests
//! without making real network requests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::MarketError;
use crate::orderbook::types::{OutcomeBook, PriceLevel};

use super::types::EventListing;
use super::MarketDataProvider;

/// Configuration for mock provider behavior.
#[derive(Debug, Clone, Default)]
pub struct MockProviderConfig {
    /// Whether to fail listing requests.
    pub fail_events: bool,
    /// Token ids whose book requests fail with a transport-style error.
    pub failing_tokens: HashSet<String>,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// Mock market-data provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    config: MockProviderConfig,
    events: Arc<Mutex<Vec<EventListing>>>,
    books: Arc<Mutex<HashMap<String, OutcomeBook>>>,
}

impl MockProvider {
    /// Create a new mock provider with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider with custom configuration.
    pub fn with_config(config: MockProviderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace the listing response.
    pub fn set_events(&self, events: Vec<EventListing>) {
        *self.events.lock().unwrap() = events;
    }

    /// Set a mock order book for a token.
    pub fn set_book(&self, book: OutcomeBook) {
        let mut books = self.books.lock().unwrap();
        books.insert(book.token_id.clone(), book);
    }

    /// Mark a token id so its book requests fail.
    pub fn fail_token(&mut self, token_id: impl Into<String>) {
        self.config.failing_tokens.insert(token_id.into());
    }

    /// Clear all mock data.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
        self.books.lock().unwrap().clear();
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    async fn active_events(&self) -> Result<Vec<EventListing>, MarketError> {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        if self.config.fail_events {
            return Err(MarketError::FetchFailed {
                what: "active events".to_string(),
                reason: "mock listing failure".to_string(),
            });
        }

        Ok(self.events.lock().unwrap().clone())
    }

    async fn order_book(&self, token_id: &str) -> Result<OutcomeBook, MarketError> {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        if self.config.failing_tokens.contains(token_id) {
            return Err(MarketError::FetchFailed {
                what: token_id.to_string(),
                reason: "mock order book failure".to_string(),
            });
        }

        let books = self.books.lock().unwrap();
        match books.get(token_id) {
            Some(book) => Ok(book.clone()),
            // Unconfigured tokens resolve to an empty book.
            None => Ok(OutcomeBook::empty(token_id)),
        }
    }
}

/// Builder for creating mock order books with common patterns.
pub struct MockBookBuilder {
    token_id: String,
    bids: Vec<PriceLevel>,
    asks: Vec<PriceLevel>,
}

impl MockBookBuilder {
    /// Create a new builder for the given token.
    pub fn new(token_id: impl Into<String>) -> Self {
        Self {
            token_id: token_id.into(),
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    /// Add a bid level.
    pub fn bid(mut self, price: Decimal, size: Decimal) -> Self {
        self.bids.push(PriceLevel::new(price, size));
        self
    }

    /// Add an ask level.
    pub fn ask(mut self, price: Decimal, size: Decimal) -> Self {
        self.asks.push(PriceLevel::new(price, size));
        self
    }

    /// Create a two-level book around the given best prices.
    pub fn with_spread(mut self, best_bid: Decimal, best_ask: Decimal, depth: Decimal) -> Self {
        self.bids = vec![
            PriceLevel::new(best_bid, depth),
            PriceLevel::new(best_bid - Decimal::new(1, 2), depth * Decimal::TWO),
        ];
        self.asks = vec![
            PriceLevel::new(best_ask, depth),
            PriceLevel::new(best_ask + Decimal::new(1, 2), depth * Decimal::TWO),
        ];
        self
    }

    /// Build the mock order book. Levels keep best-first order, matching
    /// the provider contract.
    pub fn build(mut self) -> OutcomeBook {
        self.bids.sort_by(|a, b| b.price.cmp(&a.price));
        self.asks.sort_by(|a, b| a.price.cmp(&b.price));

        OutcomeBook {
            token_id: self.token_id,
            bids: self.bids,
            asks: self.asks,
        }
    }
}
