//! Polymarket API client for the listing and order-book providers.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use crate::config::Config;
use crate::error::MarketError;
use crate::orderbook::types::{OutcomeBook, PriceLevel};

use super::types::EventListing;
use super::MarketDataProvider;

/// HTTP client against the Polymarket data and CLOB APIs.
#[derive(Debug, Clone)]
pub struct PolymarketClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the listing (data) API.
    data_api_url: String,
    /// Base URL for the order-book (CLOB) API.
    clob_api_url: String,
    /// Listing page size requested per poll.
    listing_page_size: u32,
}

/// Order book response from the CLOB API.
#[derive(Debug, Clone, Deserialize)]
struct BookResponse {
    /// Bid levels, best (highest) first.
    bids: Option<Vec<RawLevel>>,
    /// Ask levels, best (lowest) first.
    asks: Option<Vec<RawLevel>>,
}

/// Single price level as delivered by the API. Price and size arrive as
/// numeric strings or plain numbers; `Decimal`'s deserializer accepts both.
#[derive(Debug, Clone, Deserialize)]
struct RawLevel {
    price: Decimal,
    #[serde(default)]
    size: Decimal,
}

impl PolymarketClient {
    /// Create a new client from config with explicit timeouts.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(
                config.http_connect_timeout_ms,
            ))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            data_api_url: config.data_api_url.clone(),
            clob_api_url: config.clob_api_url.clone(),
            listing_page_size: config.listing_page_size,
        }
    }

    /// Get the listing base URL.
    pub fn data_api_url(&self) -> &str {
        &self.data_api_url
    }

    /// Get the CLOB base URL.
    pub fn clob_api_url(&self) -> &str {
        &self.clob_api_url
    }

    fn convert_book(token_id: &str, response: BookResponse) -> OutcomeBook {
        let to_levels = |levels: Option<Vec<RawLevel>>| -> Vec<PriceLevel> {
            levels
                .unwrap_or_default()
                .into_iter()
                .map(|l| PriceLevel::new(l.price, l.size))
                .collect()
        };

        OutcomeBook {
            token_id: token_id.to_string(),
            bids: to_levels(response.bids),
            asks: to_levels(response.asks),
        }
    }
}

#[async_trait]
impl MarketDataProvider for PolymarketClient {
    /// Query active, non-closed events with a bounded page size.
    #[instrument(skip(self))]
    async fn active_events(&self) -> Result<Vec<EventListing>, MarketError> {
        let url = format!("{}/events", self.data_api_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("active", "true".to_string()),
                ("closed", "false".to_string()),
                ("limit", self.listing_page_size.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MarketError::FetchFailed {
                what: "active events".to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        response
            .json()
            .await
            .map_err(|e| MarketError::ParseError(format!("listing response: {}", e)))
    }

    #[instrument(skip(self), fields(token_id = %token_id))]
    async fn order_book(&self, token_id: &str) -> Result<OutcomeBook, MarketError> {
        let url = format!("{}/book", self.clob_api_url);

        let response = self
            .http
            .get(&url)
            .query(&[("token_id", token_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MarketError::FetchFailed {
                what: token_id.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let book: BookResponse = response
            .json()
            .await
            .map_err(|e| MarketError::ParseError(format!("order book: {}", e)))?;

        Ok(Self::convert_book(token_id, book))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn client_creation_works() {
        let config = Config::default();
        let client = PolymarketClient::new(&config);
        assert_eq!(client.data_api_url(), "https://data-api.polymarket.com");
        assert_eq!(client.clob_api_url(), "https://clob.polymarket.com");
    }

    #[test]
    fn convert_book_keeps_provider_order() {
        let response: BookResponse = serde_json::from_str(
            r#"{"bids":[{"price":"0.52","size":"100"},{"price":"0.51","size":"40"}],
                "asks":[{"price":"0.53","size":"25"}]}"#,
        )
        .unwrap();

        let book = PolymarketClient::convert_book("T_YES", response);
        assert_eq!(book.token_id, "T_YES");
        assert_eq!(book.best_bid(), Some(dec!(0.52)));
        assert_eq!(book.best_ask(), Some(dec!(0.53)));
        assert_eq!(book.bids[1].price, dec!(0.51));
    }

    #[test]
    fn convert_book_accepts_numeric_prices() {
        let response: BookResponse =
            serde_json::from_str(r#"{"bids":[{"price":0.48,"size":10}],"asks":[]}"#).unwrap();

        let book = PolymarketClient::convert_book("T_NO", response);
        assert_eq!(book.best_bid(), Some(dec!(0.48)));
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn convert_book_tolerates_missing_sides() {
        let response: BookResponse = serde_json::from_str("{}").unwrap();

        let book = PolymarketClient::convert_book("T_YES", response);
        assert!(book.is_empty());
    }
}
