//! Order book types and best-price extraction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Single price level in an order book.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceLevel {
    /// Price at this level.
    pub price: Decimal,
    /// Total size available at this price.
    pub size: Decimal,
}

impl PriceLevel {
    /// Create a new price level.
    pub fn new(price: Decimal, size: Decimal) -> Self {
        Self { price, size }
    }
}

/// Order book snapshot for one outcome token.
///
/// Levels are kept in the order the provider delivered them; the provider
/// contract is best price first on both sides (bids high-to-low, asks
/// low-to-high), and the core does not re-derive that order.
#[derive(Debug, Clone, Default)]
pub struct OutcomeBook {
    /// Token id this book represents; empty for a degraded book with no
    /// resolvable token.
    pub token_id: String,
    /// Bid levels, best first.
    pub bids: Vec<PriceLevel>,
    /// Ask levels, best first.
    pub asks: Vec<PriceLevel>,
}

impl OutcomeBook {
    /// An empty book for a token, the degraded result of a failed or
    /// impossible snapshot.
    pub fn empty(token_id: impl Into<String>) -> Self {
        Self {
            token_id: token_id.into(),
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    /// Get the best bid price. Absent on an empty side, never a panic.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|l| l.price)
    }

    /// Get the best ask price. Absent on an empty side, never a panic.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|l| l.price)
    }

    /// Check whether both sides are empty.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Reduce the book to its best bid/ask pair.
    pub fn quote(&self) -> SideQuote {
        SideQuote {
            bid: self.best_bid(),
            ask: self.best_ask(),
        }
    }
}

/// Best bid/ask pair for one outcome, as recorded in snapshot events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SideQuote {
    /// Best bid, absent when the bid side is empty.
    pub bid: Option<Decimal>,
    /// Best ask, absent when the ask side is empty.
    pub ask: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn price_level_creation() {
        let level = PriceLevel::new(dec!(0.50), dec!(100));
        assert_eq!(level.price, dec!(0.50));
        assert_eq!(level.size, dec!(100));
    }

    #[test]
    fn best_prices_come_from_head_of_sequence() {
        let book = OutcomeBook {
            token_id: "test".to_string(),
            bids: vec![
                PriceLevel::new(dec!(0.52), dec!(50)),
                PriceLevel::new(dec!(0.51), dec!(100)),
            ],
            asks: vec![
                PriceLevel::new(dec!(0.53), dec!(50)),
                PriceLevel::new(dec!(0.54), dec!(100)),
            ],
        };

        assert_eq!(book.best_bid(), Some(dec!(0.52)));
        assert_eq!(book.best_ask(), Some(dec!(0.53)));
        assert_eq!(
            book.quote(),
            SideQuote {
                bid: Some(dec!(0.52)),
                ask: Some(dec!(0.53)),
            }
        );
    }

    #[test]
    fn empty_book_yields_absent_prices() {
        let book = OutcomeBook::empty("T_NO");

        assert!(book.is_empty());
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
        assert_eq!(book.quote(), SideQuote::default());
    }

    #[test]
    fn one_sided_book_is_partial() {
        let book = OutcomeBook {
            token_id: "test".to_string(),
            bids: vec![PriceLevel::new(dec!(0.48), dec!(10))],
            asks: vec![],
        };

        assert!(!book.is_empty());
        assert_eq!(book.quote().bid, Some(dec!(0.48)));
        assert_eq!(book.quote().ask, None);
    }
}
