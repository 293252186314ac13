//! Book snapshotting with per-token degradation.

use tracing::warn;

use crate::market::MarketDataProvider;

use super::types::OutcomeBook;

/// Snapshot the order book for one outcome token.
///
/// An absent token id or any fetch failure (transport, status, malformed
/// body) degrades to an empty book; snapshotting never aborts the pass.
pub async fn snapshot_book<P: MarketDataProvider + ?Sized>(
    provider: &P,
    token_id: Option<&str>,
) -> OutcomeBook {
    let Some(token_id) = token_id else {
        return OutcomeBook::default();
    };

    match provider.order_book(token_id).await {
        Ok(book) => book,
        Err(e) => {
            warn!(token_id = %token_id, error = %e, "order book fetch degraded to empty");
            OutcomeBook::empty(token_id)
        }
    }
}
