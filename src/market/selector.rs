//! Candidate selection from the market listing.

use tracing::{debug, warn};

use crate::config::Config;

use super::types::{EventListing, MarketCandidate};
use super::MarketDataProvider;

/// Filter listing events into ranked market candidates.
///
/// An event qualifies when its title contains both keywords (case-sensitive
/// substring match); every market nested in a qualifying event becomes a
/// candidate carrying the event title. Candidates are ordered by ascending
/// window end; within the same window they keep the source order of the
/// listing. A market's own end date wins over the parent event's.
pub fn select_candidates(
    events: Vec<EventListing>,
    primary: &str,
    secondary: &str,
) -> Vec<MarketCandidate> {
    let mut candidates = Vec::new();

    for event in events {
        let title = event.title.unwrap_or_default();
        if !(title.contains(primary) && title.contains(secondary)) {
            continue;
        }

        for market in event.markets {
            let (yes_token, no_token) = market
                .clob_token_ids
                .map(|field| field.into_pair())
                .unwrap_or((None, None));

            candidates.push(MarketCandidate {
                event_title: title.clone(),
                condition_id: market.condition_id.unwrap_or_default(),
                yes_token,
                no_token,
                window_end: market
                    .end_date
                    .or_else(|| event.end_date.clone())
                    .unwrap_or_default(),
            });
        }
    }

    // Stable sort: soonest-ending first, listing order preserved within ties.
    candidates.sort_by(|a, b| a.window_end.cmp(&b.window_end));
    candidates
}

/// Fetch the listing and reduce it to ranked candidates.
///
/// Any transport or parse failure against the listing provider is caught
/// and logged here, yielding an empty candidate set for the pass; it never
/// propagates upward.
pub async fn discover_candidates<P: MarketDataProvider + ?Sized>(
    provider: &P,
    config: &Config,
) -> Vec<MarketCandidate> {
    let events = match provider.active_events().await {
        Ok(events) => events,
        Err(e) => {
            warn!(error = %e, "error fetching markets");
            return Vec::new();
        }
    };

    let candidates = select_candidates(
        events,
        &config.title_keyword_primary,
        &config.title_keyword_secondary,
    );

    debug!(count = candidates.len(), "candidate markets after filter");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::types::{MarketListing, TokenIdsField};

    fn listing_event(title: &str, end: Option<&str>, markets: Vec<MarketListing>) -> EventListing {
        EventListing {
            title: Some(title.to_string()),
            end_date: end.map(str::to_string),
            markets,
        }
    }

    fn listing_market(condition_id: &str, tokens: &[&str], end: Option<&str>) -> MarketListing {
        MarketListing {
            condition_id: Some(condition_id.to_string()),
            clob_token_ids: Some(TokenIdsField::Native(
                tokens.iter().map(|t| t.to_string()).collect(),
            )),
            end_date: end.map(str::to_string),
        }
    }

    #[test]
    fn selects_only_events_with_both_keywords() {
        let events = vec![
            listing_event(
                "Bitcoin Up or Down 1:00-1:15PM",
                Some("2024-01-01T13:15:00Z"),
                vec![listing_market("C1", &["T_YES", "T_NO"], None)],
            ),
            listing_event(
                "Bitcoin price above $100k",
                Some("2024-01-01T13:15:00Z"),
                vec![listing_market("C2", &["A", "B"], None)],
            ),
            listing_event(
                "Ethereum Up or Down 1:00-1:15PM",
                Some("2024-01-01T13:15:00Z"),
                vec![listing_market("C3", &["A", "B"], None)],
            ),
        ];

        let candidates = select_candidates(events, "Bitcoin", "Up or Down");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].condition_id, "C1");
        assert_eq!(candidates[0].yes_token.as_deref(), Some("T_YES"));
        assert_eq!(candidates[0].no_token.as_deref(), Some("T_NO"));
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        let events = vec![listing_event(
            "bitcoin up or down",
            None,
            vec![listing_market("C1", &["A", "B"], None)],
        )];

        assert!(select_candidates(events, "Bitcoin", "Up or Down").is_empty());
    }

    #[test]
    fn all_nested_markets_become_candidates_in_source_order() {
        let events = vec![listing_event(
            "Bitcoin Up or Down 1:00-1:15PM",
            Some("2024-01-01T13:15:00Z"),
            vec![
                listing_market("C1", &["A1", "B1"], None),
                listing_market("C2", &["A2", "B2"], None),
            ],
        )];

        let candidates = select_candidates(events, "Bitcoin", "Up or Down");

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].condition_id, "C1");
        assert_eq!(candidates[1].condition_id, "C2");
        assert_eq!(candidates[0].event_title, candidates[1].event_title);
    }

    #[test]
    fn candidates_rank_by_ascending_window_end() {
        let events = vec![
            listing_event(
                "Bitcoin Up or Down 1:15-1:30PM",
                None,
                vec![listing_market("LATER", &["A", "B"], Some("2024-01-01T13:30:00Z"))],
            ),
            listing_event(
                "Bitcoin Up or Down 1:00-1:15PM",
                None,
                vec![listing_market("SOONER", &["A", "B"], Some("2024-01-01T13:15:00Z"))],
            ),
        ];

        let candidates = select_candidates(events, "Bitcoin", "Up or Down");

        assert_eq!(candidates[0].condition_id, "SOONER");
        assert_eq!(candidates[1].condition_id, "LATER");
    }

    #[test]
    fn market_end_date_falls_back_to_event() {
        let events = vec![listing_event(
            "Bitcoin Up or Down 1:00-1:15PM",
            Some("2024-01-01T13:15:00Z"),
            vec![listing_market("C1", &["A", "B"], None)],
        )];

        let candidates = select_candidates(events, "Bitcoin", "Up or Down");

        assert_eq!(candidates[0].window_end, "2024-01-01T13:15:00Z");
    }

    #[test]
    fn missing_token_field_leaves_both_slots_empty() {
        let events = vec![listing_event(
            "Bitcoin Up or Down 1:00-1:15PM",
            Some("2024-01-01T13:15:00Z"),
            vec![MarketListing {
                condition_id: Some("C1".to_string()),
                clob_token_ids: None,
                end_date: None,
            }],
        )];

        let candidates = select_candidates(events, "Bitcoin", "Up or Down");

        assert_eq!(candidates[0].yes_token, None);
        assert_eq!(candidates[0].no_token, None);
    }
}
