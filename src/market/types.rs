//! Market-related types for binary up/down prediction markets.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Market outcome for a binary market.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The YES side (price goes up).
    #[strum(serialize = "yes", serialize = "YES", serialize = "up", serialize = "UP")]
    #[default]
    Yes,
    /// The NO side (price goes down).
    #[strum(serialize = "no", serialize = "NO", serialize = "down", serialize = "DOWN")]
    No,
}

impl Outcome {
    /// Get the opposite outcome.
    pub fn opposite(&self) -> Self {
        match self {
            Outcome::Yes => Outcome::No,
            Outcome::No => Outcome::Yes,
        }
    }
}

/// One tradable market discovered from the listing provider.
///
/// Candidates are constructed fresh each pass and discarded at the end of
/// it; there is no identity carried across passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketCandidate {
    /// Title of the parent event (shared by sibling markets).
    pub event_title: String,
    /// Opaque condition identifier; empty when the listing omits it.
    pub condition_id: String,
    /// YES outcome token id, when resolvable.
    pub yes_token: Option<String>,
    /// NO outcome token id, when resolvable.
    pub no_token: Option<String>,
    /// ISO-8601 window end. Lexicographic order stands in for chronological
    /// order when ranking candidates.
    pub window_end: String,
}

impl MarketCandidate {
    /// Get the token id for a given outcome, if present.
    pub fn token(&self, outcome: Outcome) -> Option<&str> {
        match outcome {
            Outcome::Yes => self.yes_token.as_deref(),
            Outcome::No => self.no_token.as_deref(),
        }
    }
}

/// One event object from the listing provider.
#[derive(Debug, Clone, Deserialize)]
pub struct EventListing {
    /// Event title.
    #[serde(default)]
    pub title: Option<String>,
    /// Event-level end date (ISO format), fallback for markets without one.
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    /// Markets nested under this event.
    #[serde(default)]
    pub markets: Vec<MarketListing>,
}

/// One market object nested in a listing event.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketListing {
    /// Condition identifier.
    #[serde(rename = "conditionId")]
    pub condition_id: Option<String>,
    /// Outcome token ids, in either of the provider's two encodings.
    #[serde(rename = "clobTokenIds")]
    pub clob_token_ids: Option<TokenIdsField>,
    /// Market-level end date (ISO format).
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

/// The `clobTokenIds` field arrives either as a native array or as a
/// JSON-encoded string (`"[\"0x..\",\"0x..\"]"`). Normalized into two
/// optional slots at this boundary so the ambiguity never travels inward.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TokenIdsField {
    /// Native JSON array of token ids.
    Native(Vec<String>),
    /// JSON array encoded as a string.
    Encoded(String),
}

impl TokenIdsField {
    /// Normalize into the fixed (yes, no) slot pair, tolerating missing or
    /// short lists.
    pub fn into_pair(self) -> (Option<String>, Option<String>) {
        let ids = match self {
            TokenIdsField::Native(ids) => ids,
            TokenIdsField::Encoded(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        };
        let mut ids = ids.into_iter();
        (ids.next(), ids.next())
    }
}
