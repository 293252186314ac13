//! Structured event records appended to the durable log.

use rust_decimal::Decimal;
use serde::Serialize;
use strum::Display;
use time::OffsetDateTime;

use crate::market::types::MarketCandidate;
use crate::orderbook::types::SideQuote;
use crate::signal::evaluator::{Classification, Evaluation, Reason};

/// Fixed status carried by every heartbeat.
pub const STATUS_ANALYZING: &str = "analyzing";

/// Type-specific payload of a persisted event. The `event` tag makes each
/// record self-describing.
#[derive(Debug, Clone, Serialize, Display)]
#[serde(tag = "event")]
pub enum ObserverEvent {
    /// The cycle is analyzing a selected market.
    AnalysisHeartbeat {
        /// Event title of the observed market.
        market: String,
        /// Condition identifier.
        condition_id: String,
        /// ISO-8601 window end of the observed market.
        window_end: String,
        /// Fixed "analyzing" status.
        status: String,
    },
    /// Raw best bid/ask and spreads for both outcomes.
    MarketSnapshot {
        /// Condition identifier.
        condition_id: String,
        /// YES-outcome quotes.
        yes: SideQuote,
        /// NO-outcome quotes.
        no: SideQuote,
        /// YES spread, absent when either side was missing.
        spread_yes: Option<Decimal>,
        /// NO spread, absent when either side was missing.
        spread_no: Option<Decimal>,
    },
    /// Outcome of the placeholder opportunity check.
    OpportunityEvaluation {
        /// Condition identifier.
        condition_id: String,
        /// Classification tag.
        result: Classification,
        /// Reason code.
        reason: Reason,
    },
}

impl ObserverEvent {
    /// Heartbeat for the market selected this pass.
    pub fn heartbeat(candidate: &MarketCandidate) -> Self {
        ObserverEvent::AnalysisHeartbeat {
            market: candidate.event_title.clone(),
            condition_id: candidate.condition_id.clone(),
            window_end: candidate.window_end.clone(),
            status: STATUS_ANALYZING.to_string(),
        }
    }

    /// Snapshot of the quotes and spreads behind an evaluation.
    pub fn snapshot(evaluation: &Evaluation) -> Self {
        ObserverEvent::MarketSnapshot {
            condition_id: evaluation.condition_id.clone(),
            yes: evaluation.yes,
            no: evaluation.no,
            spread_yes: evaluation.spread_yes,
            spread_no: evaluation.spread_no,
        }
    }

    /// Classification result of an evaluation.
    pub fn evaluation(evaluation: &Evaluation) -> Self {
        ObserverEvent::OpportunityEvaluation {
            condition_id: evaluation.condition_id.clone(),
            result: evaluation.classification,
            reason: evaluation.reason,
        }
    }
}

/// One persisted unit of the event log: a self-describing payload plus the
/// UTC emission timestamp. Records are appended, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    /// Type-specific payload, flattened alongside the tag.
    #[serde(flatten)]
    pub event: ObserverEvent,
    /// Emission time, RFC 3339.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl EventRecord {
    /// Stamp a payload with the current UTC time.
    pub fn new(event: ObserverEvent) -> Self {
        Self {
            event,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}
