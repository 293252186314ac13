//! Liquidity-signal evaluation over best bid/ask quotes.

use rust_decimal::Decimal;
use serde::Serialize;
use strum::{Display, EnumString};

use crate::orderbook::types::SideQuote;

/// Coarse opportunity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum Classification {
    /// Nothing actionable this pass.
    #[strum(serialize = "no_opportunity")]
    #[serde(rename = "no_opportunity")]
    NoOpportunity,
    /// The YES spread is tight enough to warrant a closer look.
    #[strum(serialize = "potential_opportunity")]
    #[serde(rename = "potential_opportunity")]
    PotentialOpportunity,
}

/// Reason code attached to a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum Reason {
    /// Default reason for the neutral classification.
    #[strum(serialize = "placeholder_logic")]
    #[serde(rename = "placeholder_logic")]
    PlaceholderLogic,
    /// The YES spread came in under the threshold.
    #[strum(serialize = "tight_spread_detected")]
    #[serde(rename = "tight_spread_detected")]
    TightSpreadDetected,
}

/// Derived signal for one observation pass.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Condition identifier of the observed market.
    pub condition_id: String,
    /// Best bid/ask for the YES outcome.
    pub yes: SideQuote,
    /// Best bid/ask for the NO outcome.
    pub no: SideQuote,
    /// YES spread, absent unless both YES quotes are present.
    pub spread_yes: Option<Decimal>,
    /// NO spread, absent unless both NO quotes are present.
    pub spread_no: Option<Decimal>,
    /// Opportunity classification.
    pub classification: Classification,
    /// Reason code for the classification.
    pub reason: Reason,
}

/// Evaluate one market's quotes into a classified record.
///
/// Pure function of its inputs; no I/O, no retries. The only rule is the
/// placeholder tight-spread check on the YES outcome; volume, depth, and
/// skew do not participate.
pub fn evaluate(
    condition_id: &str,
    yes: SideQuote,
    no: SideQuote,
    spread_threshold: Decimal,
) -> Evaluation {
    let spread_yes = spread_for(yes);
    let spread_no = spread_for(no);

    let (classification, reason) = match spread_yes {
        Some(spread) if spread < spread_threshold => (
            Classification::PotentialOpportunity,
            Reason::TightSpreadDetected,
        ),
        _ => (Classification::NoOpportunity, Reason::PlaceholderLogic),
    };

    Evaluation {
        condition_id: condition_id.to_string(),
        yes,
        no,
        spread_yes,
        spread_no,
        classification,
        reason,
    }
}

/// Spread for one outcome: ask minus bid, rounded to 4 decimal places.
///
/// Present only when both quotes are present and non-zero; a zero quote is
/// the upstream feed's placeholder for "no price" and counts as absent.
fn spread_for(quote: SideQuote) -> Option<Decimal> {
    match (quote.bid, quote.ask) {
        (Some(bid), Some(ask)) if !bid.is_zero() && !ask.is_zero() => {
            Some((ask - bid).round_dp(4))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(bid: Decimal, ask: Decimal) -> SideQuote {
        SideQuote {
            bid: Some(bid),
            ask: Some(ask),
        }
    }

    #[test]
    fn spread_requires_both_sides() {
        assert_eq!(spread_for(quote(dec!(0.52), dec!(0.53))), Some(dec!(0.01)));
        assert_eq!(
            spread_for(SideQuote {
                bid: Some(dec!(0.52)),
                ask: None,
            }),
            None
        );
        assert_eq!(spread_for(SideQuote::default()), None);
    }

    #[test]
    fn zero_quote_counts_as_absent() {
        assert_eq!(spread_for(quote(Decimal::ZERO, dec!(0.53))), None);
        assert_eq!(spread_for(quote(dec!(0.52), Decimal::ZERO)), None);
    }

    #[test]
    fn spread_rounds_to_four_places() {
        assert_eq!(
            spread_for(quote(dec!(0.51234), dec!(0.52469))),
            Some(dec!(0.0124))
        );
    }

    #[test]
    fn spread_at_threshold_stays_neutral() {
        // 0.53 - 0.52 = 0.01, not strictly below the 0.01 threshold.
        let eval = evaluate(
            "C1",
            quote(dec!(0.52), dec!(0.53)),
            quote(dec!(0.46), dec!(0.48)),
            dec!(0.01),
        );

        assert_eq!(eval.spread_yes, Some(dec!(0.01)));
        assert_eq!(eval.spread_no, Some(dec!(0.02)));
        assert_eq!(eval.classification, Classification::NoOpportunity);
        assert_eq!(eval.reason, Reason::PlaceholderLogic);
    }

    #[test]
    fn tight_spread_reclassifies() {
        let eval = evaluate(
            "C1",
            quote(dec!(0.52), dec!(0.525)),
            quote(dec!(0.46), dec!(0.48)),
            dec!(0.01),
        );

        assert_eq!(eval.spread_yes, Some(dec!(0.005)));
        assert_eq!(eval.classification, Classification::PotentialOpportunity);
        assert_eq!(eval.reason, Reason::TightSpreadDetected);
    }

    #[test]
    fn absent_yes_spread_stays_neutral() {
        let eval = evaluate("C1", SideQuote::default(), quote(dec!(0.46), dec!(0.48)), dec!(0.01));

        assert_eq!(eval.spread_yes, None);
        assert_eq!(eval.spread_no, Some(dec!(0.02)));
        assert_eq!(eval.classification, Classification::NoOpportunity);
    }

    #[test]
    fn only_the_yes_spread_drives_classification() {
        // NO side is razor tight but does not participate in the rule.
        let eval = evaluate(
            "C1",
            quote(dec!(0.40), dec!(0.45)),
            quote(dec!(0.52), dec!(0.521)),
            dec!(0.01),
        );

        assert_eq!(eval.classification, Classification::NoOpportunity);
    }

    #[test]
    fn classification_from_string_works() {
        use std::str::FromStr;
        assert_eq!(
            Classification::from_str("no_opportunity").unwrap(),
            Classification::NoOpportunity
        );
        assert_eq!(
            Classification::from_str("potential_opportunity").unwrap(),
            Classification::PotentialOpportunity
        );
        assert_eq!(
            Reason::from_str("tight_spread_detected").unwrap(),
            Reason::TightSpreadDetected
        );
    }
}
