//! The observation cycle: select, snapshot, evaluate, emit, wait.

use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::ObserverError;
use crate::events::sink::EventSink;
use crate::events::types::{EventRecord, ObserverEvent};
use crate::market::selector::discover_candidates;
use crate::market::types::Outcome;
use crate::market::MarketDataProvider;
use crate::orderbook::snapshot::snapshot_book;
use crate::signal::evaluator::{evaluate, Classification};
use crate::utils::shutdown_signal;

/// Result of one observation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// A market was observed; three records were emitted in order.
    Completed {
        /// Condition id of the observed market.
        condition_id: String,
        /// Classification the pass ended with.
        classification: Classification,
    },
    /// No qualifying market this pass; nothing was emitted.
    NoMarkets,
}

/// Periodic observation agent over a market-data provider and an event sink.
///
/// Passes are strictly sequential: one pass runs to completion (or to a
/// caught error) before the next starts, and the two book fetches within a
/// pass are sequential as well.
pub struct Observer<P, S> {
    provider: P,
    sink: S,
    config: Config,
}

impl<P: MarketDataProvider, S: EventSink> Observer<P, S> {
    /// Create an observer from its collaborators and configuration.
    pub fn new(provider: P, sink: S, config: Config) -> Self {
        Self {
            provider,
            sink,
            config,
        }
    }

    /// Run passes on the fixed interval until the shutdown signal.
    ///
    /// Pass failures are caught here, logged, and treated as a skipped
    /// pass; the wait before the next pass is the same after success,
    /// no-markets, and failure. The shutdown signal is observed between
    /// passes and mid-sleep, never mid-pass.
    pub async fn run(&mut self) -> Result<(), ObserverError> {
        info!(
            poll_interval_secs = self.config.poll_interval_secs,
            events_log = %self.config.events_log_path.display(),
            "Starting observer..."
        );

        let interval = Duration::from_secs(self.config.poll_interval_secs);

        loop {
            match self.run_pass().await {
                Ok(PassOutcome::Completed {
                    condition_id,
                    classification,
                }) => {
                    debug!(
                        condition_id = %condition_id,
                        classification = %classification,
                        "pass completed"
                    );
                }
                Ok(PassOutcome::NoMarkets) => {}
                Err(e) => {
                    error!(error = %e, "main loop error");
                }
            }

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = shutdown_signal() => {
                    info!("Stopping observer...");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Execute one pass: select a market, snapshot its books, evaluate,
    /// and emit the heartbeat, snapshot, and evaluation records in that
    /// order. Consumers may rely on that ordering within a pass.
    pub async fn run_pass(&mut self) -> Result<PassOutcome, ObserverError> {
        let candidates = discover_candidates(&self.provider, &self.config).await;

        // Soonest-ending candidate wins; none means a documented no-op pass.
        let Some(candidate) = candidates.into_iter().next() else {
            info!(
                "No active {} {} markets found.",
                self.config.title_keyword_primary, self.config.timeframe_label
            );
            return Ok(PassOutcome::NoMarkets);
        };

        debug!(
            condition_id = %candidate.condition_id,
            window_end = %candidate.window_end,
            "selected market"
        );

        // Each fetch degrades to an empty book on its own; a missing token
        // or failed fetch never aborts the pass.
        let yes_book = snapshot_book(&self.provider, candidate.token(Outcome::Yes)).await;
        let no_book = snapshot_book(&self.provider, candidate.token(Outcome::No)).await;

        let evaluation = evaluate(
            &candidate.condition_id,
            yes_book.quote(),
            no_book.quote(),
            self.config.spread_threshold,
        );

        self.emit(ObserverEvent::heartbeat(&candidate))?;
        self.emit(ObserverEvent::snapshot(&evaluation))?;
        self.emit(ObserverEvent::evaluation(&evaluation))?;

        Ok(PassOutcome::Completed {
            condition_id: evaluation.condition_id,
            classification: evaluation.classification,
        })
    }

    fn emit(&mut self, event: ObserverEvent) -> Result<(), ObserverError> {
        let record = EventRecord::new(event);
        self.sink.append(&record)?;
        info!(event = %record.event, "event emitted");
        Ok(())
    }
}
