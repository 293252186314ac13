//! Observer configuration loaded from environment variables.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Immutable observer configuration, loaded once at process start.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Polling ===
    /// Seconds between observation passes. The wait is uniform: it applies
    /// after successful, empty, and failed passes alike.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    // === Market selection ===
    /// First keyword an event title must contain (case-sensitive).
    #[serde(default = "default_keyword_primary")]
    pub title_keyword_primary: String,

    /// Second keyword an event title must contain (case-sensitive).
    #[serde(default = "default_keyword_secondary")]
    pub title_keyword_secondary: String,

    /// Label for the market window used in log notices (e.g. "15m").
    #[serde(default = "default_timeframe_label")]
    pub timeframe_label: String,

    /// Maximum listing page size requested from the data provider.
    #[serde(default = "default_listing_page_size")]
    pub listing_page_size: u32,

    // === Signal ===
    /// A YES spread strictly below this reclassifies the pass as a
    /// potential opportunity.
    #[serde(default = "default_spread_threshold")]
    pub spread_threshold: Decimal,

    // === Endpoints ===
    /// Data API base URL (market listings).
    #[serde(default = "default_data_api_url")]
    pub data_api_url: String,

    /// CLOB API base URL (order books).
    #[serde(default = "default_clob_api_url")]
    pub clob_api_url: String,

    // === Event sink ===
    /// Destination of the append-only event log, fixed for the process
    /// lifetime.
    #[serde(default = "default_events_log_path")]
    pub events_log_path: PathBuf,

    // === HTTP ===
    /// Per-request timeout in milliseconds for both providers.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_ms: u64,

    /// Connection-establishment timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout")]
    pub http_connect_timeout_ms: u64,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_poll_interval() -> u64 {
    5
}

fn default_keyword_primary() -> String {
    "Bitcoin".to_string()
}

fn default_keyword_secondary() -> String {
    "Up or Down".to_string()
}

fn default_timeframe_label() -> String {
    "15m".to_string()
}

fn default_listing_page_size() -> u32 {
    100
}

fn default_spread_threshold() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

fn default_data_api_url() -> String {
    "https://data-api.polymarket.com".to_string()
}

fn default_clob_api_url() -> String {
    "https://clob.polymarket.com".to_string()
}

fn default_events_log_path() -> PathBuf {
    PathBuf::from("events.jsonl")
}

fn default_http_timeout() -> u64 {
    10_000
}

fn default_http_connect_timeout() -> u64 {
    5_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.poll_interval_secs == 0 {
            return Err("POLL_INTERVAL_SECS must be at least 1".to_string());
        }

        if self.title_keyword_primary.is_empty() || self.title_keyword_secondary.is_empty() {
            return Err("title keywords must be non-empty".to_string());
        }

        if self.spread_threshold <= Decimal::ZERO {
            return Err("SPREAD_THRESHOLD must be positive".to_string());
        }

        if self.listing_page_size == 0 {
            return Err("LISTING_PAGE_SIZE must be at least 1".to_string());
        }

        for (name, value) in [
            ("DATA_API_URL", &self.data_api_url),
            ("CLOB_API_URL", &self.clob_api_url),
        ] {
            url::Url::parse(value).map_err(|e| format!("{} is not a valid URL: {}", name, e))?;
        }

        if self.events_log_path.as_os_str().is_empty() {
            return Err("EVENTS_LOG_PATH must be non-empty".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            title_keyword_primary: default_keyword_primary(),
            title_keyword_secondary: default_keyword_secondary(),
            timeframe_label: default_timeframe_label(),
            listing_page_size: default_listing_page_size(),
            spread_threshold: default_spread_threshold(),
            data_api_url: default_data_api_url(),
            clob_api_url: default_clob_api_url(),
            events_log_path: default_events_log_path(),
            http_timeout_ms: default_http_timeout(),
            http_connect_timeout_ms: default_http_connect_timeout(),
            rust_log: default_log_level(),
        }
    }
}
