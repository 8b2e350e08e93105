use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Threshold applied when an entry was stored without one, in percent.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 50.0;

/// A bookmarked token watched by the sentinel.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WatchEntry {
    pub id: i32,
    pub contract_address: String,
    pub symbol: String,
    pub name: Option<String>,
    pub network: Option<String>,
    pub initial_price: Option<f64>,
    pub chat_id: Option<i64>,
    pub alert_threshold: Option<f64>,
    pub last_alerted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl WatchEntry {
    /// Alert threshold in percent, falling back to `default` when unset.
    pub fn threshold_or(&self, default: f64) -> f64 {
        self.alert_threshold.unwrap_or(default)
    }

    /// Entry price usable for percent change calculation, `None` when unset or not positive.
    pub fn entry_price(&self) -> Option<f64> {
        self.initial_price.filter(|price| *price > 0.0)
    }

    /// Percent change from the entry price to `current_price`.
    pub fn percent_change(&self, current_price: f64) -> Option<f64> {
        self.entry_price()
            .map(|entry| (current_price - entry) / entry * 100.0)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.symbol)
    }
}

/// Values for a new watchlist row; the store assigns id and created_at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWatchEntry {
    pub contract_address: String,
    pub symbol: String,
    pub name: Option<String>,
    pub network: Option<String>,
    pub initial_price: Option<f64>,
    pub chat_id: Option<i64>,
    pub alert_threshold: Option<f64>,
}
