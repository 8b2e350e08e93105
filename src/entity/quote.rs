use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Market snapshot for one trading pair of a token, resolved for a single pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub token_address: String,
    pub symbol: String,
    pub name: String,
    pub chain_id: String,
    pub dex_id: String,
    pub pair_address: String,
    pub price_usd: f64,
    pub volume_24h_usd: f64,
    pub liquidity_usd: f64,
    pub pair_created_at: Option<DateTime<Utc>>,
    pub active_boosts: u32,
    pub url: String,
}

impl Quote {
    /// Hours since the pair was created, `None` when the creation time is unknown.
    pub fn age_hours(&self, now: DateTime<Utc>) -> Option<f64> {
        self.pair_created_at
            .map(|created| (now - created).num_seconds() as f64 / 3600.0)
    }
}
