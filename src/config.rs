use crate::entity::{SentinelError, DEFAULT_ALERT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// DexScreener accepts at most this many addresses per token lookup.
pub const MAX_ADDRESSES_PER_LOOKUP: usize = 30;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Base URL of the DexScreener API
    pub dexscreener_api_url: String,

    /// Timeout applied to every outbound HTTP request
    pub request_timeout_secs: u64,

    /// Delay between two scheduled sentinel passes
    pub interval_secs: u64,

    /// Upper bound on the duration of a whole pass
    pub pass_timeout_secs: u64,

    /// Minimum time between two alerts for the same entry
    pub alert_cooldown_secs: i64,

    /// Threshold in percent for entries stored without one
    pub default_alert_threshold: f64,

    /// Addresses per DexScreener request
    pub lookup_chunk_size: usize,

    /// Run a single pass and exit instead of starting the bot
    pub run_once: bool,

    pub database_max_connections: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dexscreener_api_url: "https://api.dexscreener.com".to_string(),
            request_timeout_secs: 30,
            interval_secs: 60,
            pass_timeout_secs: 120,
            alert_cooldown_secs: 3600,
            default_alert_threshold: DEFAULT_ALERT_THRESHOLD,
            lookup_chunk_size: MAX_ADDRESSES_PER_LOOKUP,
            run_once: false,
            database_max_connections: 10,
        }
    }
}

impl Settings {
    /// Loads settings from `SENTINEL_*` environment variables on top of the defaults.
    pub fn from_env() -> Result<Self, SentinelError> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let settings: Settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::Environment::with_prefix("SENTINEL").try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings.normalized())
    }

    /// Clamps values the upstream services would reject.
    pub fn normalized(mut self) -> Self {
        self.lookup_chunk_size = self.lookup_chunk_size.clamp(1, MAX_ADDRESSES_PER_LOOKUP);
        self.request_timeout_secs = self.request_timeout_secs.max(1);
        self.interval_secs = self.interval_secs.max(1);
        self.pass_timeout_secs = self.pass_timeout_secs.max(1);
        self.alert_cooldown_secs = self.alert_cooldown_secs.max(0);
        if !self.default_alert_threshold.is_finite() || self.default_alert_threshold <= 0.0 {
            self.default_alert_threshold = DEFAULT_ALERT_THRESHOLD;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn pass_timeout(&self) -> Duration {
        Duration::from_secs(self.pass_timeout_secs)
    }

    pub fn alert_cooldown(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.alert_cooldown_secs)
    }
}
