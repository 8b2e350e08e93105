use crate::dexscreener::PriceResolver;
use crate::entity::{PassSummary, Quote, SentinelError, WatchEntry};
use crate::interactor::watchlist_store::WatchlistStore;
use crate::scoring::safety_score;
use crate::services::notification_service::NotificationSender;
use crate::view::alert_view::format_alert;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Why an entry was not evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoChatId,
    NoQuote,
    NoEntryPrice,
}

/// Result of evaluating one entry against its quote
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertDecision {
    Skip(SkipReason),
    BelowThreshold { percent_change: f64 },
    CoolingDown { percent_change: f64 },
    Alert { entry_price: f64, percent_change: f64 },
}

/// Per-entry alerting rule: one-sided pump threshold with a cooldown
#[derive(Debug, Clone, Copy)]
pub struct AlertPolicy {
    pub default_threshold: f64,
    pub cooldown: Duration,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            default_threshold: crate::entity::DEFAULT_ALERT_THRESHOLD,
            cooldown: Duration::hours(1),
        }
    }
}

impl AlertPolicy {
    pub fn evaluate(
        &self,
        entry: &WatchEntry,
        quote: Option<&Quote>,
        now: DateTime<Utc>,
    ) -> AlertDecision {
        if entry.chat_id.is_none() {
            return AlertDecision::Skip(SkipReason::NoChatId);
        }

        let Some(quote) = quote else {
            return AlertDecision::Skip(SkipReason::NoQuote);
        };

        let Some(entry_price) = entry.entry_price() else {
            return AlertDecision::Skip(SkipReason::NoEntryPrice);
        };

        let percent_change = (quote.price_usd - entry_price) / entry_price * 100.0;
        let threshold = entry.threshold_or(self.default_threshold);

        let triggered = percent_change >= threshold;
        if !triggered {
            return AlertDecision::BelowThreshold { percent_change };
        }

        if let Some(last_alerted_at) = entry.last_alerted_at {
            if now - last_alerted_at < self.cooldown {
                return AlertDecision::CoolingDown { percent_change };
            }
        }

        AlertDecision::Alert {
            entry_price,
            percent_change,
        }
    }
}

#[async_trait]
pub trait SentinelInteractor: Send + Sync {
    /// Run one monitoring pass over the whole watchlist
    async fn run_pass(&self) -> Result<PassSummary, SentinelError>;
}

pub struct SentinelInteractorImpl {
    store: Arc<dyn WatchlistStore + Send + Sync>,
    price_resolver: Arc<PriceResolver>,
    notifier: Arc<dyn NotificationSender + Send + Sync>,
    policy: AlertPolicy,
    // One pass at a time, so overlapping triggers cannot both pass the cooldown check
    pass_gate: Mutex<()>,
}

impl SentinelInteractorImpl {
    pub fn new(
        store: Arc<dyn WatchlistStore + Send + Sync>,
        price_resolver: Arc<PriceResolver>,
        notifier: Arc<dyn NotificationSender + Send + Sync>,
        policy: AlertPolicy,
    ) -> Self {
        Self {
            store,
            price_resolver,
            notifier,
            policy,
            pass_gate: Mutex::new(()),
        }
    }

    /// Run a pass using `now` as the evaluation instant
    pub async fn run_pass_at(&self, now: DateTime<Utc>) -> Result<PassSummary, SentinelError> {
        let _pass = self.pass_gate.lock().await;

        let entries = self.store.list().await.map_err(|e| {
            error!("Sentinel pass aborted, failed to load watchlist: {}", e);
            e
        })?;

        let mut summary = PassSummary {
            items_checked: entries.len(),
            ..PassSummary::default()
        };

        if entries.is_empty() {
            debug!("Watchlist is empty, nothing to check");
            return Ok(summary);
        }

        let addresses: Vec<String> = entries
            .iter()
            .map(|entry| entry.contract_address.clone())
            .collect();
        let quotes = self.price_resolver.resolve(&addresses).await;

        info!(
            "Checking {} watchlist entries against {} resolved quotes",
            entries.len(),
            quotes.len()
        );

        for entry in &entries {
            self.process_entry(entry, &quotes, now, &mut summary).await;
        }

        info!("Sentinel pass complete: {}", summary);
        Ok(summary)
    }

    async fn process_entry(
        &self,
        entry: &WatchEntry,
        quotes: &HashMap<String, Quote>,
        now: DateTime<Utc>,
        summary: &mut PassSummary,
    ) {
        let quote = quotes.get(&entry.contract_address);

        match self.policy.evaluate(entry, quote, now) {
            AlertDecision::Skip(reason) => {
                debug!("Skipping {} (#{}): {:?}", entry.symbol, entry.id, reason);
                summary.skipped += 1;
            }
            AlertDecision::BelowThreshold { percent_change } => {
                debug!(
                    "Checked {} (#{}): change {:.2}% below threshold {:.2}%",
                    entry.symbol,
                    entry.id,
                    percent_change,
                    entry.threshold_or(self.policy.default_threshold)
                );
            }
            AlertDecision::CoolingDown { percent_change } => {
                debug!(
                    "Suppressed alert for {} (#{}) at {:.2}%: cooling down",
                    entry.symbol, entry.id, percent_change
                );
                summary.cooling_down += 1;
            }
            AlertDecision::Alert {
                entry_price,
                percent_change,
            } => {
                // evaluate() only alerts when both are present
                let (Some(chat_id), Some(quote)) = (entry.chat_id, quote) else {
                    return;
                };

                let text = format_alert(
                    entry,
                    quote,
                    entry_price,
                    percent_change,
                    safety_score(quote, now),
                );

                if let Err(e) = self.notifier.send(chat_id, &text).await {
                    error!(
                        "Failed to send alert for {} (#{}) to chat {}: {}",
                        entry.symbol, entry.id, chat_id, e
                    );
                    summary.failed_sends += 1;
                    return;
                }

                info!(
                    "Alert sent for {} (#{}): +{:.2}% to chat {}",
                    entry.symbol, entry.id, percent_change, chat_id
                );
                summary.alerts_sent += 1;

                match self.store.update_last_alerted(entry.id, now).await {
                    Ok(true) => {}
                    Ok(false) => warn!(
                        "Watchlist entry #{} was removed before its alert time was saved",
                        entry.id
                    ),
                    Err(e) => {
                        error!(
                            "Failed to save alert time for entry #{}: {}",
                            entry.id, e
                        );
                        summary.failed_updates += 1;
                    }
                }
            }
        }
    }
}

#[async_trait]
impl SentinelInteractor for SentinelInteractorImpl {
    async fn run_pass(&self) -> Result<PassSummary, SentinelError> {
        self.run_pass_at(Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn entry() -> WatchEntry {
        WatchEntry {
            id: 1,
            contract_address: "TokenA".to_string(),
            symbol: "TKA".to_string(),
            name: Some("Token A".to_string()),
            network: Some("solana".to_string()),
            initial_price: Some(1.0),
            chat_id: Some(123),
            alert_threshold: Some(50.0),
            last_alerted_at: None,
            created_at: now() - Duration::days(1),
        }
    }

    fn quote(price: f64) -> Quote {
        Quote {
            token_address: "TokenA".to_string(),
            symbol: "TKA".to_string(),
            name: "Token A".to_string(),
            chain_id: "solana".to_string(),
            dex_id: "raydium".to_string(),
            pair_address: "pair".to_string(),
            price_usd: price,
            volume_24h_usd: 0.0,
            liquidity_usd: 50_000.0,
            pair_created_at: None,
            active_boosts: 0,
            url: "https://dexscreener.com/solana/pair".to_string(),
        }
    }

    fn is_alert(decision: AlertDecision) -> bool {
        matches!(decision, AlertDecision::Alert { .. })
    }

    #[test]
    fn pump_above_threshold_alerts() {
        let decision = AlertPolicy::default().evaluate(&entry(), Some(&quote(1.6)), now());
        match decision {
            AlertDecision::Alert {
                entry_price,
                percent_change,
            } => {
                assert_eq!(entry_price, 1.0);
                assert!((percent_change - 60.0).abs() < 1e-9);
            }
            other => panic!("expected alert, got {:?}", other),
        }
    }

    #[test]
    fn exact_threshold_alerts() {
        assert!(is_alert(
            AlertPolicy::default().evaluate(&entry(), Some(&quote(1.5)), now())
        ));
    }

    #[test]
    fn gain_below_threshold_does_not_alert() {
        let decision = AlertPolicy::default().evaluate(&entry(), Some(&quote(1.4)), now());
        assert!(matches!(decision, AlertDecision::BelowThreshold { .. }));
    }

    #[test]
    fn drawdowns_never_alert() {
        let mut e = entry();
        e.alert_threshold = Some(10.0);
        let decision = AlertPolicy::default().evaluate(&e, Some(&quote(0.1)), now());
        assert!(matches!(decision, AlertDecision::BelowThreshold { .. }));
    }

    #[test]
    fn missing_threshold_defaults_to_fifty_percent() {
        let mut e = entry();
        e.alert_threshold = None;
        let policy = AlertPolicy::default();

        assert!(!is_alert(policy.evaluate(&e, Some(&quote(1.49)), now())));
        assert!(is_alert(policy.evaluate(&e, Some(&quote(1.51)), now())));
    }

    #[test]
    fn zero_or_missing_entry_price_is_skipped() {
        let policy = AlertPolicy::default();
        for price in [Some(0.0), Some(-1.0), None] {
            let mut e = entry();
            e.initial_price = price;
            assert_eq!(
                policy.evaluate(&e, Some(&quote(1000.0)), now()),
                AlertDecision::Skip(SkipReason::NoEntryPrice)
            );
        }
    }

    #[test]
    fn entries_without_chat_are_skipped() {
        let mut e = entry();
        e.chat_id = None;
        assert_eq!(
            AlertPolicy::default().evaluate(&e, Some(&quote(10.0)), now()),
            AlertDecision::Skip(SkipReason::NoChatId)
        );
    }

    #[test]
    fn entries_without_quote_are_skipped() {
        assert_eq!(
            AlertPolicy::default().evaluate(&entry(), None, now()),
            AlertDecision::Skip(SkipReason::NoQuote)
        );
    }

    #[test]
    fn cooldown_suppresses_recent_alerts() {
        let policy = AlertPolicy::default();

        let mut recent = entry();
        recent.last_alerted_at = Some(now() - Duration::minutes(30));
        assert!(matches!(
            policy.evaluate(&recent, Some(&quote(1.6)), now()),
            AlertDecision::CoolingDown { .. }
        ));

        let mut stale = entry();
        stale.last_alerted_at = Some(now() - Duration::minutes(90));
        assert!(is_alert(policy.evaluate(&stale, Some(&quote(1.6)), now())));

        let mut boundary = entry();
        boundary.last_alerted_at = Some(now() - Duration::hours(1));
        assert!(is_alert(policy.evaluate(&boundary, Some(&quote(1.6)), now())));
    }
}
