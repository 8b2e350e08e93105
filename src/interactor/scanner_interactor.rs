use crate::dexscreener::{MarketDataClient, PriceResolver};
use crate::entity::{Quote, SentinelError, TokenProfile};
use crate::scoring::rank_by_safety;
use crate::utils::validate_token_address;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use std::collections::HashSet;
use std::sync::Arc;

/// Chains the trending scanner covers
pub const SCANNED_CHAINS: [&str; 2] = ["solana", "base"];

/// Most tokens the trending scanner prices per run
pub const MAX_SCANNED_TOKENS: usize = 90;

#[async_trait]
pub trait ScannerInteractor: Send + Sync {
    /// Best quote for a single token
    async fn get_token_quote(&self, token_address: &str) -> Result<Quote>;
    /// Boosted and freshly listed tokens, safest first
    async fn get_trending(&self) -> Result<Vec<Quote>>;
}

pub struct ScannerInteractorImpl {
    market_data: Arc<dyn MarketDataClient + Send + Sync>,
    price_resolver: Arc<PriceResolver>,
}

impl ScannerInteractorImpl {
    pub fn new(
        market_data: Arc<dyn MarketDataClient + Send + Sync>,
        price_resolver: Arc<PriceResolver>,
    ) -> Self {
        Self {
            market_data,
            price_resolver,
        }
    }
}

/// Distinct addresses on scanned chains, in feed order, capped at `MAX_SCANNED_TOKENS`.
pub fn trending_addresses(profiles: &[TokenProfile]) -> Vec<String> {
    let mut seen = HashSet::new();
    profiles
        .iter()
        .filter(|p| SCANNED_CHAINS.contains(&p.chain_id.as_str()))
        .filter(|p| seen.insert(p.token_address.as_str()))
        .map(|p| p.token_address.clone())
        .take(MAX_SCANNED_TOKENS)
        .collect()
}

#[async_trait]
impl ScannerInteractor for ScannerInteractorImpl {
    async fn get_token_quote(&self, token_address: &str) -> Result<Quote> {
        let token_address = token_address.trim();
        if !validate_token_address(token_address) {
            return Err(SentinelError::InvalidAddress.into());
        }

        self.price_resolver
            .resolve_one(token_address)
            .await
            .ok_or_else(|| SentinelError::TokenNotFound(token_address.to_string()).into())
    }

    async fn get_trending(&self) -> Result<Vec<Quote>> {
        let (boosted, latest) = futures::join!(
            self.market_data.top_boosted_tokens(),
            self.market_data.latest_token_profiles()
        );

        let mut profiles = boosted.unwrap_or_else(|e| {
            warn!("Failed to fetch boosted tokens: {}", e);
            Vec::new()
        });
        profiles.extend(latest.unwrap_or_else(|e| {
            warn!("Failed to fetch latest token profiles: {}", e);
            Vec::new()
        }));

        let addresses = trending_addresses(&profiles);
        let mut quotes: Vec<Quote> = self
            .price_resolver
            .resolve(&addresses)
            .await
            .into_values()
            .collect();

        rank_by_safety(&mut quotes, Utc::now());
        info!("Trending scan ranked {} tokens", quotes.len());

        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(chain: &str, address: &str) -> TokenProfile {
        TokenProfile {
            chain_id: chain.to_string(),
            token_address: address.to_string(),
            url: None,
        }
    }

    #[test]
    fn trending_addresses_filter_chains_and_dedupe() {
        let profiles = vec![
            profile("solana", "a"),
            profile("ethereum", "b"),
            profile("base", "c"),
            profile("solana", "a"),
        ];

        assert_eq!(
            trending_addresses(&profiles),
            vec!["a".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn trending_addresses_are_capped() {
        let profiles: Vec<TokenProfile> = (0..200)
            .map(|i| profile("solana", &format!("token{}", i)))
            .collect();

        assert_eq!(trending_addresses(&profiles).len(), MAX_SCANNED_TOKENS);
    }
}
