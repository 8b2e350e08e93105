// src/dexscreener/client.rs
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::{Settings, MAX_ADDRESSES_PER_LOOKUP};
use crate::dexscreener::models::{DexPair, DexTokenProfile, TokensResponse};
use crate::entity::{PairListing, SentinelError, TokenProfile};

/// Upstream market data provider
#[async_trait]
pub trait MarketDataClient: Send + Sync {
    /// Look up all trading pairs for up to 30 token addresses in one call
    async fn lookup(&self, addresses: &[String]) -> Result<Vec<PairListing>>;

    /// Tokens with the most active boosts
    async fn top_boosted_tokens(&self) -> Result<Vec<TokenProfile>> {
        Ok(Vec::new())
    }

    /// Most recently published token profiles
    async fn latest_token_profiles(&self) -> Result<Vec<TokenProfile>> {
        Ok(Vec::new())
    }
}

/// DexScreener implementation of the market data client
pub struct DexScreenerClient {
    http_client: Client,
    base_url: String,
}

impl DexScreenerClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| {
                SentinelError::MarketData(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            base_url: settings.dexscreener_api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<D: DeserializeOwned>(&self, path: &str) -> Result<D> {
        let url = format!("{}{}", self.base_url, path);
        debug!("DexScreener request: {}", url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            error!("Failed to reach DexScreener: {}", e);
            SentinelError::MarketData(format!("HTTP request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("DexScreener API error [{}]: {}", status, error_text);
            return Err(
                SentinelError::MarketData(format!("API error {}: {}", status, error_text)).into(),
            );
        }

        let body = response
            .json::<D>()
            .await
            .map_err(|e| SentinelError::MarketData(format!("Failed to parse response: {}", e)))?;

        Ok(body)
    }
}

#[async_trait]
impl MarketDataClient for DexScreenerClient {
    async fn lookup(&self, addresses: &[String]) -> Result<Vec<PairListing>> {
        if addresses.is_empty() {
            return Ok(Vec::new());
        }

        if addresses.len() > MAX_ADDRESSES_PER_LOOKUP {
            return Err(SentinelError::MarketData(format!(
                "at most {} addresses per lookup, got {}",
                MAX_ADDRESSES_PER_LOOKUP,
                addresses.len()
            ))
            .into());
        }

        let path = format!("/latest/dex/tokens/{}", addresses.join(","));
        let response: TokensResponse = self.get_json(&path).await?;

        let listings: Vec<PairListing> = response
            .pairs
            .unwrap_or_default()
            .into_iter()
            .map(DexPair::into_listing)
            .collect();

        debug!(
            "DexScreener returned {} pairs for {} addresses",
            listings.len(),
            addresses.len()
        );

        Ok(listings)
    }

    async fn top_boosted_tokens(&self) -> Result<Vec<TokenProfile>> {
        let profiles: Vec<DexTokenProfile> = self.get_json("/token-boosts/top/v1").await?;
        Ok(profiles.into_iter().map(TokenProfile::from).collect())
    }

    async fn latest_token_profiles(&self) -> Result<Vec<TokenProfile>> {
        let profiles: Vec<DexTokenProfile> = self.get_json("/token-profiles/latest/v1").await?;
        Ok(profiles.into_iter().map(TokenProfile::from).collect())
    }
}
