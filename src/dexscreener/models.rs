// src/dexscreener/models.rs
use crate::entity::{PairListing, Quote, TokenProfile};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Response of `/latest/dex/tokens/{addresses}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensResponse {
    #[serde(default)]
    pub schema_version: Option<String>,
    #[serde(default)]
    pub pairs: Option<Vec<DexPair>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexPair {
    #[serde(default)]
    pub chain_id: String,
    #[serde(default)]
    pub dex_id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub pair_address: String,
    pub base_token: PairToken,
    #[serde(default)]
    pub quote_token: Option<PairToken>,
    #[serde(default)]
    pub price_native: Option<String>,
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub volume: Option<PairVolume>,
    #[serde(default)]
    pub liquidity: Option<PairLiquidity>,
    #[serde(default)]
    pub fdv: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub pair_created_at: Option<i64>,
    #[serde(default)]
    pub boosts: Option<PairBoosts>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairToken {
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairVolume {
    #[serde(default)]
    pub h24: Option<f64>,
    #[serde(default)]
    pub h6: Option<f64>,
    #[serde(default)]
    pub h1: Option<f64>,
    #[serde(default)]
    pub m5: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairLiquidity {
    #[serde(default)]
    pub usd: Option<f64>,
    #[serde(default)]
    pub base: Option<f64>,
    #[serde(default)]
    pub quote: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairBoosts {
    #[serde(default)]
    pub active: Option<u32>,
}

/// Entry of `/token-boosts/top/v1` and `/token-profiles/latest/v1`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DexTokenProfile {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub chain_id: String,
    #[serde(default)]
    pub token_address: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<DexTokenProfile> for TokenProfile {
    fn from(profile: DexTokenProfile) -> Self {
        TokenProfile {
            chain_id: profile.chain_id,
            token_address: profile.token_address,
            url: profile.url,
        }
    }
}

fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

impl DexPair {
    /// Converts a wire pair into a listing; pairs without a usable USD price keep their liquidity but carry no quote.
    pub fn into_listing(self) -> PairListing {
        let price_usd = self
            .price_usd
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|price| price.is_finite());
        let liquidity_usd = self.liquidity.and_then(|l| l.usd).unwrap_or(0.0);

        let url = self.url.unwrap_or_else(|| {
            format!(
                "https://dexscreener.com/{}/{}",
                self.chain_id, self.pair_address
            )
        });

        let quote = price_usd.map(|price_usd| Quote {
            token_address: self.base_token.address.clone(),
            symbol: self.base_token.symbol,
            name: self.base_token.name,
            chain_id: self.chain_id,
            dex_id: self.dex_id,
            pair_address: self.pair_address.clone(),
            price_usd,
            volume_24h_usd: self.volume.and_then(|v| v.h24).unwrap_or(0.0),
            liquidity_usd,
            pair_created_at: self.pair_created_at.and_then(millis_to_datetime),
            active_boosts: self.boosts.and_then(|b| b.active).unwrap_or(0),
            url,
        });

        PairListing {
            token_address: self.base_token.address,
            pair_address: self.pair_address,
            liquidity_usd,
            quote,
        }
    }
}
