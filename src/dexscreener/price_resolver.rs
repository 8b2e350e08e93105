// src/dexscreener/price_resolver.rs
use futures::future::join_all;
use log::{debug, error};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::config::MAX_ADDRESSES_PER_LOOKUP;
use crate::dexscreener::client::MarketDataClient;
use crate::entity::{PairListing, Quote};
use crate::utils::{address_key, chunk_addresses};

/// Resolves the most liquid pair for each token address.
///
/// When that pair has no USD price the token resolves to nothing rather than
/// falling back to a thinner pair.
///
/// Lookups are deduplicated and split into provider-sized batches which are
/// requested concurrently. A failed batch only removes its own addresses from
/// the result.
pub struct PriceResolver {
    client: Arc<dyn MarketDataClient + Send + Sync>,
    chunk_size: usize,
}

impl PriceResolver {
    pub fn new(client: Arc<dyn MarketDataClient + Send + Sync>, chunk_size: usize) -> Self {
        Self {
            client,
            chunk_size: chunk_size.clamp(1, MAX_ADDRESSES_PER_LOOKUP),
        }
    }

    pub async fn resolve(&self, addresses: &[String]) -> HashMap<String, Quote> {
        let distinct = distinct_addresses(addresses);
        if distinct.is_empty() {
            return HashMap::new();
        }

        let batches = chunk_addresses(&distinct, self.chunk_size);
        debug!(
            "Resolving {} distinct addresses in {} batches",
            distinct.len(),
            batches.len()
        );

        let results = join_all(batches.iter().map(|batch| self.client.lookup(batch))).await;

        let mut deepest = HashMap::new();
        for (batch, result) in batches.iter().zip(results) {
            match result {
                Ok(listings) => merge_deepest_pairs(&mut deepest, listings),
                Err(e) => error!(
                    "Price lookup failed for batch of {} addresses: {}",
                    batch.len(),
                    e
                ),
            }
        }

        // Keyed by the caller's spelling; pairs for tokens we did not ask about are ignored
        let mut resolved = HashMap::new();
        for address in addresses {
            match deepest.get(&address_key(address)) {
                Some(PairListing {
                    quote: Some(quote), ..
                }) => {
                    resolved.insert(address.clone(), quote.clone());
                }
                Some(listing) => debug!(
                    "Deepest pair {} for {} has no USD price",
                    listing.pair_address, address
                ),
                None => {}
            }
        }

        resolved
    }

    pub async fn resolve_one(&self, address: &str) -> Option<Quote> {
        self.resolve(&[address.to_string()])
            .await
            .remove(address)
    }
}

/// Distinct addresses in first-seen order; EVM addresses differing only in case count once.
pub fn distinct_addresses(addresses: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    addresses
        .iter()
        .filter(|address| seen.insert(address_key(address)))
        .cloned()
        .collect()
}

/// Keeps the pair with strictly greater liquidity per token, priced or not; ties keep the first one seen.
pub fn merge_deepest_pairs(best: &mut HashMap<String, PairListing>, listings: Vec<PairListing>) {
    for listing in listings {
        let key = address_key(&listing.token_address);
        match best.get(&key) {
            Some(existing) if listing.liquidity_usd <= existing.liquidity_usd => {}
            _ => {
                best.insert(key, listing);
            }
        }
    }
}
