use crate::dexscreener::PriceResolver;
use crate::entity::{NewWatchEntry, SentinelError, WatchEntry, WatchlistItem};
use crate::interactor::watchlist_store::WatchlistStore;
use crate::utils::validate_token_address;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

#[async_trait]
pub trait WatchlistInteractor: Send + Sync {
    async fn get_watchlist(&self, chat_id: i64) -> Result<Vec<WatchlistItem>>;
    async fn add_to_watchlist(
        &self,
        chat_id: i64,
        token_address: &str,
        alert_threshold: Option<f64>,
    ) -> Result<WatchEntry>;
    /// Returns the removed entry, `None` when the chat owns no entry with that id
    async fn remove_from_watchlist(&self, chat_id: i64, id: i32) -> Result<Option<WatchEntry>>;
}

pub struct WatchlistInteractorImpl {
    store: Arc<dyn WatchlistStore + Send + Sync>,
    price_resolver: Arc<PriceResolver>,
}

impl WatchlistInteractorImpl {
    pub fn new(
        store: Arc<dyn WatchlistStore + Send + Sync>,
        price_resolver: Arc<PriceResolver>,
    ) -> Self {
        Self {
            store,
            price_resolver,
        }
    }
}

#[async_trait]
impl WatchlistInteractor for WatchlistInteractorImpl {
    async fn get_watchlist(&self, chat_id: i64) -> Result<Vec<WatchlistItem>> {
        let entries = self
            .store
            .list_for_chat(chat_id)
            .await
            .map_err(|e| anyhow!("Failed to get watchlist: {}", e))?;

        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let addresses: Vec<String> = entries
            .iter()
            .map(|entry| entry.contract_address.clone())
            .collect();
        let quotes = self.price_resolver.resolve(&addresses).await;

        Ok(entries
            .into_iter()
            .map(|entry| {
                let quote = quotes.get(&entry.contract_address).cloned();
                WatchlistItem { entry, quote }
            })
            .collect())
    }

    async fn add_to_watchlist(
        &self,
        chat_id: i64,
        token_address: &str,
        alert_threshold: Option<f64>,
    ) -> Result<WatchEntry> {
        let token_address = token_address.trim();

        if !validate_token_address(token_address) {
            return Err(SentinelError::InvalidAddress.into());
        }

        if let Some(threshold) = alert_threshold {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(SentinelError::InvalidThreshold(threshold.to_string()).into());
            }
        }

        let quote = self
            .price_resolver
            .resolve_one(token_address)
            .await
            .ok_or_else(|| SentinelError::TokenNotFound(token_address.to_string()))?;

        // Store the address as the market reports it, e.g. checksummed EVM hex
        let new_entry = NewWatchEntry {
            contract_address: quote.token_address.clone(),
            symbol: quote.symbol.clone(),
            name: Some(quote.name.clone()).filter(|name| !name.is_empty()),
            network: Some(quote.chain_id.clone()),
            initial_price: Some(quote.price_usd),
            chat_id: Some(chat_id),
            alert_threshold,
        };

        let entry = self
            .store
            .insert(&new_entry)
            .await
            .map_err(|e| anyhow!("Failed to add to watchlist: {}", e))?;

        info!(
            "Chat {} bookmarked {} at ${} (entry #{})",
            chat_id, entry.symbol, quote.price_usd, entry.id
        );

        Ok(entry)
    }

    async fn remove_from_watchlist(&self, chat_id: i64, id: i32) -> Result<Option<WatchEntry>> {
        let entry = match self.store.get(id).await? {
            Some(entry) if entry.chat_id == Some(chat_id) => entry,
            _ => return Ok(None),
        };

        if !self.store.delete(id).await? {
            return Ok(None);
        }

        info!("Chat {} removed watchlist entry #{}", chat_id, id);
        Ok(Some(entry))
    }
}
