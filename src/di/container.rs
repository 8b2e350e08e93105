use std::sync::Arc;

use anyhow::Result;
use sqlx::PgPool;
use teloxide::Bot;

use crate::config::Settings;
use crate::dexscreener::{DexScreenerClient, MarketDataClient, PriceResolver};
use crate::interactor::sentinel_interactor::{
    AlertPolicy, SentinelInteractor, SentinelInteractorImpl,
};
use crate::interactor::watchlist_store::{PgWatchlistStore, WatchlistStore};
use crate::services::notification_service::{NotificationSender, TelegramNotifier};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Collaborators
    store: Arc<dyn WatchlistStore + Send + Sync>,
    market_data: Arc<dyn MarketDataClient + Send + Sync>,

    // Core services
    price_resolver: Arc<PriceResolver>,
    sentinel: Arc<dyn SentinelInteractor + Send + Sync>,

    // Configuration
    settings: Settings,
}

impl ServiceContainer {
    /// Create a container backed by PostgreSQL, DexScreener and Telegram
    pub fn new(db_pool: Arc<PgPool>, bot: Bot, settings: Settings) -> Result<Self> {
        let store = Arc::new(PgWatchlistStore::new(db_pool)) as Arc<dyn WatchlistStore + Send + Sync>;

        let market_data = Arc::new(DexScreenerClient::new(&settings)?)
            as Arc<dyn MarketDataClient + Send + Sync>;

        let notifier =
            Arc::new(TelegramNotifier::new(bot)) as Arc<dyn NotificationSender + Send + Sync>;

        Ok(Self::from_parts(store, market_data, notifier, settings))
    }

    /// Create a container from already constructed collaborators
    pub fn from_parts(
        store: Arc<dyn WatchlistStore + Send + Sync>,
        market_data: Arc<dyn MarketDataClient + Send + Sync>,
        notifier: Arc<dyn NotificationSender + Send + Sync>,
        settings: Settings,
    ) -> Self {
        let price_resolver = Arc::new(PriceResolver::new(
            market_data.clone(),
            settings.lookup_chunk_size,
        ));

        let policy = AlertPolicy {
            default_threshold: settings.default_alert_threshold,
            cooldown: settings.alert_cooldown(),
        };

        let sentinel = Arc::new(SentinelInteractorImpl::new(
            store.clone(),
            price_resolver.clone(),
            notifier,
            policy,
        )) as Arc<dyn SentinelInteractor + Send + Sync>;

        Self {
            store,
            market_data,
            price_resolver,
            sentinel,
            settings,
        }
    }

    // Accessor methods

    pub fn store(&self) -> Arc<dyn WatchlistStore + Send + Sync> {
        self.store.clone()
    }

    pub fn market_data(&self) -> Arc<dyn MarketDataClient + Send + Sync> {
        self.market_data.clone()
    }

    pub fn price_resolver(&self) -> Arc<PriceResolver> {
        self.price_resolver.clone()
    }

    pub fn sentinel(&self) -> Arc<dyn SentinelInteractor + Send + Sync> {
        self.sentinel.clone()
    }

    pub fn settings(&self) -> Settings {
        self.settings.clone()
    }
}
