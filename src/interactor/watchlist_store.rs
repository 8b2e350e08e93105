use crate::entity::{NewWatchEntry, SentinelError, WatchEntry};
use crate::interactor::db;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

/// Persistent storage of watchlist entries
#[async_trait]
pub trait WatchlistStore: Send + Sync {
    async fn list(&self) -> Result<Vec<WatchEntry>, SentinelError>;
    async fn list_for_chat(&self, chat_id: i64) -> Result<Vec<WatchEntry>, SentinelError>;
    async fn get(&self, id: i32) -> Result<Option<WatchEntry>, SentinelError>;
    async fn insert(&self, entry: &NewWatchEntry) -> Result<WatchEntry, SentinelError>;
    async fn delete(&self, id: i32) -> Result<bool, SentinelError>;
    /// Returns false when the entry no longer exists.
    async fn update_last_alerted(
        &self,
        id: i32,
        alerted_at: DateTime<Utc>,
    ) -> Result<bool, SentinelError>;
}

/// PostgreSQL backed watchlist store
pub struct PgWatchlistStore {
    db_pool: Arc<PgPool>,
}

impl PgWatchlistStore {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl WatchlistStore for PgWatchlistStore {
    async fn list(&self) -> Result<Vec<WatchEntry>, SentinelError> {
        Ok(db::get_all_watch_entries(&self.db_pool).await?)
    }

    async fn list_for_chat(&self, chat_id: i64) -> Result<Vec<WatchEntry>, SentinelError> {
        Ok(db::get_chat_watch_entries(&self.db_pool, chat_id).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<WatchEntry>, SentinelError> {
        Ok(db::get_watch_entry(&self.db_pool, id).await?)
    }

    async fn insert(&self, entry: &NewWatchEntry) -> Result<WatchEntry, SentinelError> {
        Ok(db::insert_watch_entry(&self.db_pool, entry).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, SentinelError> {
        Ok(db::delete_watch_entry(&self.db_pool, id).await?)
    }

    async fn update_last_alerted(
        &self,
        id: i32,
        alerted_at: DateTime<Utc>,
    ) -> Result<bool, SentinelError> {
        Ok(db::update_last_alerted(&self.db_pool, id, alerted_at).await?)
    }
}
