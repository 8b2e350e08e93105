use crate::entity::{NewWatchEntry, WatchEntry};
use chrono::{DateTime, Utc};
use log::info;
use sqlx::{postgres::PgRow, Error as SqlxError, PgPool, Row};

const WATCHLIST_COLUMNS: &str = "id, contract_address, symbol, name, network, initial_price, \
     chat_id, alert_threshold, last_alerted_at, created_at";

fn watch_entry_from_row(row: &PgRow) -> Result<WatchEntry, SqlxError> {
    Ok(WatchEntry {
        id: row.try_get("id")?,
        contract_address: row.try_get("contract_address")?,
        symbol: row.try_get("symbol")?,
        name: row.try_get("name")?,
        network: row.try_get("network")?,
        initial_price: row.try_get("initial_price")?,
        chat_id: row.try_get("chat_id")?,
        alert_threshold: row.try_get("alert_threshold")?,
        last_alerted_at: row.try_get("last_alerted_at")?,
        created_at: row.try_get("created_at")?,
    })
}

// Get every watchlist entry, oldest first
pub async fn get_all_watch_entries(pool: &PgPool) -> Result<Vec<WatchEntry>, SqlxError> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM watchlist ORDER BY id",
        WATCHLIST_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    rows.iter().map(watch_entry_from_row).collect()
}

// Get watchlist entries that notify the given chat
pub async fn get_chat_watch_entries(
    pool: &PgPool,
    chat_id: i64,
) -> Result<Vec<WatchEntry>, SqlxError> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM watchlist WHERE chat_id = $1 ORDER BY id",
        WATCHLIST_COLUMNS
    ))
    .bind(chat_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(watch_entry_from_row).collect()
}

// Get a single watchlist entry by id
pub async fn get_watch_entry(pool: &PgPool, id: i32) -> Result<Option<WatchEntry>, SqlxError> {
    let row = sqlx::query(&format!(
        "SELECT {} FROM watchlist WHERE id = $1",
        WATCHLIST_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(watch_entry_from_row).transpose()
}

// Add a token to the watchlist; bookmarking the same token again for a chat resets its entry price
pub async fn insert_watch_entry(
    pool: &PgPool,
    entry: &NewWatchEntry,
) -> Result<WatchEntry, SqlxError> {
    let row = sqlx::query(&format!(
        "INSERT INTO watchlist (contract_address, symbol, name, network, initial_price, chat_id, alert_threshold, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         ON CONFLICT (contract_address, chat_id) DO UPDATE SET \
             initial_price = EXCLUDED.initial_price, \
             alert_threshold = EXCLUDED.alert_threshold, \
             last_alerted_at = NULL \
         RETURNING {}",
        WATCHLIST_COLUMNS
    ))
    .bind(&entry.contract_address)
    .bind(&entry.symbol)
    .bind(&entry.name)
    .bind(&entry.network)
    .bind(entry.initial_price)
    .bind(entry.chat_id)
    .bind(entry.alert_threshold)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    let created = watch_entry_from_row(&row)?;
    info!(
        "Saved watchlist entry #{} for {} ({})",
        created.id, created.symbol, created.contract_address
    );

    Ok(created)
}

// Remove a watchlist entry
pub async fn delete_watch_entry(pool: &PgPool, id: i32) -> Result<bool, SqlxError> {
    let result = sqlx::query("DELETE FROM watchlist WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Record when an alert was last delivered for an entry
pub async fn update_last_alerted(
    pool: &PgPool,
    id: i32,
    alerted_at: DateTime<Utc>,
) -> Result<bool, SqlxError> {
    let result = sqlx::query("UPDATE watchlist SET last_alerted_at = $1 WHERE id = $2")
        .bind(alerted_at)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
