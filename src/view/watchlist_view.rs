use crate::entity::{WatchEntry, WatchlistItem};
use crate::scoring::safety_label;
use crate::utils::{format_price, format_usd, shorten_address};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
    utils::html,
    Bot,
};

#[async_trait]
pub trait WatchlistView: Send + Sync {
    async fn display_watchlist(&self, watchlist: Vec<WatchlistItem>) -> Result<()>;
    async fn display_empty_watchlist(&self) -> Result<()>;
    async fn display_token_added(&self, entry: WatchEntry) -> Result<()>;
    async fn display_token_removed(&self, entry: WatchEntry) -> Result<()>;
    async fn display_entry_not_found(&self, id: i32) -> Result<()>;
    async fn display_usage(&self, usage: &str) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

/// One line block per watchlist item; `default_threshold` applies to entries stored without one
pub fn format_watchlist_item(
    item: &WatchlistItem,
    default_threshold: f64,
    now: DateTime<Utc>,
) -> String {
    let entry = &item.entry;
    let threshold = entry.threshold_or(default_threshold);

    let entry_price = entry
        .entry_price()
        .map(|p| format!("${}", format_price(p)))
        .unwrap_or_else(|| "n/a".to_string());

    let market = match &item.quote {
        Some(quote) => {
            let change = item
                .percent_change()
                .map(|c| format!("{:+.2}%", c))
                .unwrap_or_else(|| "n/a".to_string());
            let label = safety_label(quote, now);
            format!(
                "Now: <b>${}</b> ({})\nLiq: ${} • {} {}",
                format_price(quote.price_usd),
                change,
                format_usd(quote.liquidity_usd),
                label.emoji(),
                label
            )
        }
        None => "Now: price unavailable".to_string(),
    };

    format!(
        "<b>#{} {}</b> <code>{}</code>\nEntry: {} • Alert at +{}%\n{}",
        entry.id,
        html::escape(&entry.symbol),
        shorten_address(&entry.contract_address),
        entry_price,
        threshold,
        market
    )
}

pub fn format_watchlist(
    watchlist: &[WatchlistItem],
    default_threshold: f64,
    now: DateTime<Utc>,
) -> String {
    let body = watchlist
        .iter()
        .map(|item| format_watchlist_item(item, default_threshold, now))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("<b>Your Watchlist</b>\n\n{}", body)
}

pub struct TelegramWatchlistView {
    bot: Bot,
    chat_id: ChatId,
    default_threshold: f64,
}

impl TelegramWatchlistView {
    pub fn new(bot: Bot, chat_id: ChatId, default_threshold: f64) -> Self {
        Self {
            bot,
            chat_id,
            default_threshold,
        }
    }
}

#[async_trait]
impl WatchlistView for TelegramWatchlistView {
    async fn display_watchlist(&self, watchlist: Vec<WatchlistItem>) -> Result<()> {
        if watchlist.is_empty() {
            return self.display_empty_watchlist().await;
        }

        let mut keyboard_buttons: Vec<Vec<InlineKeyboardButton>> = watchlist
            .iter()
            .map(|item| {
                vec![InlineKeyboardButton::callback(
                    format!("🗑️ Remove #{} {}", item.entry.id, item.entry.symbol),
                    format!("unwatch_{}", item.entry.id),
                )]
            })
            .collect();

        keyboard_buttons.push(vec![
            InlineKeyboardButton::callback("🔄 Refresh", "watchlist"),
            InlineKeyboardButton::callback("🛰 Run Sentinel", "check"),
        ]);

        self.bot
            .send_message(self.chat_id, format_watchlist(&watchlist, self.default_threshold, Utc::now()))
            .parse_mode(ParseMode::Html)
            .reply_markup(InlineKeyboardMarkup::new(keyboard_buttons))
            .await?;

        Ok(())
    }

    async fn display_empty_watchlist(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "Your watchlist is empty. Bookmark a token with /watch <address> [threshold%]",
            )
            .await?;

        Ok(())
    }

    async fn display_token_added(&self, entry: WatchEntry) -> Result<()> {
        let keyboard = InlineKeyboardMarkup::new(vec![vec![
            InlineKeyboardButton::callback("View Watchlist", "watchlist"),
            InlineKeyboardButton::callback("Remove", format!("unwatch_{}", entry.id)),
        ]]);

        let entry_price = entry
            .entry_price()
            .map(format_price)
            .unwrap_or_else(|| "n/a".to_string());

        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "✅ Added <b>{}</b> to your watchlist (#{})\n\
                     Entry price: <b>${}</b>\n\
                     You will be alerted at <b>+{}%</b>",
                    html::escape(&entry.symbol),
                    entry.id,
                    entry_price,
                    entry.threshold_or(self.default_threshold)
                ),
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard)
            .await?;

        Ok(())
    }

    async fn display_token_removed(&self, entry: WatchEntry) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "✅ Removed {} (#{}) from your watchlist",
                    entry.symbol, entry.id
                ),
            )
            .await?;

        Ok(())
    }

    async fn display_entry_not_found(&self, id: i32) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!("❌ No watchlist entry #{} in this chat", id),
            )
            .await?;

        Ok(())
    }

    async fn display_usage(&self, usage: &str) -> Result<()> {
        self.bot.send_message(self.chat_id, usage).await?;

        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("Error: {}", error_message))
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Quote;

    fn item(quote_price: Option<f64>) -> WatchlistItem {
        WatchlistItem {
            entry: WatchEntry {
                id: 4,
                contract_address: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
                symbol: "VIBE".to_string(),
                name: None,
                network: Some("solana".to_string()),
                initial_price: Some(2.0),
                chat_id: Some(1),
                alert_threshold: Some(25.0),
                last_alerted_at: None,
                created_at: Utc::now(),
            },
            quote: quote_price.map(|price| Quote {
                token_address: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
                symbol: "VIBE".to_string(),
                name: "Vibe".to_string(),
                chain_id: "solana".to_string(),
                dex_id: "raydium".to_string(),
                pair_address: "pair".to_string(),
                price_usd: price,
                volume_24h_usd: 0.0,
                liquidity_usd: 20_000.0,
                pair_created_at: None,
                active_boosts: 0,
                url: "https://dexscreener.com/solana/pair".to_string(),
            }),
        }
    }

    #[test]
    fn formats_item_with_quote() {
        let text = format_watchlist_item(&item(Some(3.0)), 50.0, Utc::now());

        assert!(text.contains("#4 VIBE"));
        assert!(text.contains("EPjFW...TDt1v"));
        assert!(text.contains("Entry: $2.000000"));
        assert!(text.contains("Alert at +25%"));
        assert!(text.contains("(+50.00%)"));
        assert!(text.contains("Degen Play"));
    }

    #[test]
    fn formats_item_without_quote() {
        let text = format_watchlist_item(&item(None), 50.0, Utc::now());
        assert!(text.contains("price unavailable"));
    }

    #[test]
    fn entry_without_threshold_shows_configured_default() {
        let mut unset = item(Some(3.0));
        unset.entry.alert_threshold = None;

        let text = format_watchlist_item(&unset, 20.0, Utc::now());
        assert!(text.contains("Alert at +20%"));

        // An explicit threshold wins over the default
        let text = format_watchlist_item(&item(Some(3.0)), 20.0, Utc::now());
        assert!(text.contains("Alert at +25%"));
    }
}
