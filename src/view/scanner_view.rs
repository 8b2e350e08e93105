use crate::entity::Quote;
use crate::scoring::{safety_score, SafetyLabel};
use crate::utils::{format_price, format_usd, shorten_address};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use teloxide::{prelude::*, types::ParseMode, utils::html, Bot};

/// Tokens shown by /trending
pub const TRENDING_LIMIT: usize = 10;

#[async_trait]
pub trait ScannerView: Send + Sync {
    async fn display_loading(&self) -> Result<()>;
    async fn display_token_score(&self, quote: Quote) -> Result<()>;
    async fn display_trending(&self, quotes: Vec<Quote>) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub fn format_token_score(quote: &Quote, now: DateTime<Utc>) -> String {
    let score = safety_score(quote, now);
    let label = SafetyLabel::from_score(score);
    let age = quote
        .age_hours(now)
        .map(|h| format!("{:.1}h", h))
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "<b>{} ({})</b> on {}\n\
         <code>{}</code>\n\n\
         {} <b>{}</b> ({})\n\
         • Price: ${}\n\
         • Liquidity: ${}\n\
         • 24h Volume: ${}\n\
         • Pair age: {}\n\
         • Active boosts: {}\n\n\
         <a href=\"{}\">View on DexScreener</a>",
        html::escape(&quote.name),
        html::escape(&quote.symbol),
        html::escape(&quote.chain_id),
        quote.token_address,
        label.emoji(),
        label,
        score,
        format_price(quote.price_usd),
        format_usd(quote.liquidity_usd),
        format_usd(quote.volume_24h_usd),
        age,
        quote.active_boosts,
        html::escape(&quote.url),
    )
}

pub fn format_trending(quotes: &[Quote], now: DateTime<Utc>) -> String {
    let lines = quotes
        .iter()
        .take(TRENDING_LIMIT)
        .enumerate()
        .map(|(i, quote)| {
            let score = safety_score(quote, now);
            let label = SafetyLabel::from_score(score);
            format!(
                "{}. {} <a href=\"{}\">{}</a> ({}) ${} • Liq ${} • {} {}",
                i + 1,
                label.emoji(),
                html::escape(&quote.url),
                html::escape(&quote.symbol),
                shorten_address(&quote.token_address),
                format_price(quote.price_usd),
                format_usd(quote.liquidity_usd),
                label,
                score
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("<b>🔥 Trending, safest first</b>\n\n{}", lines)
}

pub struct TelegramScannerView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramScannerView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ScannerView for TelegramScannerView {
    async fn display_loading(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Scanning DexScreener...")
            .await?;

        Ok(())
    }

    async fn display_token_score(&self, quote: Quote) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format_token_score(&quote, Utc::now()))
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn display_trending(&self, quotes: Vec<Quote>) -> Result<()> {
        if quotes.is_empty() {
            self.bot
                .send_message(self.chat_id, "No trending tokens right now.")
                .await?;
            return Ok(());
        }

        self.bot
            .send_message(self.chat_id, format_trending(&quotes, Utc::now()))
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("Error: {}", error_message))
            .await?;

        Ok(())
    }
}
