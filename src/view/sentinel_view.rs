use crate::entity::PassSummary;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{prelude::*, types::ParseMode, Bot};

#[async_trait]
pub trait SentinelView: Send + Sync {
    async fn display_summary(&self, summary: PassSummary) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub fn format_summary(summary: &PassSummary) -> String {
    let mut text = format!(
        "<b>🛰 Sentinel run complete</b>\n\n\
         • Items checked: <b>{}</b>\n\
         • Alerts sent: <b>{}</b>",
        summary.items_checked, summary.alerts_sent
    );

    if summary.cooling_down > 0 {
        text.push_str(&format!("\n• Cooling down: {}", summary.cooling_down));
    }
    if summary.failed_sends + summary.failed_updates > 0 {
        text.push_str(&format!(
            "\n• Failures: {} sends, {} updates",
            summary.failed_sends, summary.failed_updates
        ));
    }

    text
}

pub struct TelegramSentinelView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramSentinelView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl SentinelView for TelegramSentinelView {
    async fn display_summary(&self, summary: PassSummary) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format_summary(&summary))
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!("❌ Sentinel run failed: {}", error_message),
            )
            .await?;

        Ok(())
    }
}
