use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error};
use teloxide::{prelude::*, types::ParseMode, Bot};

use crate::entity::SentinelError;

/// Outbound message channel used for alerts
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver an HTML formatted message to a chat
    async fn send(&self, chat_id: i64, text: &str) -> Result<()>;
}

/// Sends notifications through the Telegram Bot API
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl NotificationSender for TelegramNotifier {
    async fn send(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| {
                error!("Failed to send Telegram message to {}: {}", chat_id, e);
                SentinelError::Notification(e.to_string())
            })?;

        debug!("Delivered notification to chat {}", chat_id);
        Ok(())
    }
}
