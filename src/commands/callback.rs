use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;
use teloxide::prelude::*;

use crate::commands::{sentinel, watchlist};
use crate::di::ServiceContainer;

/// Inline button actions understood by the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    ShowWatchlist,
    RunSentinel,
    Unwatch(i32),
}

impl CallbackAction {
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "watchlist" => Some(Self::ShowWatchlist),
            "check" => Some(Self::RunSentinel),
            _ => data
                .strip_prefix("unwatch_")
                .and_then(|id| id.parse::<i32>().ok())
                .map(Self::Unwatch),
        }
    }
}

// Main callback handler function
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let callback_data = match q.data {
        Some(ref data) => data.clone(),
        None => return Ok(()),
    };

    let chat_id = match q.message {
        Some(ref msg) => msg.chat().id,
        None => return Ok(()),
    };

    info!("Received callback: {} from chat {}", callback_data, chat_id);

    // Acknowledge the callback query to stop loading animation
    if let Err(err) = bot.answer_callback_query(q.id.clone()).await {
        info!("Failed to answer callback query: {}", err);
    }

    match CallbackAction::parse(&callback_data) {
        Some(CallbackAction::ShowWatchlist) => {
            watchlist::show_watchlist(bot, chat_id, services).await?;
        }
        Some(CallbackAction::RunSentinel) => {
            sentinel::run_sentinel(bot, chat_id, services).await?;
        }
        Some(CallbackAction::Unwatch(id)) => {
            watchlist::remove_entry(bot, chat_id, id, services).await?;
        }
        None => {
            warn!("Unknown callback data: {}", callback_data);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_actions() {
        assert_eq!(
            CallbackAction::parse("watchlist"),
            Some(CallbackAction::ShowWatchlist)
        );
        assert_eq!(
            CallbackAction::parse("check"),
            Some(CallbackAction::RunSentinel)
        );
        assert_eq!(
            CallbackAction::parse("unwatch_42"),
            Some(CallbackAction::Unwatch(42))
        );
    }

    #[test]
    fn rejects_unknown_actions() {
        assert_eq!(CallbackAction::parse("unwatch_x"), None);
        assert_eq!(CallbackAction::parse("swap"), None);
    }
}
