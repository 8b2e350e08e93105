use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::interactor::watchlist_interactor::WatchlistInteractorImpl;
use crate::presenter::watchlist_presenter::{WatchlistPresenter, WatchlistPresenterImpl};
use crate::utils::parse_threshold;
use crate::view::watchlist_view::TelegramWatchlistView;

const WATCH_USAGE: &str = "Usage: /watch <token address> [threshold%]\nExample: /watch EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v 25%";
const UNWATCH_USAGE: &str = "Usage: /unwatch <entry id>\nThe id is shown next to each token in /watchlist";

fn watchlist_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: &ServiceContainer,
) -> WatchlistPresenterImpl<WatchlistInteractorImpl, TelegramWatchlistView> {
    let interactor = Arc::new(WatchlistInteractorImpl::new(
        services.store(),
        services.price_resolver(),
    ));
    let view = Arc::new(TelegramWatchlistView::new(
        bot,
        chat_id,
        services.settings().default_alert_threshold,
    ));
    WatchlistPresenterImpl::new(interactor, view)
}

/// Splits `/watch` arguments into an address and an optional threshold.
/// Returns `None` when the address is missing or the threshold is not a positive number.
pub fn parse_watch_args(args: &str) -> Option<(String, Option<f64>)> {
    let mut parts = args.split_whitespace();
    let address = parts.next()?.to_string();

    let threshold = match parts.next() {
        Some(raw) => Some(parse_threshold(raw)?),
        None => None,
    };

    if parts.next().is_some() {
        return None;
    }

    Some((address, threshold))
}

/// Parses the `/unwatch` entry id
pub fn parse_entry_id(args: &str) -> Option<i32> {
    args.trim().trim_start_matches('#').parse::<i32>().ok()
}

/// Shows a chat's watchlist; shared by `/watchlist` and the refresh button
pub async fn show_watchlist(bot: Bot, chat_id: ChatId, services: Arc<ServiceContainer>) -> Result<()> {
    watchlist_presenter(bot, chat_id, &services)
        .show_watchlist(chat_id.0)
        .await
}

/// Removes an entry owned by the chat; shared by `/unwatch` and the remove button
pub async fn remove_entry(
    bot: Bot,
    chat_id: ChatId,
    id: i32,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    watchlist_presenter(bot, chat_id, &services)
        .remove_from_watchlist(chat_id.0, id)
        .await
}

pub struct WatchCommand;

impl CommandHandler for WatchCommand {
    fn command_name() -> &'static str {
        "watch"
    }

    fn description() -> &'static str {
        "bookmark a token: /watch <address> [threshold%]"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        args: String,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;
        info!("Watch command received from chat {}", chat_id);

        let presenter = watchlist_presenter(bot, chat_id, &services);

        match parse_watch_args(&args) {
            Some((address, threshold)) => {
                presenter
                    .add_to_watchlist(chat_id.0, &address, threshold)
                    .await
            }
            None => presenter.show_usage(WATCH_USAGE).await,
        }
    }
}

pub struct UnwatchCommand;

impl CommandHandler for UnwatchCommand {
    fn command_name() -> &'static str {
        "unwatch"
    }

    fn description() -> &'static str {
        "remove a bookmark: /unwatch <id>"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        args: String,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;
        info!("Unwatch command received from chat {}", chat_id);

        match parse_entry_id(&args) {
            Some(id) => remove_entry(bot, chat_id, id, services).await,
            None => {
                watchlist_presenter(bot, chat_id, &services)
                    .show_usage(UNWATCH_USAGE)
                    .await
            }
        }
    }
}

pub struct WatchlistCommand;

impl CommandHandler for WatchlistCommand {
    fn command_name() -> &'static str {
        "watchlist"
    }

    fn description() -> &'static str {
        "show your watchlist with live prices"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _args: String,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;
        info!("Watchlist command received from chat {}", chat_id);

        show_watchlist(bot, chat_id, services).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_args_with_and_without_threshold() {
        assert_eq!(
            parse_watch_args("So11111111111111111111111111111111111111112"),
            Some(("So11111111111111111111111111111111111111112".to_string(), None))
        );
        assert_eq!(
            parse_watch_args("  0xabc   25% "),
            Some(("0xabc".to_string(), Some(25.0)))
        );
    }

    #[test]
    fn watch_args_rejects_bad_input() {
        assert_eq!(parse_watch_args(""), None);
        assert_eq!(parse_watch_args("0xabc lots"), None);
        assert_eq!(parse_watch_args("0xabc -5"), None);
        assert_eq!(parse_watch_args("0xabc 5 extra"), None);
    }

    #[test]
    fn entry_id_parsing() {
        assert_eq!(parse_entry_id(" 12 "), Some(12));
        assert_eq!(parse_entry_id("#7"), Some(7));
        assert_eq!(parse_entry_id("seven"), None);
        assert_eq!(parse_entry_id(""), None);
    }
}
