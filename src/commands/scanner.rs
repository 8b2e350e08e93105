use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::interactor::scanner_interactor::ScannerInteractorImpl;
use crate::presenter::scanner_presenter::{ScannerPresenter, ScannerPresenterImpl};
use crate::view::scanner_view::TelegramScannerView;

fn scanner_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: &ServiceContainer,
) -> ScannerPresenterImpl<ScannerInteractorImpl, TelegramScannerView> {
    let interactor = Arc::new(ScannerInteractorImpl::new(
        services.market_data(),
        services.price_resolver(),
    ));
    let view = Arc::new(TelegramScannerView::new(bot, chat_id));
    ScannerPresenterImpl::new(interactor, view)
}

pub struct ScoreCommand;

impl CommandHandler for ScoreCommand {
    fn command_name() -> &'static str {
        "score"
    }

    fn description() -> &'static str {
        "safety score of a token: /score <address>"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        args: String,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;
        info!("Score command received from chat {}", chat_id);

        let address = args.trim();
        if address.is_empty() {
            bot.send_message(chat_id, "Usage: /score <token address>")
                .await?;
            return Ok(());
        }

        scanner_presenter(bot, chat_id, &services)
            .show_token_score(address)
            .await
    }
}

pub struct TrendingCommand;

impl CommandHandler for TrendingCommand {
    fn command_name() -> &'static str {
        "trending"
    }

    fn description() -> &'static str {
        "trending tokens ranked by safety"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _args: String,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;
        info!("Trending command received from chat {}", chat_id);

        scanner_presenter(bot, chat_id, &services)
            .show_trending()
            .await
    }
}
