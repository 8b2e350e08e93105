use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::CommandHandler;
use crate::di::ServiceContainer;
use crate::presenter::sentinel_presenter::{SentinelPresenter, SentinelPresenterImpl};
use crate::view::sentinel_view::TelegramSentinelView;

/// Runs one sentinel pass on demand and reports the summary to the chat
pub async fn run_sentinel(bot: Bot, chat_id: ChatId, services: Arc<ServiceContainer>) -> Result<()> {
    let view = Arc::new(TelegramSentinelView::new(bot, chat_id));
    let presenter = SentinelPresenterImpl::new(
        services.sentinel(),
        view,
        services.settings().pass_timeout(),
    );

    presenter.run_now().await
}

pub struct CheckCommand;

impl CommandHandler for CheckCommand {
    fn command_name() -> &'static str {
        "check"
    }

    fn description() -> &'static str {
        "run the sentinel now"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _args: String,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;
        info!("Check command received from chat {}", chat_id);

        run_sentinel(bot, chat_id, services).await
    }
}
