use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode};

use super::help::help_text;
use super::CommandHandler;
use crate::di::ServiceContainer;

pub struct StartCommand;

impl CommandHandler for StartCommand {
    fn command_name() -> &'static str {
        "start"
    }

    fn description() -> &'static str {
        "start the bot and show usage"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _args: String,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;
        let settings = services.settings();

        info!("Start command received from chat {}", chat_id);

        bot.send_message(
            chat_id,
            format!(
                "<b>Welcome to Vibe Sentinel!</b>\n\n\
                 Bookmark tokens and I'll ping this chat when one pumps past your threshold \
                 (default <b>+{}%</b>, at most one alert per token every {} minutes).",
                settings.default_alert_threshold,
                settings.alert_cooldown_secs / 60
            ),
        )
        .parse_mode(ParseMode::Html)
        .await?;

        bot.send_message(chat_id, help_text()).await?;

        Ok(())
    }
}
