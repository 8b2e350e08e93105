// src/commands/help.rs
use super::{register_commands, CommandHandler};
use crate::di::ServiceContainer;
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

pub struct HelpCommand;

/// Usage text listing every registered command
pub fn help_text() -> String {
    let commands = register_commands()
        .into_iter()
        .map(|(name, description)| format!("/{} - {}", name, description))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Available commands:\n{}", commands)
}

impl CommandHandler for HelpCommand {
    fn command_name() -> &'static str {
        "help"
    }

    fn description() -> &'static str {
        "display this help message"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        _args: String,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        bot.send_message(msg.chat.id, help_text()).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_command() {
        let text = help_text();
        for command in [
            "/start", "/watch", "/unwatch", "/watchlist", "/check", "/score", "/trending", "/help",
        ] {
            assert!(text.contains(command), "missing {}", command);
        }
    }
}
