use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::di::ServiceContainer;

pub mod callback;
pub mod help;
pub mod scanner;
pub mod sentinel;
pub mod start;
pub mod watchlist;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// The command description for help
    fn description() -> &'static str;

    /// Execute the command; `args` is the text after the command name
    async fn execute(
        bot: Bot,
        msg: Message,
        args: String,
        services: Arc<ServiceContainer>,
    ) -> Result<()>;
}

/// Register all command handlers in the command system
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            start::StartCommand::command_name(),
            start::StartCommand::description(),
        ),
        (
            watchlist::WatchCommand::command_name(),
            watchlist::WatchCommand::description(),
        ),
        (
            watchlist::UnwatchCommand::command_name(),
            watchlist::UnwatchCommand::description(),
        ),
        (
            watchlist::WatchlistCommand::command_name(),
            watchlist::WatchlistCommand::description(),
        ),
        (
            sentinel::CheckCommand::command_name(),
            sentinel::CheckCommand::description(),
        ),
        (
            scanner::ScoreCommand::command_name(),
            scanner::ScoreCommand::description(),
        ),
        (
            scanner::TrendingCommand::command_name(),
            scanner::TrendingCommand::description(),
        ),
        (
            help::HelpCommand::command_name(),
            help::HelpCommand::description(),
        ),
    ]
}

/// Bot Commands enum for teloxide command filter
#[derive(teloxide::utils::command::BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommands {
    #[command(description = "start the bot and show usage")]
    Start,
    #[command(description = "bookmark a token: /watch <address> [threshold%]")]
    Watch(String),
    #[command(description = "remove a bookmark: /unwatch <id>")]
    Unwatch(String),
    #[command(description = "show your watchlist with live prices")]
    Watchlist,
    #[command(description = "run the sentinel now")]
    Check,
    #[command(description = "safety score of a token: /score <address>")]
    Score(String),
    #[command(description = "trending tokens ranked by safety")]
    Trending,
    #[command(description = "display this help message")]
    Help,
}
