use async_trait::async_trait;
use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::commands::{
    self, callback::handle_callback, scanner, sentinel, watchlist, BotCommands, CommandHandler,
};
use crate::di::ServiceContainer;

// Base router trait
#[async_trait]
pub trait Router: Send + Sync {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error>;
}

// Command router implementation
pub struct TelegramRouter {
    services: Arc<ServiceContainer>,
}

impl TelegramRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Router for TelegramRouter {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        use dptree::case;
        use teloxide::dispatching::UpdateFilterExt;

        let start_services = self.services.clone();
        let help_services = self.services.clone();
        let watch_services = self.services.clone();
        let unwatch_services = self.services.clone();
        let watchlist_services = self.services.clone();
        let check_services = self.services.clone();
        let score_services = self.services.clone();
        let trending_services = self.services.clone();
        let callback_services = self.services.clone();

        // Use BotCommands enum with teloxide's command filter
        let command_handler = teloxide::filter_command::<BotCommands, _>()
            .branch(case![BotCommands::Start].endpoint(move |bot: Bot, msg: Message| {
                let services = start_services.clone();
                async move {
                    commands::start::StartCommand::execute(bot, msg, String::new(), services).await
                }
            }))
            .branch(case![BotCommands::Help].endpoint(move |bot: Bot, msg: Message| {
                let services = help_services.clone();
                async move {
                    commands::help::HelpCommand::execute(bot, msg, String::new(), services).await
                }
            }))
            .branch(case![BotCommands::Watch(args)].endpoint(
                move |bot: Bot, msg: Message, args: String| {
                    let services = watch_services.clone();
                    async move { watchlist::WatchCommand::execute(bot, msg, args, services).await }
                },
            ))
            .branch(case![BotCommands::Unwatch(args)].endpoint(
                move |bot: Bot, msg: Message, args: String| {
                    let services = unwatch_services.clone();
                    async move {
                        watchlist::UnwatchCommand::execute(bot, msg, args, services).await
                    }
                },
            ))
            .branch(case![BotCommands::Watchlist].endpoint(move |bot: Bot, msg: Message| {
                let services = watchlist_services.clone();
                async move {
                    watchlist::WatchlistCommand::execute(bot, msg, String::new(), services).await
                }
            }))
            .branch(case![BotCommands::Check].endpoint(move |bot: Bot, msg: Message| {
                let services = check_services.clone();
                async move {
                    sentinel::CheckCommand::execute(bot, msg, String::new(), services).await
                }
            }))
            .branch(case![BotCommands::Score(args)].endpoint(
                move |bot: Bot, msg: Message, args: String| {
                    let services = score_services.clone();
                    async move { scanner::ScoreCommand::execute(bot, msg, args, services).await }
                },
            ))
            .branch(case![BotCommands::Trending].endpoint(move |bot: Bot, msg: Message| {
                let services = trending_services.clone();
                async move {
                    scanner::TrendingCommand::execute(bot, msg, String::new(), services).await
                }
            }));

        let message_handler = Update::filter_message().branch(command_handler);

        // Inline keyboard buttons
        let callback_handler =
            Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                let services = callback_services.clone();
                async move { handle_callback(bot, q, services).await }
            });

        dptree::entry()
            .branch(message_handler)
            .branch(callback_handler)
    }
}
