pub mod container;

pub use container::ServiceContainer;

use anyhow::Result;
use sqlx::PgPool;
use std::sync::Arc;
use teloxide::Bot;

use crate::config::Settings;
use crate::router::TelegramRouter;
use crate::services::SentinelService;

/// Wire the service container, the Telegram router and the sentinel scheduler
pub fn create_application(
    bot: Bot,
    db_pool: Arc<PgPool>,
    settings: Settings,
) -> Result<(TelegramRouter, Bot, Arc<ServiceContainer>, SentinelService)> {
    let services = Arc::new(ServiceContainer::new(db_pool, bot.clone(), settings.clone())?);

    let router = TelegramRouter::new(services.clone());

    let sentinel_service = SentinelService::new(
        services.sentinel(),
        settings.interval(),
        settings.pass_timeout(),
    );

    Ok((router, bot, services, sentinel_service))
}
