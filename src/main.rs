//! Vibe Sentinel for Telegram - Main executable
//!
//! Watches bookmarked tokens on DexScreener and alerts Telegram chats when
//! one pumps past its threshold. Also serves the watchlist bot commands.
use anyhow::Context;
use dotenv::dotenv;
use log::{error, info};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::sync::Arc;
use teloxide::{dptree, prelude::*, Bot};
use vibe_sentinel::{Router, Settings};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting Vibe Sentinel v{}", vibe_sentinel::VERSION);

    let settings = Settings::from_env().context("Failed to load settings")?;

    // Load and validate environment variables
    let bot_token = env::var("TELEGRAM_BOT_TOKEN")
        .context("TELEGRAM_BOT_TOKEN must be set in environment variables")?;

    let database_url =
        env::var("DATABASE_URL").context("DATABASE_URL must be set in environment variables")?;

    // Create Telegram bot instance
    let bot = Bot::new(bot_token);

    // Setup database connection pool
    info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .connect(&database_url)
        .await
        .context("Failed to create database connection pool")?;
    let db_pool = Arc::new(db_pool);

    // Create a separate connection for migrations
    let db_pool_for_migration = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .context("Failed to create migration connection pool")?;

    // Run database migrations
    info!("Running database migrations...");
    if let Err(e) = sqlx::migrate!("./migrations")
        .run(&db_pool_for_migration)
        .await
    {
        error!("Failed to run migrations: {}", e);
        return Err(anyhow::Error::from(e));
    }
    info!("Migrations completed successfully");

    // Close migration connection
    db_pool_for_migration.close().await;

    info!("Initializing bot application...");
    let (router, bot, service_container, mut sentinel_service) =
        vibe_sentinel::create_application(bot, db_pool, settings.clone())?;

    // Single pass for cron-style scheduling
    if settings.run_once {
        let summary = sentinel_service.run_once().await?;
        info!("Sentinel pass finished: {}", summary);
        return Ok(());
    }

    info!("Starting sentinel background service...");
    if let Err(e) = sentinel_service.start().await {
        error!("Failed to start sentinel service: {}", e);
    } else {
        info!("Sentinel service started successfully");
    }

    if let Err(e) = bot
        .set_my_commands(
            <vibe_sentinel::commands::BotCommands as teloxide::utils::command::BotCommands>::bot_commands(),
        )
        .await
    {
        error!("Failed to register bot commands: {}", e);
    }

    // Get the handler from the router
    let handler = router.setup_handlers();

    // Build dispatcher with dependency injections and control-C handling
    let mut dispatcher = teloxide::dispatching::Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![service_container])
        .enable_ctrlc_handler()
        .build();

    info!("Bot is running! Press Ctrl+C to stop.");
    dispatcher.dispatch().await;

    info!("Stopping sentinel service...");
    sentinel_service.stop().await;

    Ok(())
}
