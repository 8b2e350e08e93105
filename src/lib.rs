pub mod commands;
pub mod config;
pub mod dexscreener;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod scoring;
pub mod services;
pub mod utils;
pub mod view;

/// Crate version reported at startup
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used items
pub use config::Settings;
pub use di::{create_application, ServiceContainer};
pub use entity::*;
pub use router::{Router, TelegramRouter};
pub use services::SentinelService;
