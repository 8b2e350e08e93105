pub mod notification_service;
pub mod sentinel_service;

pub use notification_service::{NotificationSender, TelegramNotifier};
pub use sentinel_service::SentinelService;
