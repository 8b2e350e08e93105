#[derive(Debug, thiserror::Error)]
pub enum SentinelError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Market data error: {0}")]
    MarketData(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid token address")]
    InvalidAddress,

    #[error("Invalid alert threshold: {0}")]
    InvalidThreshold(String),

    #[error("Token not found on DexScreener: {0}")]
    TokenNotFound(String),
}
