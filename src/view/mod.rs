pub mod alert_view;
pub mod scanner_view;
pub mod sentinel_view;
pub mod watchlist_view;
