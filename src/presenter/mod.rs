pub mod scanner_presenter;
pub mod sentinel_presenter;
pub mod watchlist_presenter;
