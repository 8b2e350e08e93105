pub mod db;
pub mod scanner_interactor;
pub mod sentinel_interactor;
pub mod watchlist_interactor;
pub mod watchlist_store;
