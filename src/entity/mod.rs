mod pair_listing;
mod pass_summary;
mod quote;
mod sentinel_error;
mod token_profile;
mod watch_entry;
mod watchlist;

pub use pair_listing::PairListing;
pub use pass_summary::PassSummary;
pub use quote::Quote;
pub use sentinel_error::SentinelError;
pub use token_profile::TokenProfile;
pub use watch_entry::{NewWatchEntry, WatchEntry, DEFAULT_ALERT_THRESHOLD};
pub use watchlist::WatchlistItem;
