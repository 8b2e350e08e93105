use crate::entity::{Quote, WatchEntry};

/// A watchlist entry together with its live quote, if one resolved.
#[derive(Debug, Clone)]
pub struct WatchlistItem {
    pub entry: WatchEntry,
    pub quote: Option<Quote>,
}

impl WatchlistItem {
    // Percent change since the entry was bookmarked
    pub fn percent_change(&self) -> Option<f64> {
        let quote = self.quote.as_ref()?;
        self.entry.percent_change(quote.price_usd)
    }
}
