use serde::{Deserialize, Serialize};

use crate::entity::Quote;

/// One trading pair returned by a token lookup, priced or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairListing {
    pub token_address: String,
    pub pair_address: String,
    pub liquidity_usd: f64,
    /// `None` when the pair carries no usable USD price
    pub quote: Option<Quote>,
}

impl From<Quote> for PairListing {
    fn from(quote: Quote) -> Self {
        PairListing {
            token_address: quote.token_address.clone(),
            pair_address: quote.pair_address.clone(),
            liquidity_usd: quote.liquidity_usd,
            quote: Some(quote),
        }
    }
}
