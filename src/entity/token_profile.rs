use serde::{Deserialize, Serialize};

/// Token listed by the DexScreener boost or profile feeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenProfile {
    pub chain_id: String,
    pub token_address: String,
    pub url: Option<String>,
}
