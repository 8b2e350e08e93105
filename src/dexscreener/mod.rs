// src/dexscreener/mod.rs
pub mod client;
pub mod models;
pub mod price_resolver;

pub use client::{DexScreenerClient, MarketDataClient};
pub use price_resolver::PriceResolver;
