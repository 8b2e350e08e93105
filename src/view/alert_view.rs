use teloxide::utils::html;

use crate::entity::{Quote, WatchEntry};
use crate::scoring::SafetyLabel;
use crate::utils::{format_price, format_usd};

/// Builds the Telegram HTML body of a pump alert.
pub fn format_alert(
    entry: &WatchEntry,
    quote: &Quote,
    entry_price: f64,
    percent_change: f64,
    safety_score: u32,
) -> String {
    let rocket = if percent_change > 100.0 {
        "🚀🚀🚀"
    } else {
        "🚀"
    };

    format!(
        "{rocket} <b>VIBE SENTINEL ALERT</b> {rocket}\n\n\
         <b>{} ({})</b> is PUMPING!\n\n\
         💰 <b>Price:</b> ${}\n\
         📈 <b>Gain:</b> +{:.2}%\n\
         🎯 <b>Entry:</b> ${}\n\
         💧 <b>Liq:</b> ${}\n\
         🛡 <b>Safety:</b> {} ({})\n\n\
         <a href=\"{}\">View on DexScreener</a>",
        html::escape(entry.display_name()),
        html::escape(&entry.symbol),
        format_price(quote.price_usd),
        percent_change,
        format_price(entry_price),
        format_usd(quote.liquidity_usd),
        SafetyLabel::from_score(safety_score),
        safety_score,
        html::escape(&quote.url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry() -> WatchEntry {
        WatchEntry {
            id: 7,
            contract_address: "TokenA".to_string(),
            symbol: "VIBE".to_string(),
            name: Some("Vibe <Coin>".to_string()),
            network: Some("solana".to_string()),
            initial_price: Some(1.0),
            chat_id: Some(123),
            alert_threshold: None,
            last_alerted_at: None,
            created_at: Utc::now(),
        }
    }

    fn quote(price: f64) -> Quote {
        Quote {
            token_address: "TokenA".to_string(),
            symbol: "VIBE".to_string(),
            name: "Vibe".to_string(),
            chain_id: "solana".to_string(),
            dex_id: "raydium".to_string(),
            pair_address: "pair".to_string(),
            price_usd: price,
            volume_24h_usd: 0.0,
            liquidity_usd: 1_234_567.0,
            pair_created_at: None,
            active_boosts: 0,
            url: "https://dexscreener.com/solana/pair".to_string(),
        }
    }

    #[test]
    fn alert_contains_prices_gain_and_link() {
        let text = format_alert(&entry(), &quote(1.6), 1.0, 60.0, 30);

        assert!(text.starts_with("🚀 <b>VIBE SENTINEL ALERT</b> 🚀"));
        assert!(text.contains("Vibe &lt;Coin&gt; (VIBE)"));
        assert!(text.contains("$1.600000"));
        assert!(text.contains("+60.00%"));
        assert!(text.contains("<b>Entry:</b> $1.000000"));
        assert!(text.contains("$1,234,567"));
        assert!(text.contains("Risky (30)"));
        assert!(text.contains("href=\"https://dexscreener.com/solana/pair\""));
    }

    #[test]
    fn big_gains_get_triple_rocket() {
        let text = format_alert(&entry(), &quote(2.5), 1.0, 150.0, 0);
        assert!(text.starts_with("🚀🚀🚀"));
    }
}
