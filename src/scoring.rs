use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::entity::Quote;

/// Highest score the current rule table can produce.
pub const MAX_SAFETY_SCORE: u32 = 80;

/// Display band for a safety score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyLabel {
    SafeIsh,
    Risky,
    DegenPlay,
}

impl SafetyLabel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 60 => SafetyLabel::SafeIsh,
            s if s >= 30 => SafetyLabel::Risky,
            _ => SafetyLabel::DegenPlay,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SafetyLabel::SafeIsh => "🟢",
            SafetyLabel::Risky => "🟡",
            SafetyLabel::DegenPlay => "🔴",
        }
    }
}

impl std::fmt::Display for SafetyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafetyLabel::SafeIsh => write!(f, "Safe-ish"),
            SafetyLabel::Risky => write!(f, "Risky"),
            SafetyLabel::DegenPlay => write!(f, "Degen Play"),
        }
    }
}

/// Heuristic quality score of a quote as of `now`.
///
/// Each factor contributes its highest matching band; missing metrics score nothing.
pub fn safety_score(quote: &Quote, now: DateTime<Utc>) -> u32 {
    let liquidity = band(quote.liquidity_usd, 100_000.0, 30, 10_000.0, 15);
    let volume = band(quote.volume_24h_usd, 100_000.0, 20, 10_000.0, 10);
    let age = band(quote.age_hours(now).unwrap_or(0.0), 24.0, 20, 6.0, 10);
    let boosts = if quote.active_boosts > 0 { 10 } else { 0 };

    liquidity + volume + age + boosts
}

pub fn safety_label(quote: &Quote, now: DateTime<Utc>) -> SafetyLabel {
    SafetyLabel::from_score(safety_score(quote, now))
}

fn band(value: f64, high: f64, high_points: u32, low: f64, low_points: u32) -> u32 {
    if value > high {
        high_points
    } else if value > low {
        low_points
    } else {
        0
    }
}

/// Orders quotes safest first, breaking ties by liquidity.
pub fn rank_by_safety(quotes: &mut [Quote], now: DateTime<Utc>) {
    quotes.sort_by(|a, b| {
        safety_score(b, now)
            .cmp(&safety_score(a, now))
            .then_with(|| {
                b.liquidity_usd
                    .partial_cmp(&a.liquidity_usd)
                    .unwrap_or(Ordering::Equal)
            })
    });
}
