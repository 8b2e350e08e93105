use lazy_static::lazy_static;
use regex::Regex;

// Validate a token address: Solana base58 public key or EVM hex address
pub fn validate_token_address(address: &str) -> bool {
    lazy_static! {
        static ref EVM_ADDRESS: Regex = Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap();
    }

    if EVM_ADDRESS.is_match(address) {
        return true;
    }

    match bs58::decode(address).into_vec() {
        Ok(bytes) => bytes.len() == 32,
        Err(_) => false,
    }
}

// Key used to match addresses: EVM hex addresses are case-insensitive, base58 ones are not
pub fn address_key(address: &str) -> String {
    let address = address.trim();
    if address
        .get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("0x"))
    {
        address.to_ascii_lowercase()
    } else {
        address.to_string()
    }
}

// Split addresses into batches of at most `chunk_size` without consuming the input
pub fn chunk_addresses(addresses: &[String], chunk_size: usize) -> Vec<Vec<String>> {
    addresses
        .chunks(chunk_size.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

// Parse an alert threshold such as "50", "50%" or "12.5"
pub fn parse_threshold(input: &str) -> Option<f64> {
    let value = input.trim().trim_end_matches('%').parse::<f64>().ok()?;

    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

// Format a USD amount with thousands separators, e.g. 1234567.8 -> "1,234,567.8"
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }

    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && rounded > 0.0 { "-" } else { "" };

    match cents {
        0 => format!("{}{}", sign, grouped),
        c if c % 10 == 0 => format!("{}{}.{}", sign, grouped, c / 10),
        c => format!("{}{}.{:02}", sign, grouped, c),
    }
}

// Format a token price with 6 decimals
pub fn format_price(price: f64) -> String {
    format!("{:.6}", price)
}

// Shorten address for display
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }

    let start = &address[..5];
    let end = &address[address.len() - 5..];

    format!("{}...{}", start, end)
}
