//! Presentation-only formatting. Everything here is best-effort and
//! returns a string; exactness matters only for [`format_wei`], which
//! feeds the wire result. Floats appear only in display paths.

use alloy::primitives::U256;
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Both supported chains use an 18-decimal native token.
const ETH_DECIMALS: u32 = 18;

/// Narrow no-break space, the fr-FR digit group separator.
const GROUP_SEP: char = '\u{202F}';

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

// ── Balances ─────────────────────────────────────────────────────────

/// Exact wei → ether decimal string: integer part, then up to 18
/// fractional digits with trailing zeros stripped. `"0"` for zero,
/// `"1.5"` for 1.5 × 10^18. Lossless; never goes through a float.
pub fn format_wei(wei: U256) -> String {
    let divisor = U256::from(10u64).pow(U256::from(ETH_DECIMALS));
    let int = wei / divisor;
    let frac = wei % divisor;
    if frac.is_zero() {
        return int.to_string();
    }
    let frac = format!("{:0>width$}", frac.to_string(), width = ETH_DECIMALS as usize);
    format!("{}.{}", int, frac.trim_end_matches('0'))
}

/// Display form of a balance: `"0"` for zero, scientific notation with
/// two fractional digits below 1e-6, otherwise fixed-point with up to
/// `max_decimals` digits and trailing zeros stripped.
pub fn format_balance(wei: U256, max_decimals: usize) -> String {
    let value: f64 = format_wei(wei).parse().unwrap_or(0.0);
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.000001 {
        return format!("{value:.2e}");
    }
    let fixed = format!("{value:.max_decimals$}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Balance with its currency symbol, e.g. `"1.5 ETH"`.
pub fn format_balance_with_unit(wei: U256, symbol: &str) -> String {
    format!("{} {}", format_balance(wei, 6), symbol)
}

// ── Addresses & labels ───────────────────────────────────────────────

/// Truncated address with the default 6/4 split:
/// `"0x4838...5f97"`.
pub fn format_address(address: &str) -> String {
    format_address_with(address, 6, 4)
}

/// `start` leading + `...` + `end` trailing characters. Strings not
/// longer than `start + end` come back unchanged. Counts characters,
/// not bytes, so arbitrary input (an ENS name, a mislabeled value)
/// never splits a multi-byte character.
pub fn format_address_with(address: &str, start: usize, end: usize) -> String {
    let len = address.chars().count();
    if len <= start + end {
        return address.to_string();
    }
    let head: String = address.chars().take(start).collect();
    let tail: String = address.chars().skip(len - end).collect();
    format!("{head}...{tail}")
}

/// Capitalize each word-initial letter: `"mode mainnet"` →
/// `"Mode Mainnet"`.
pub fn format_chain_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}

/// First letter upper, rest lower.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

// ── Locale formatting (fr-FR) ────────────────────────────────────────

/// fr-FR number: narrow no-break space groups, comma decimals, at most
/// three fractional digits.
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// fr-FR USD amount, e.g. `"1 234,56 $US"` (always two decimals).
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    out.push(',');
    out.push_str(frac_part);
    out.push(GROUP_SEP);
    out.push_str("$US");
    out
}

/// Long French date in UTC, e.g. `"15 mars 2024 à 14:30"`. Empty
/// string if the timestamp is outside chrono's range.
pub fn format_date(timestamp_ms: i64) -> String {
    let Some(date) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
        return String::new();
    };
    format!(
        "{} {} {} à {:02}:{:02}",
        date.day(),
        MONTHS_FR[date.month0() as usize],
        date.year(),
        date.hour(),
        date.minute()
    )
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(GROUP_SEP);
        }
        out.push(c);
    }
    out
}
