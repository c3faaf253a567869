// Money helpers shared by the engine and whatever renders the bill.

use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Parses a raw item price as typed by the user, e.g. "12.50" or " 7 ".
///
/// Rejects empty text, anything that is not a plain decimal number, and values
/// that are not finite or not strictly positive. The whole text must be numeric:
/// unlike JavaScript's `parseFloat`, a trailing suffix is not ignored, so "12abc"
/// is rejected rather than read as 12.
pub fn parse_price(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Price is empty"));
    }

    let price = f64::from_str(trimmed)
        .map_err(|e| anyhow!("Failed to parse price '{}': {}", raw, e))?;

    // f64::from_str accepts "inf" and "NaN"
    if !price.is_finite() {
        return Err(anyhow!("Price '{}' is not a finite number", raw));
    }
    if price <= 0.0 {
        return Err(anyhow!("Price '{}' must be greater than zero", raw));
    }
    Ok(price)
}

/// Formats an amount with two fractional digits, e.g. 4.5 -> "4.50".
///
/// Exact halves of a cent round away from zero (0.125 -> "0.13"), like
/// JavaScript's `toFixed(2)`. Other values round to the nearest cent.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round_cent_ties_away(value))
}

// `{:.2}` rounds exact ties to even. A double can only sit exactly on a half cent
// when it is a multiple of 1/8, and then `value * 100.0` is exact.
fn round_cent_ties_away(value: f64) -> f64 {
    let cents = value * 100.0;
    let is_tie = (value * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5;
    if is_tie {
        cents.round() / 100.0
    } else {
        value
    }
}

/// Formats an amount with a currency symbol prefix, e.g. "$37.50".
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_amount(value))
}
