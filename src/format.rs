//! Display formatting for amounts and rates. This is presentation only; nothing
//! in here feeds back into a conversion.
//!
//! Amounts follow en-US currency formatting: the currency's symbol up front,
//! comma thousands separators, and exactly two decimal places rounded half away
//! from zero.

use crate::models::currency::CurrencyCode;
use rust_decimal::{prelude::*, RoundingStrategy};

/// Decimal places shown for amounts.
pub const AMOUNT_PLACES: u32 = 2;
/// Decimal places shown for exchange rates.
pub const RATE_PLACES: u32 = 4;

/// Round `value` to exactly `places` decimal places, padding with zeros.
///
/// The padding happens on the digits rather than through `Decimal::rescale`,
/// which can't add scale once the integer part fills the mantissa.
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    let digits = rounded.to_string();
    let (whole, fraction) = match digits.find('.') {
        Some(idx) => (&digits[..idx], &digits[idx + 1..]),
        None => (digits.as_str(), ""),
    };
    if places == 0 {
        return whole.to_string();
    }
    format!("{}.{:0<width$}", whole, fraction, width = places as usize)
}

/// Format an amount of the given currency, ie `$1,234.57` or `¥15,320.00`.
pub fn format_currency(value: Decimal, currency: CurrencyCode) -> String {
    let fixed = format_fixed(value, AMOUNT_PLACES);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = match digits.find('.') {
        Some(idx) => (&digits[..idx], &digits[idx..]),
        None => (digits, ""),
    };
    format!("{}{}{}{}", sign, currency.symbol(), group_thousands(whole), fraction)
}

/// Format an exchange rate to four places, ie `0.9100`.
pub fn format_rate(rate: Decimal) -> String {
    format_fixed(rate, RATE_PLACES)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
