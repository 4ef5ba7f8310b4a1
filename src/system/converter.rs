//! The converter module turns what the user typed into a converted amount.
//!
//! Everything here is synchronous and pure. The simulated network delay and
//! the pending state around it belong to the [controller][0].
//!
//! ```rust
//! use converter_core::{
//!     models::currency::CurrencyCode,
//!     system::{converter, rates::RateTable},
//! };
//! use rust_decimal_macros::dec;
//!
//! let rates = RateTable::standard();
//! let eur = converter::convert("100", CurrencyCode::USD, CurrencyCode::EUR, &rates).unwrap();
//! assert_eq!(eur, dec!(91));
//! assert!(converter::convert("abc", CurrencyCode::USD, CurrencyCode::EUR, &rates).is_err());
//! ```
//!
//! [0]: ../../controller/index.html

use crate::{
    error::{Error, Result},
    models::currency::CurrencyCode,
    system::rates::RateTable,
};
use rust_decimal::prelude::*;

/// Parse the amount input into a positive decimal.
///
/// Surrounding whitespace is ignored and scientific notation (`1e3`) is
/// accepted. Empty, unparseable, zero, and negative amounts are all an
/// `Error::InvalidAmount`. A well formed positive amount that a `Decimal`
/// can't hold (above `Decimal::MAX`, or too small to survive rounding to 28
/// decimal places) is an `Error::AmountOutOfRange`.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let text = text.trim();
    // rust_decimal quietly skips digit separators, a number input would not
    if text.is_empty() || text.contains('_') {
        Err(Error::InvalidAmount)?;
    }
    match Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
        Ok(amount) if amount > Decimal::zero() => Ok(amount),
        _ if is_positive_numeral(text) => Err(Error::AmountOutOfRange),
        _ => Err(Error::InvalidAmount),
    }
}

/// Whether `text` spells a positive number: an optional `+`, digits with at
/// most one decimal point, an optional exponent, and a nonzero digit in the
/// mantissa.
fn is_positive_numeral(text: &str) -> bool {
    let text = text.strip_prefix('+').unwrap_or(text);
    let (mantissa, exponent) = match text.find(&['e', 'E'][..]) {
        Some(idx) => (&text[..idx], Some(&text[idx + 1..])),
        None => (text, None),
    };
    let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    let mut parts = mantissa.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next().unwrap_or("");
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return false;
    }
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(&['+', '-'][..]).unwrap_or(exponent);
        if digits.is_empty() || !is_digits(digits) {
            return false;
        }
    }
    mantissa.chars().any(|c| matches!(c, '1'..='9'))
}

/// Convert an already-parsed amount from `source` into `target`.
///
/// Converting a currency into itself hands back the amount untouched without
/// consulting the rate table.
pub fn convert_amount(amount: Decimal, source: CurrencyCode, target: CurrencyCode, rates: &RateTable) -> Result<Decimal> {
    if amount <= Decimal::zero() {
        Err(Error::InvalidAmount)?;
    }
    if source == target {
        return Ok(amount);
    }
    let rate = rates.lookup(source, target)?;
    amount.checked_mul(rate).ok_or(Error::ConversionFailed)
}

/// Validate the raw amount text and convert it from `source` into `target`.
pub fn convert(amount_text: &str, source: CurrencyCode, target: CurrencyCode, rates: &RateTable) -> Result<Decimal> {
    let amount = parse_amount(amount_text)?;
    convert_amount(amount, source, target, rates)
}
