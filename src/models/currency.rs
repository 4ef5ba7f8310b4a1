//! The currency module holds the set of currencies the converter knows about.
//!
//! The set is closed: selection controls only ever offer these seven codes and
//! the [rate table] is required to cover every directed pair between them.
//!
//! [rate table]: ../../system/rates/index.html

use crate::error::{Error, Result};
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

/// A supported currency, named by its ISO 4217 code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum CurrencyCode {
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    INR,
}

impl CurrencyCode {
    /// Every supported currency, in the order selectors list them.
    pub const ALL: [CurrencyCode; 7] = [
        CurrencyCode::USD,
        CurrencyCode::EUR,
        CurrencyCode::GBP,
        CurrencyCode::JPY,
        CurrencyCode::CAD,
        CurrencyCode::AUD,
        CurrencyCode::INR,
    ];

    /// The three-letter ISO code.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
            CurrencyCode::GBP => "GBP",
            CurrencyCode::JPY => "JPY",
            CurrencyCode::CAD => "CAD",
            CurrencyCode::AUD => "AUD",
            CurrencyCode::INR => "INR",
        }
    }

    /// The English display name.
    pub fn name(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "US Dollar",
            CurrencyCode::EUR => "Euro",
            CurrencyCode::GBP => "British Pound",
            CurrencyCode::JPY => "Japanese Yen",
            CurrencyCode::CAD => "Canadian Dollar",
            CurrencyCode::AUD => "Australian Dollar",
            CurrencyCode::INR => "Indian Rupee",
        }
    }

    /// The symbol an en-US formatter prefixes amounts in this currency with.
    ///
    /// Dollar currencies other than USD get a disambiguating prefix.
    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "$",
            CurrencyCode::EUR => "€",
            CurrencyCode::GBP => "£",
            CurrencyCode::JPY => "¥",
            CurrencyCode::CAD => "CA$",
            CurrencyCode::AUD => "A$",
            CurrencyCode::INR => "₹",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        CurrencyCode::ALL.iter()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| Error::UnknownCurrency(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes() {
        assert_eq!("USD".parse::<CurrencyCode>(), Ok(CurrencyCode::USD));
        assert_eq!(" jpy ".parse::<CurrencyCode>(), Ok(CurrencyCode::JPY));
        assert_eq!("Inr".parse::<CurrencyCode>(), Ok(CurrencyCode::INR));
        assert_eq!("XBT".parse::<CurrencyCode>(), Err(Error::UnknownCurrency("XBT".into())));
        assert_eq!("".parse::<CurrencyCode>(), Err(Error::UnknownCurrency("".into())));
    }

    #[test]
    fn codes_round_trip_through_display() {
        for code in CurrencyCode::ALL.iter() {
            assert_eq!(code.to_string().parse::<CurrencyCode>(), Ok(*code));
        }
    }

    #[test]
    fn names_and_symbols() {
        assert_eq!(CurrencyCode::GBP.name(), "British Pound");
        assert_eq!(CurrencyCode::AUD.name(), "Australian Dollar");
        assert_eq!(CurrencyCode::EUR.symbol(), "€");
        assert_eq!(CurrencyCode::CAD.symbol(), "CA$");
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&CurrencyCode::JPY).unwrap(), "\"JPY\"");
        assert_eq!(serde_json::from_str::<CurrencyCode>("\"CAD\"").unwrap(), CurrencyCode::CAD);
    }
}
