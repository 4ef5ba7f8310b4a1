use crate::models::currency::CurrencyCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("configuration invalid: {0}")]
    ConfigInvalid(String),
    #[error("Conversion failed. Please try again.")]
    ConversionFailed,
    #[error("Amount is outside the supported range")]
    AmountOutOfRange,
    #[error("error building object: {0}")]
    BuilderFailed(String),
    #[error("an exchange rate from {0} to itself is implicit and cannot be stored")]
    IdentityRate(CurrencyCode),
    #[error("Please enter a valid positive number")]
    InvalidAmount,
    #[error("exchange rate from {0} to {1} must be positive")]
    InvalidRate(CurrencyCode, CurrencyCode),
    #[error("no exchange rate from {0} to {1}")]
    MissingRate(CurrencyCode, CurrencyCode),
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

impl Error {
    /// The text shown in the widget's error banner for this error.
    ///
    /// Only amount validation is reported verbatim. Anything else that goes
    /// wrong while converting gets the generic retry message.
    pub fn banner(&self) -> String {
        match self {
            Error::InvalidAmount | Error::AmountOutOfRange => self.to_string(),
            _ => Error::ConversionFailed.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners() {
        assert_eq!(Error::InvalidAmount.banner(), "Please enter a valid positive number");
        assert_eq!(Error::AmountOutOfRange.banner(), "Amount is outside the supported range");
        assert_eq!(Error::MissingRate(CurrencyCode::USD, CurrencyCode::EUR).banner(), "Conversion failed. Please try again.");
        assert_eq!(Error::ConversionFailed.banner(), "Conversion failed. Please try again.");
    }
}
