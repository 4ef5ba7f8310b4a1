//! The rates module holds the table of directed exchange rates the converter
//! multiplies by.
//!
//! Rates are authored per direction. Nothing here derives a missing direction
//! from its inverse, and `rate(A, B) * rate(B, A)` is not expected to be 1.
//! Identity pairs are never stored: converting a currency into itself always
//! uses a rate of exactly 1.

use crate::{
    error::{Error, Result},
    models::currency::CurrencyCode,
};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::collections::HashMap;

/// A mapping of source currency -> target currency -> rate.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct RateTable {
    rates: HashMap<CurrencyCode, HashMap<CurrencyCode, Decimal>>,
}

impl RateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rate table the widget ships with. Covers every pair.
    pub fn standard() -> Self {
        use CurrencyCode::*;
        let rates = [
            (USD, EUR, num!(0.91)), (USD, GBP, num!(0.78)), (USD, JPY, num!(153.2)), (USD, CAD, num!(1.36)), (USD, AUD, num!(1.49)), (USD, INR, num!(83.16)),
            (EUR, USD, num!(1.10)), (EUR, GBP, num!(0.86)), (EUR, JPY, num!(168.35)), (EUR, CAD, num!(1.49)), (EUR, AUD, num!(1.64)), (EUR, INR, num!(91.39)),
            (GBP, USD, num!(1.28)), (GBP, EUR, num!(1.16)), (GBP, JPY, num!(195.77)), (GBP, CAD, num!(1.73)), (GBP, AUD, num!(1.91)), (GBP, INR, num!(106.34)),
            (JPY, USD, num!(0.0065)), (JPY, EUR, num!(0.0059)), (JPY, GBP, num!(0.0051)), (JPY, CAD, num!(0.0089)), (JPY, AUD, num!(0.0097)), (JPY, INR, num!(0.54)),
            (CAD, USD, num!(0.74)), (CAD, EUR, num!(0.67)), (CAD, GBP, num!(0.58)), (CAD, JPY, num!(113.20)), (CAD, AUD, num!(1.10)), (CAD, INR, num!(61.75)),
            (AUD, USD, num!(0.67)), (AUD, EUR, num!(0.61)), (AUD, GBP, num!(0.52)), (AUD, JPY, num!(102.82)), (AUD, CAD, num!(0.91)), (AUD, INR, num!(55.81)),
            (INR, USD, num!(0.012)), (INR, EUR, num!(0.011)), (INR, GBP, num!(0.0094)), (INR, JPY, num!(1.84)), (INR, CAD, num!(0.016)), (INR, AUD, num!(0.018)),
        ];
        let mut table = Self::new();
        for (source, target, rate) in rates.iter() {
            table.rates.entry(*source).or_insert_with(HashMap::new).insert(*target, *rate);
        }
        table
    }

    /// Store the rate for converting `source` into `target`.
    ///
    /// Identity pairs can't be stored and rates must be positive.
    pub fn insert(&mut self, source: CurrencyCode, target: CurrencyCode, rate: Decimal) -> Result<()> {
        if source == target {
            Err(Error::IdentityRate(source))?;
        }
        if rate <= Decimal::zero() {
            Err(Error::InvalidRate(source, target))?;
        }
        self.rates.entry(source).or_insert_with(HashMap::new).insert(target, rate);
        Ok(())
    }

    /// Builder-style version of `insert()`.
    pub fn with_rate(mut self, source: CurrencyCode, target: CurrencyCode, rate: Decimal) -> Result<Self> {
        self.insert(source, target, rate)?;
        Ok(self)
    }

    /// Find the rate for converting `source` into `target`.
    pub fn lookup(&self, source: CurrencyCode, target: CurrencyCode) -> Result<Decimal> {
        if source == target {
            return Ok(Decimal::one());
        }
        self.rates.get(&source)
            .and_then(|targets| targets.get(&target))
            .cloned()
            .ok_or(Error::MissingRate(source, target))
    }

    /// Make sure every non-identity pair has a rate, returning the first
    /// missing pair otherwise.
    pub fn validate(&self) -> Result<()> {
        for source in CurrencyCode::ALL.iter() {
            for target in CurrencyCode::ALL.iter() {
                if source != target {
                    self.lookup(*source, *target)?;
                }
            }
        }
        Ok(())
    }

    /// Iterate over every stored (source, target, rate).
    pub fn pairs(&self) -> impl Iterator<Item = (CurrencyCode, CurrencyCode, Decimal)> + '_ {
        self.rates.iter()
            .flat_map(|(source, targets)| {
                targets.iter().map(move |(target, rate)| (*source, *target, *rate))
            })
    }
}
