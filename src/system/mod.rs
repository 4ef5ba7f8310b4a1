//! The system module holds the converter's fixed machinery: the exchange rate
//! table and the engine that applies it.

pub mod converter;
pub mod rates;
