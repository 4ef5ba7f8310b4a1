//! The core of a currency converter widget: a fixed table of exchange rates
//! between seven currencies, a pure conversion engine, the widget's form state
//! and the transactions that change it, and an async controller that simulates
//! the network round trip of a conversion.
//!
//! ```rust
//! use converter_core::{
//!     controller::{Converter, Trigger},
//!     models::currency::CurrencyCode,
//! };
//! use rust_decimal_macros::dec;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut converter = Converter::standard();
//! converter.set_amount_text("100");
//! converter.set_target(CurrencyCode::GBP);
//! assert!(matches!(converter.trigger_conversion(), Ok(Trigger::Pending(_))));
//! let state = converter.settle().await;
//! assert_eq!(state.result(), &Some(dec!(78)));
//! # }
//! ```

#[macro_use]
mod util;
#[macro_use]
pub mod models;
pub mod error;
pub mod config;
pub mod system;
pub mod transactions;
pub mod controller;
pub mod format;
pub mod view;
